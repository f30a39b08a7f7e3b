use super::InputPair;

/// A source of candidate inputs for the collision search.
///
/// Each call yields freshly generated bytes - implementations share no mutable
/// state between successive calls beyond their random number generator.
pub trait PairGenerator {
    /// Generate a single candidate input.
    fn generate(&mut self) -> Vec<u8>;

    /// Generate an [`InputPair`] of two independently generated inputs.
    ///
    /// By default this calls [`PairGenerator::generate()`] twice.
    fn pair(&mut self) -> InputPair {
        let a = self.generate();
        let b = self.generate();
        InputPair::new(a, b)
    }
}

impl<T> PairGenerator for Box<T>
where
    T: PairGenerator + ?Sized,
{
    fn generate(&mut self) -> Vec<u8> {
        (**self).generate()
    }

    fn pair(&mut self) -> InputPair {
        (**self).pair()
    }
}
