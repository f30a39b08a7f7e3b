use super::*;

/// A [`Hasher`] that maps every input to the same [`Digest`], causing every
/// pair of inputs to "collide".
#[derive(Debug, Default, Clone, Copy)]
pub struct ConstantHasher(pub u64);

impl Hasher for ConstantHasher {
    fn hash(&self, _input: &[u8]) -> Digest {
        Digest::new(self.0)
    }
}

/// A [`Hasher`] whose digest is the input length, so any two inputs of equal
/// length collide.
#[derive(Debug, Default, Clone, Copy)]
pub struct LengthHasher;

impl Hasher for LengthHasher {
    fn hash(&self, input: &[u8]) -> Digest {
        Digest::new(input.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_hashers() {
        let h = ConstantHasher(42);
        assert_eq!(h.hash(b"A"), h.hash(b"bananas"));

        let h = LengthHasher;
        assert_eq!(h.hash(b"AB"), h.hash(b"CD"));
        assert_ne!(h.hash(b"A"), h.hash(b"CD"));
    }
}
