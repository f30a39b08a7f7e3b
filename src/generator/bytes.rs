use rand::{rngs::OsRng, RngCore};

use super::PairGenerator;

/// The printable symbols random bytes are mapped onto: space, digits, upper
/// and lower case letters, and newline.
///
/// Symbols are selected by the low 6 bits of a random byte, so every entry is
/// reachable.
pub const ALPHABET: &[u8; 64] =
    b" 0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz\n";

/// Selects an [`ALPHABET`] index from a random byte.
const SYMBOL_MASK: u8 = 0x3f;

/// Generates random printable strings of 1 to 255 bytes.
///
/// The length is drawn from a single random byte, with a zero draw remapped
/// to 1 (making single byte inputs twice as likely as any other length).
#[derive(Debug, Clone)]
pub struct ByteGenerator<R = OsRng> {
    rng: R,
}

impl ByteGenerator {
    /// Initialise a [`ByteGenerator`] drawing from the operating system's
    /// cryptographically secure random source.
    pub fn new() -> Self {
        Self { rng: OsRng }
    }
}

impl Default for ByteGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> ByteGenerator<R> {
    /// Initialise a [`ByteGenerator`] drawing from the provided `rng`.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R> PairGenerator for ByteGenerator<R>
where
    R: RngCore,
{
    fn generate(&mut self) -> Vec<u8> {
        let mut len = [0_u8; 1];
        self.rng.fill_bytes(&mut len);

        let mut buf = vec![0; usize::from(len[0].max(1))];
        self.rng.fill_bytes(&mut buf);

        for v in &mut buf {
            *v = ALPHABET[usize::from(*v & SYMBOL_MASK)];
        }

        buf
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rand::{
        rngs::{mock::StepRng, StdRng},
        SeedableRng,
    };

    use super::*;

    #[test]
    fn test_zero_length_remapped() {
        // An all-zero random source draws a length of 0, and symbol index 0.
        let mut g = ByteGenerator::with_rng(StepRng::new(0, 0));
        assert_eq!(g.generate(), b" ");
    }

    #[test]
    fn test_symbol_masking() {
        // 0xFF masks to index 63, the last symbol.
        let mut g = ByteGenerator::with_rng(StepRng::new(u64::MAX, 0));

        let got = g.generate();
        assert_eq!(got.len(), 255);
        assert!(got.iter().all(|&v| v == b'\n'));

        // 0x40 masks to index 0.
        let mut g = ByteGenerator::with_rng(StepRng::new(0x4040_4040_4040_4040, 0));
        assert_eq!(g.generate(), [b' '; 0x40]);
    }

    #[test]
    fn test_all_symbols_reachable() {
        let mut g = ByteGenerator::with_rng(StdRng::seed_from_u64(42));

        let mut seen = [false; 256];
        for _ in 0..1_000 {
            for v in g.generate() {
                seen[usize::from(v)] = true;
            }
        }

        for &v in ALPHABET {
            assert!(seen[usize::from(v)], "symbol {v:#x} never generated");
        }
    }

    #[test]
    fn test_os_rng() {
        let mut g = ByteGenerator::default();
        let pair = g.pair();

        assert!((1..=255).contains(&pair.a().len()));
        assert!((1..=255).contains(&pair.b().len()));
    }

    proptest! {
        #[test]
        fn prop_bounded_printable(seed in any::<u64>()) {
            let mut g = ByteGenerator::with_rng(StdRng::seed_from_u64(seed));
            let got = g.generate();

            prop_assert!((1..=255).contains(&got.len()));
            for v in got {
                prop_assert!(ALPHABET.contains(&v), "unexpected symbol {v:#x}");
            }
        }
    }
}
