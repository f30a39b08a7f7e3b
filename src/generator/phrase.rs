use std::num::NonZeroU64;

use rand::{rngs::OsRng, RngCore};

use super::{PairGenerator, WordCorpus};

/// The bytes used to join consecutive words in a phrase.
pub const SEPARATORS: [u8; 3] = [b' ', b'\t', b'\n'];

/// Generates random phrases of words drawn from a [`WordCorpus`].
///
/// Each phrase contains between 1 and `max_words` (inclusive) words, each
/// chosen uniformly at random (with replacement) from the corpus. Consecutive
/// words are joined by a single separator byte chosen uniformly from
/// [`SEPARATORS`]; a phrase never ends with a separator.
///
/// Counts and indexes are selected by reducing a random 64-bit value modulo
/// the range, which carries a negligible bias for any realistic corpus size.
#[derive(Debug, Clone)]
pub struct PhraseGenerator<R = OsRng> {
    corpus: WordCorpus,
    max_words: NonZeroU64,
    rng: R,
}

impl PhraseGenerator {
    /// Initialise a [`PhraseGenerator`] drawing from the operating system's
    /// cryptographically secure random source.
    pub fn new(corpus: WordCorpus, max_words: NonZeroU64) -> Self {
        Self::with_rng(corpus, max_words, OsRng)
    }
}

impl<R> PhraseGenerator<R> {
    /// Initialise a [`PhraseGenerator`] drawing from the provided `rng`.
    pub fn with_rng(corpus: WordCorpus, max_words: NonZeroU64, rng: R) -> Self {
        Self {
            corpus,
            max_words,
            rng,
        }
    }

    /// The corpus words are drawn from.
    pub fn corpus(&self) -> &WordCorpus {
        &self.corpus
    }

    /// The maximum number of words in a generated phrase.
    pub fn max_words(&self) -> NonZeroU64 {
        self.max_words
    }
}

impl<R> PhraseGenerator<R>
where
    R: RngCore,
{
    /// Return a uniformly selected value in `[0, n)`, for `n > 0`.
    fn below(&mut self, n: u64) -> u64 {
        self.rng.next_u64() % n
    }
}

impl<R> PairGenerator for PhraseGenerator<R>
where
    R: RngCore,
{
    fn generate(&mut self) -> Vec<u8> {
        let n_words = self.below(self.max_words.get()) + 1;

        let mut out = Vec::new();
        for i in 0..n_words {
            let idx = self.below(self.corpus.len() as u64) as usize;
            // The index is always in bounds of the non-empty corpus.
            if let Some(word) = self.corpus.get(idx) {
                out.extend_from_slice(word.as_bytes());
            }

            if i + 1 < n_words {
                let sep = self.below(SEPARATORS.len() as u64) as usize;
                out.push(SEPARATORS[sep]);
            }
        }

        out
    }
}
