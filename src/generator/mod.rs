//! Candidate input generation.
//!
//! A [`PairGenerator`] produces fresh [`InputPair`] instances, either as random
//! strings over a printable [`ALPHABET`] ([`ByteGenerator`]), or as random
//! phrases built from a [`WordCorpus`] ([`PhraseGenerator`]).

mod bytes;
mod corpus;
mod pair;
mod phrase;
mod r#trait;

use std::num::NonZeroU64;

pub use bytes::*;
pub use corpus::*;
pub use pair::*;
pub use phrase::*;
pub use r#trait::*;

/// The input generation strategy of a collision search run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Random printable strings of 1 to 255 bytes.
    RandomBytes,

    /// Random phrases of between 1 and `max_words` words drawn from
    /// `corpus`.
    Phrases {
        /// The words to build phrases from.
        corpus: WordCorpus,
        /// The upper (inclusive) bound of words per phrase.
        max_words: NonZeroU64,
    },
}

/// A [`PairGenerator`] implementing the strategy selected by a [`Mode`].
#[derive(Debug)]
pub enum AnyGenerator {
    /// Byte mode.
    Bytes(ByteGenerator),
    /// Phrase mode.
    Phrases(PhraseGenerator),
}

impl From<Mode> for AnyGenerator {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::RandomBytes => Self::Bytes(ByteGenerator::new()),
            Mode::Phrases { corpus, max_words } => {
                Self::Phrases(PhraseGenerator::new(corpus, max_words))
            }
        }
    }
}

impl PairGenerator for AnyGenerator {
    fn generate(&mut self) -> Vec<u8> {
        match self {
            Self::Bytes(g) => g.generate(),
            Self::Phrases(g) => g.generate(),
        }
    }
}
