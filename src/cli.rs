//! Command line arguments of the `sipcollide` binary.

use std::{num::NonZeroU64, path::PathBuf};

use clap::Parser;

use crate::{
    error::{Error, Result},
    generator::{Mode, WordCorpus},
};

/// Search for SipHash-2-4 collisions by hashing pairs of random inputs.
///
/// By default inputs are random phrases built from a JSON array of words. Pass
/// --rnd to hash random printable strings instead.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Maximum number of words per generated phrase
    #[arg(
        short = 'n',
        long = "max-words",
        value_name = "N",
        default_value_t = 1,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub max_words: u64,

    /// Generate random printable strings instead of phrases
    #[arg(long = "rnd")]
    pub random_bytes: bool,

    /// Print every generated pair (drastically reduces throughput)
    #[arg(long = "log")]
    pub log_pairs: bool,

    /// Path to a JSON array of words, required unless --rnd is set
    #[arg(value_name = "CORPUS")]
    pub corpus: Option<PathBuf>,
}

impl Args {
    /// Resolve the input generation [`Mode`] selected by these arguments,
    /// loading the word corpus if phrase mode is selected.
    ///
    /// The corpus path is ignored in random byte mode.
    ///
    /// # Errors
    ///
    /// Phrase mode requires a readable, non-empty corpus - this never falls
    /// back to random byte mode.
    pub fn mode(&self) -> Result<Mode> {
        if self.random_bytes {
            return Ok(Mode::RandomBytes);
        }

        let path = self.corpus.as_ref().ok_or(Error::MissingCorpus)?;
        let max_words = NonZeroU64::new(self.max_words).ok_or(Error::ZeroMaxWords)?;
        let corpus = WordCorpus::load(path)?;

        Ok(Mode::Phrases { corpus, max_words })
    }
}
