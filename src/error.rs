//! Fatal configuration errors.
//!
//! Every error in this module aborts a run before the collision search starts -
//! once running, the pipeline has no failure modes.

use std::path::PathBuf;

use thiserror::Error;

/// Errors loading a [`WordCorpus`].
///
/// [`WordCorpus`]: crate::generator::WordCorpus
#[derive(Debug, Error)]
pub enum CorpusError {
    /// The corpus file could not be opened or read.
    #[error("cannot read word corpus {path}: {source}")]
    Io {
        /// The corpus file path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The corpus file is not a JSON array of strings.
    #[error("word corpus {path} is not a JSON array of strings: {source}")]
    Json {
        /// The corpus file path.
        path: PathBuf,
        /// The underlying decode error.
        #[source]
        source: serde_json::Error,
    },

    /// The corpus contains no words.
    #[error("word corpus contains no words")]
    Empty,
}

/// Top-level errors configuring a collision search run.
#[derive(Debug, Error)]
pub enum Error {
    /// Phrase mode was selected without a corpus path.
    #[error("a JSON word corpus path is required unless random byte mode is enabled")]
    MissingCorpus,

    /// The maximum phrase length must be at least one word.
    #[error("maximum words per phrase must be at least 1")]
    ZeroMaxWords,

    /// The word corpus failed to load.
    #[error(transparent)]
    Corpus(#[from] CorpusError),

    /// A collision worker thread could not be started.
    #[error("failed to start collision worker: {0}")]
    Spawn(#[source] std::io::Error),
}

/// A [`Result`](std::result::Result) alias defaulting to [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
