use std::{fs::File, io::BufReader, path::Path};

use crate::error::CorpusError;

/// A non-empty, read-only list of words used to build random phrases.
///
/// A corpus is loaded once at startup, typically from a JSON array of strings
/// written by a word extraction tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCorpus(Vec<String>);

impl WordCorpus {
    /// Construct a [`WordCorpus`] from `words`.
    ///
    /// # Errors
    ///
    /// Returns [`CorpusError::Empty`] if `words` contains no entries.
    pub fn new(words: Vec<String>) -> Result<Self, CorpusError> {
        if words.is_empty() {
            return Err(CorpusError::Empty);
        }
        Ok(Self(words))
    }

    /// Read a JSON array of strings from the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, does not contain a JSON
    /// array of strings, or the array is empty.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CorpusError> {
        let path = path.as_ref();

        let file = File::open(path).map_err(|source| CorpusError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let words: Vec<String> =
            serde_json::from_reader(BufReader::new(file)).map_err(|source| CorpusError::Json {
                path: path.to_path_buf(),
                source,
            })?;

        let corpus = Self::new(words)?;

        debug!(
            path = %path.display(),
            n_words = corpus.len(),
            "loaded word corpus"
        );

        Ok(corpus)
    }

    /// The number of words in this corpus; always non-zero.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false - a [`WordCorpus`] is never empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Return the word at `idx`, if any.
    pub fn get(&self, idx: usize) -> Option<&str> {
        self.0.get(idx).map(String::as_str)
    }

    /// Return an iterator over the words in this corpus.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl TryFrom<Vec<String>> for WordCorpus {
    type Error = CorpusError;

    fn try_from(words: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(words)
    }
}
