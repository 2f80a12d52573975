//! Corpus sources.
//!
//! A corpus comes either from a JSONL file named on the command line or in
//! the config file, or from the records compiled into the binary.

use crate::corpus::Corpus;
use crate::model::error::InputError;
use crate::model::ParseError;
use std::path::PathBuf;
use tracing::info;

pub mod file;

pub use file::FileSource;

/// Where the corpus is read from.
///
/// Sum type enforces exactly one variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorpusSource {
    /// A JSONL file on disk.
    File(FileSource),
    /// The built-in seed records.
    Builtin,
}

/// A corpus plus the records that were skipped while building it.
#[derive(Debug)]
pub struct LoadedCorpus {
    /// Valid records in file order.
    pub corpus: Corpus,
    /// One entry per skipped line.
    pub errors: Vec<ParseError>,
}

impl LoadedCorpus {
    /// Refuse the corpus if any line was skipped.
    ///
    /// # Errors
    ///
    /// Returns the first parse error encountered.
    pub fn into_strict(self) -> Result<Corpus, ParseError> {
        match self.errors.into_iter().next() {
            Some(error) => Err(error),
            None => Ok(self.corpus),
        }
    }
}

impl CorpusSource {
    /// Build the corpus.
    ///
    /// # Errors
    ///
    /// Returns `InputError::Io` if a corpus file cannot be read.
    pub fn load(&self) -> Result<LoadedCorpus, InputError> {
        let loaded = match self {
            CorpusSource::File(source) => {
                let (comments, errors) = source.read_comments()?;
                LoadedCorpus {
                    corpus: Corpus::new(comments),
                    errors,
                }
            }
            CorpusSource::Builtin => LoadedCorpus {
                corpus: Corpus::seed(),
                errors: Vec::new(),
            },
        };

        info!(
            source = ?self,
            comments = loaded.corpus.len(),
            skipped = loaded.errors.len(),
            "Corpus loaded"
        );
        Ok(loaded)
    }
}

/// Pick the corpus source.
///
/// # Logic:
/// 1. If a path is provided: use that file
/// 2. Else: use the built-in corpus
///
/// # Errors
///
/// Returns `InputError::FileNotFound` if the path does not name a file.
pub fn detect_corpus_source(path: Option<PathBuf>) -> Result<CorpusSource, InputError> {
    match path {
        Some(path) => Ok(CorpusSource::File(FileSource::new(path)?)),
        None => Ok(CorpusSource::Builtin),
    }
}
