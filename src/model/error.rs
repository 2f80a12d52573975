//! Error types for fsa.
//!
//! Filtering, aggregation and the search state machine are total and never
//! fail. Errors only arise at the edges: reading a corpus file, parsing its
//! records, loading configuration and starting the logger.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error wrapping every edge failure
//!   - [`InputError`] - Corpus file could not be read
//!   - [`ParseError`] - A corpus record is malformed
//!   - [`ConfigError`](crate::config::ConfigError) - Config file unreadable or invalid
//!   - [`LoggingError`](crate::logging::LoggingError) - Log file setup failed
//!
//! # Recovery Strategy
//!
//! Parse errors are **non-fatal**: the malformed line is logged and skipped, and
//! the corpus is built from the remaining records. All other errors are fatal
//! and propagate to `main`.
//!
//! An empty search result is not an error anywhere in this crate.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error.
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to read the corpus source.
    #[error("Failed to read corpus: {0}")]
    Input(#[from] InputError),

    /// A corpus record failed to parse.
    ///
    /// Only surfaces when a caller asks for strict loading; normal loading
    /// skips bad records.
    #[error("Failed to parse corpus record: {0}")]
    Parse(#[from] ParseError),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Logging could not be initialized.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),
}

/// Errors encountered when reading a corpus file.
#[derive(Debug, Error)]
pub enum InputError {
    /// The corpus file does not exist.
    ///
    /// Raised at startup when `--corpus` or `corpus_path` names a missing file.
    #[error("File not found: {path}")]
    FileNotFound {
        /// Path that was attempted.
        path: PathBuf,
    },

    /// Generic I/O failure while reading.
    #[error("IO error reading {path}: {source}")]
    Io {
        /// Path being read.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

/// A malformed corpus record.
///
/// Every variant carries the 1-based line number of the offending record so
/// the log points straight at it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// The line is not a JSON object of the expected shape.
    #[error("Invalid JSON at line {line}: {message}")]
    InvalidJson {
        /// Line number.
        line: usize,
        /// serde_json's description.
        message: String,
    },

    /// A field is present but its value is unacceptable.
    #[error("Invalid field '{field}' at line {line}: {reason}")]
    InvalidField {
        /// Line number.
        line: usize,
        /// Field name as it appears in the record.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// Timestamp not in `YYYY-MM-DD HH:MM` form.
    #[error("Invalid timestamp '{raw}' at line {line}")]
    InvalidTimestamp {
        /// Line number.
        line: usize,
        /// The rejected value.
        raw: String,
    },

    /// The line is not valid UTF-8.
    #[error("Invalid UTF-8 at line {line}")]
    InvalidUtf8 {
        /// Line number.
        line: usize,
    },

    /// The record reuses an id already seen earlier in the corpus.
    #[error("Duplicate comment id '{id}' at line {line}")]
    DuplicateId {
        /// Line number.
        line: usize,
        /// The repeated id.
        id: String,
    },
}

impl ParseError {
    /// Line number of the offending record.
    pub fn line(&self) -> usize {
        match self {
            ParseError::InvalidJson { line, .. }
            | ParseError::InvalidField { line, .. }
            | ParseError::InvalidTimestamp { line, .. }
            | ParseError::InvalidUtf8 { line }
            | ParseError::DuplicateId { line, .. } => *line,
        }
    }
}
