//! File-based corpus source.
//!
//! Reads a JSONL file once, line by line, and hands the lines to the
//! parsing pipeline.

use crate::integration;
use crate::model::error::InputError;
use crate::model::{Comment, ParseError};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// A JSONL corpus file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Point at an existing file.
    ///
    /// # Errors
    ///
    /// Returns `InputError::FileNotFound` if the file does not exist.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, InputError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(InputError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    /// Path of the corpus file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse every line.
    ///
    /// Malformed lines, including lines that are not valid UTF-8, are logged
    /// and returned alongside the good records. Only I/O failures abort.
    ///
    /// # Errors
    ///
    /// Returns `InputError::Io` if the file cannot be opened or read.
    pub fn read_comments(&self) -> Result<(Vec<Comment>, Vec<ParseError>), InputError> {
        let file = File::open(&self.path).map_err(|source| self.io_error(source))?;
        let lines = BufReader::new(file)
            .split(b'\n')
            .collect::<Result<Vec<Vec<u8>>, _>>()
            .map_err(|source| self.io_error(source))?;

        let (comments, errors) = integration::process_byte_lines(lines, 1);
        for error in &errors {
            warn!(path = %self.path.display(), %error, "Skipping corpus record");
        }
        debug!(
            path = %self.path.display(),
            loaded = comments.len(),
            skipped = errors.len(),
            "Read corpus file"
        );

        Ok((comments, errors))
    }

    fn io_error(&self, source: std::io::Error) -> InputError {
        InputError::Io {
            path: self.path.clone(),
            source,
        }
    }
}
