//! Core identifier newtypes with smart constructors.
//!
//! Identifiers validate non-empty strings at construction time.

use std::fmt;

/// Unique identifier for a comment within a corpus.
///
/// Stable for the lifetime of the corpus that holds it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommentId(String);

impl CommentId {
    /// Smart constructor: rejects empty and whitespace-only ids.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidCommentId> {
        let s = raw.into();
        if s.trim().is_empty() {
            Err(InvalidCommentId::Empty)
        } else {
            Ok(Self(s))
        }
    }

    /// Borrow the raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ===== Error Types =====

/// Rejected comment identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidCommentId {
    /// Identifier was empty or whitespace only.
    #[error("Comment ID cannot be empty")]
    Empty,
}

// ===== Tests =====
