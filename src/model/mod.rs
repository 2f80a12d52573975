//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod comment;
pub mod criteria;
pub mod error;
pub mod identifiers;
pub mod stats;

// Re-export for convenience
pub use comment::{
    Comment, Confidence, EmptyContent, InvalidConfidence, InvalidSentiment, InvalidTimestamp,
    Sentiment, Timestamp, TIMESTAMP_FORMAT,
};
pub use criteria::{Criteria, CriteriaField};
pub use error::{AppError, InputError, ParseError};
pub use identifiers::{CommentId, InvalidCommentId};
pub use stats::{aggregate, SentimentCounts};
