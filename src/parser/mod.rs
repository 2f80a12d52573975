//! JSONL parser for corpus comment records.
//!
//! This module provides pure parsing functions for converting JSON Lines
//! records into validated `Comment` structs.

use crate::model::{Comment, CommentId, Confidence, ParseError, Sentiment, Timestamp};
use serde::Deserialize;

/// Raw JSON structure for deserializing comment records.
#[derive(Debug, Deserialize)]
struct RawComment {
    id: String,
    author: String,
    content: String,
    sentiment: String,
    confidence: f64,
    timestamp: String,
    #[serde(default)]
    team: Option<String>,
    #[serde(default)]
    keywords: Vec<String>,
    #[serde(default)]
    source: Option<String>,
}

/// Parse a single JSONL line into a `Comment`.
///
/// # Arguments
///
/// * `line` - One JSON object
/// * `line_number` - 1-based line number, for error reporting
///
/// # Errors
///
/// Returns `ParseError` when the JSON is malformed or a field fails validation.
pub fn parse_comment(line: &str, line_number: usize) -> Result<Comment, ParseError> {
    let raw: RawComment = serde_json::from_str(line).map_err(|e| ParseError::InvalidJson {
        line: line_number,
        message: e.to_string(),
    })?;

    let id = CommentId::new(raw.id).map_err(|e| invalid_field(line_number, "id", e))?;
    let sentiment: Sentiment = raw
        .sentiment
        .parse()
        .map_err(|e| invalid_field(line_number, "sentiment", e))?;
    let confidence =
        Confidence::new(raw.confidence).map_err(|e| invalid_field(line_number, "confidence", e))?;
    let timestamp = Timestamp::parse(raw.timestamp).map_err(|e| ParseError::InvalidTimestamp {
        line: line_number,
        raw: e.0,
    })?;

    let comment = Comment::new(id, raw.author, raw.content, sentiment, timestamp)
        .map_err(|e| invalid_field(line_number, "content", e))?
        .with_confidence(confidence)
        .with_team(raw.team)
        .with_source(raw.source)
        .with_keywords(raw.keywords);

    Ok(comment)
}

fn invalid_field(line: usize, field: &'static str, reason: impl std::fmt::Display) -> ParseError {
    ParseError::InvalidField {
        line,
        field,
        reason: reason.to_string(),
    }
}
