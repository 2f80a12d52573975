//! Comment records and their validated attributes.

use crate::model::CommentId;
use chrono::NaiveDateTime;
use std::fmt;
use std::str::FromStr;

/// Layout every corpus timestamp follows. Lexical order equals time order.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

// ===== Sentiment =====

/// Precomputed sentiment label of a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Sentiment {
    /// Favourable opinion.
    Positive,
    /// Unfavourable opinion.
    Negative,
    /// Neither.
    Neutral,
}

impl Sentiment {
    /// All variants in display order.
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral];

    /// Lowercase wire name, as stored in corpus files and criteria.
    pub fn as_str(self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }

    /// Capitalized label for display.
    pub fn label(self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sentiment {
    type Err = InvalidSentiment;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "positive" => Ok(Sentiment::Positive),
            "negative" => Ok(Sentiment::Negative),
            "neutral" => Ok(Sentiment::Neutral),
            other => Err(InvalidSentiment(other.to_string())),
        }
    }
}

/// Unknown sentiment label.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown sentiment '{0}' (expected positive, negative or neutral)")]
pub struct InvalidSentiment(pub String);

// ===== Confidence =====

/// Classifier confidence in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Confidence(f64);

impl Confidence {
    /// Smart constructor: rejects NaN and values outside `[0, 1]`.
    pub fn new(value: f64) -> Result<Self, InvalidConfidence> {
        if (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(InvalidConfidence(value))
        }
    }

    /// Raw value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Value as a whole percentage, rounded.
    pub fn percent(self) -> u8 {
        (self.0 * 100.0).round() as u8
    }
}

/// Confidence outside the unit interval.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("Confidence {0} is outside [0, 1]")]
pub struct InvalidConfidence(pub f64);

// ===== Timestamp =====

/// Comment timestamp in `YYYY-MM-DD HH:MM` form.
///
/// Kept as the original string so range checks are plain lexical comparisons.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Timestamp(String);

impl Timestamp {
    /// Parse and validate a timestamp string.
    pub fn parse(raw: impl Into<String>) -> Result<Self, InvalidTimestamp> {
        let s = raw.into();
        match NaiveDateTime::parse_from_str(&s, TIMESTAMP_FORMAT) {
            Ok(_) => Ok(Self(s)),
            Err(_) => Err(InvalidTimestamp(s)),
        }
    }

    /// Borrow the timestamp string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Timestamp not in `YYYY-MM-DD HH:MM` form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid timestamp '{0}' (expected YYYY-MM-DD HH:MM)")]
pub struct InvalidTimestamp(pub String);

// ===== Comment =====

/// A single social-media comment about a match.
///
/// Immutable once built; the corpus hands out shared references only.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    id: CommentId,
    author: String,
    content: String,
    sentiment: Sentiment,
    confidence: Confidence,
    timestamp: Timestamp,
    team: Option<String>,
    keywords: Vec<String>,
    source: Option<String>,
}

impl Comment {
    /// Build a comment with no team, source or keywords and zero confidence.
    ///
    /// Returns `EmptyContent` when `content` is blank.
    pub fn new(
        id: CommentId,
        author: impl Into<String>,
        content: impl Into<String>,
        sentiment: Sentiment,
        timestamp: Timestamp,
    ) -> Result<Self, EmptyContent> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(EmptyContent);
        }
        Ok(Self {
            id,
            author: author.into(),
            content,
            sentiment,
            confidence: Confidence(0.0),
            timestamp,
            team: None,
            keywords: Vec::new(),
            source: None,
        })
    }

    /// Set classifier confidence.
    pub fn with_confidence(mut self, confidence: Confidence) -> Self {
        self.confidence = confidence;
        self
    }

    /// Set the team. Empty names are treated as absent.
    pub fn with_team(mut self, team: Option<String>) -> Self {
        self.team = team.filter(|t| !t.is_empty());
        self
    }

    /// Set the source platform. Empty names are treated as absent.
    pub fn with_source(mut self, source: Option<String>) -> Self {
        self.source = source.filter(|s| !s.is_empty());
        self
    }

    /// Set keywords, preserving order.
    pub fn with_keywords(mut self, keywords: Vec<String>) -> Self {
        self.keywords = keywords;
        self
    }

    /// Unique comment id.
    pub fn id(&self) -> &CommentId {
        &self.id
    }

    /// Display name of the author.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Comment text.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Classified sentiment.
    pub fn sentiment(&self) -> Sentiment {
        self.sentiment
    }

    /// Classifier confidence.
    pub fn confidence(&self) -> Confidence {
        self.confidence
    }

    /// When the comment was posted.
    pub fn timestamp(&self) -> &Timestamp {
        &self.timestamp
    }

    /// Team the comment is about, if tagged.
    pub fn team(&self) -> Option<&str> {
        self.team.as_deref()
    }

    /// Extracted keywords in record order.
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Platform the comment came from, if known.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }
}

/// Comment content was empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Comment content cannot be empty")]
pub struct EmptyContent;
