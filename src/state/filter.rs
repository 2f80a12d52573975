//! Criteria evaluation against the corpus.
//!
//! Every active constraint must hold for a comment to match; there is no OR
//! composition and no weighting. Results keep corpus order.

use crate::corpus::Corpus;
use crate::model::{Comment, Criteria, CriteriaField};

// ===== Constraints =====

/// Criteria prepared for repeated evaluation.
///
/// Lowercases the query and source once instead of per comment. Empty fields
/// become `None` and are skipped.
#[derive(Debug)]
pub struct Constraints<'c> {
    sentiment: Option<&'c str>,
    source_lower: Option<String>,
    team: Option<&'c str>,
    query_lower: Option<String>,
    start_date: Option<&'c str>,
    end_date: Option<&'c str>,
}

impl<'c> Constraints<'c> {
    /// Prepare criteria for evaluation.
    pub fn new(criteria: &'c Criteria) -> Self {
        let active = |value: &'c str| (!value.is_empty()).then_some(value);
        Self {
            sentiment: active(criteria.sentiment.as_str()),
            source_lower: active(criteria.source.as_str()).map(str::to_lowercase),
            team: active(criteria.team.as_str()),
            query_lower: active(criteria.query.as_str()).map(str::to_lowercase),
            start_date: active(criteria.start_date.as_str()),
            end_date: active(criteria.end_date.as_str()),
        }
    }

    /// First active constraint the comment fails, or `None` if it matches.
    pub fn first_failure(&self, comment: &Comment) -> Option<CriteriaField> {
        if let Some(sentiment) = self.sentiment {
            if comment.sentiment().as_str() != sentiment {
                return Some(CriteriaField::Sentiment);
            }
        }

        if let Some(source) = &self.source_lower {
            let matches = comment
                .source()
                .is_some_and(|s| s.to_lowercase() == *source);
            if !matches {
                return Some(CriteriaField::Source);
            }
        }

        if let Some(team) = self.team {
            if comment.team() != Some(team) {
                return Some(CriteriaField::Team);
            }
        }

        if let Some(query) = &self.query_lower {
            if !matches_query(comment, query) {
                return Some(CriteriaField::Query);
            }
        }

        let timestamp = comment.timestamp().as_str();

        if let Some(start) = self.start_date {
            if timestamp < start {
                return Some(CriteriaField::StartDate);
            }
        }

        if let Some(end) = self.end_date {
            if truncate_to(timestamp, end.len()) > end {
                return Some(CriteriaField::EndDate);
            }
        }

        None
    }

    /// True when the comment satisfies every active constraint.
    pub fn matches(&self, comment: &Comment) -> bool {
        self.first_failure(comment).is_none()
    }
}

/// Case-insensitive containment in content, author or any keyword.
fn matches_query(comment: &Comment, query_lower: &str) -> bool {
    comment.content().to_lowercase().contains(query_lower)
        || comment.author().to_lowercase().contains(query_lower)
        || comment
            .keywords()
            .iter()
            .any(|k| k.to_lowercase().contains(query_lower))
}

/// Prefix of `timestamp` no longer than `len` bytes.
///
/// Comparing the prefix makes a date-only upper bound cover its whole day.
fn truncate_to(timestamp: &str, len: usize) -> &str {
    timestamp.get(..len).unwrap_or(timestamp)
}

// ===== Filtering =====

/// Positions of matching comments, ascending.
pub fn filter_indices(corpus: &Corpus, criteria: &Criteria) -> Vec<usize> {
    if criteria.is_unconstrained() {
        return (0..corpus.len()).collect();
    }
    let constraints = Constraints::new(criteria);
    corpus
        .comments()
        .iter()
        .enumerate()
        .filter(|(_, comment)| constraints.matches(comment))
        .map(|(index, _)| index)
        .collect()
}

/// Matching comments in corpus order.
///
/// Ungated: callers decide whether a search has run. See
/// [`SearchSession`](crate::state::SearchSession) for the gated view.
pub fn filter_comments<'a>(corpus: &'a Corpus, criteria: &Criteria) -> Vec<&'a Comment> {
    if criteria.is_unconstrained() {
        return corpus.comments().iter().collect();
    }
    let constraints = Constraints::new(criteria);
    corpus
        .comments()
        .iter()
        .filter(|comment| constraints.matches(comment))
        .collect()
}

// ===== Tests =====

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
