//! Sentiment statistics over a comment sequence.
//!
//! Counts are the only aggregate the statistics view needs. They are computed
//! in a single pass and depend on the multiset of sentiments only, never on
//! order.

use crate::model::{Comment, Sentiment};

// ===== SentimentCounts =====

/// Per-sentiment comment counts for display in the statistics panel.
///
/// # Invariants
///
/// - `positive + negative + neutral` equals the number of comments aggregated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SentimentCounts {
    /// Comments labelled positive.
    pub positive: usize,
    /// Comments labelled negative.
    pub negative: usize,
    /// Comments labelled neutral.
    pub neutral: usize,
}

impl SentimentCounts {
    /// Increment the bucket for one sentiment.
    pub fn record(&mut self, sentiment: Sentiment) {
        match sentiment {
            Sentiment::Positive => self.positive += 1,
            Sentiment::Negative => self.negative += 1,
            Sentiment::Neutral => self.neutral += 1,
        }
    }

    /// Count for one sentiment.
    pub fn get(&self, sentiment: Sentiment) -> usize {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Negative => self.negative,
            Sentiment::Neutral => self.neutral,
        }
    }

    /// Sum across all buckets.
    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }

    /// Share of one sentiment in percent. Zero when there are no comments.
    pub fn percentage(&self, sentiment: Sentiment) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.get(sentiment) as f64 * 100.0 / total as f64
    }
}

/// Reduce comments to sentiment counts.
pub fn aggregate<'a, I>(comments: I) -> SentimentCounts
where
    I: IntoIterator<Item = &'a Comment>,
{
    comments
        .into_iter()
        .fold(SentimentCounts::default(), |mut counts, comment| {
            counts.record(comment.sentiment());
            counts
        })
}
