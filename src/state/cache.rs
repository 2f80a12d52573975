//! Memoized search results.
//!
//! Holds the result of the most recent computation together with the key it
//! was computed for. A lookup only hits when corpus identity, criteria and
//! search state all equal the stored key.

use crate::corpus::CorpusId;
use crate::model::{Criteria, SentimentCounts};

/// Everything a search result depends on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResultCacheKey {
    /// Corpus the result was computed from.
    pub corpus: CorpusId,
    /// Criteria at computation time.
    pub criteria: Criteria,
    /// Whether a search had run.
    pub has_searched: bool,
}

/// Cached filtered positions and their counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CachedResult {
    /// Positions into the corpus, ascending.
    pub indices: Vec<usize>,
    /// Sentiment counts over `indices`.
    pub counts: SentimentCounts,
}

/// Single-slot result cache.
#[derive(Debug, Default)]
pub struct ResultCache {
    slot: Option<(ResultCacheKey, CachedResult)>,
    hits: u64,
    misses: u64,
}

impl ResultCache {
    /// Empty cache with zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached result for `key`, computing and storing it on a miss.
    pub fn get_or_compute<F>(&mut self, key: ResultCacheKey, compute: F) -> &CachedResult
    where
        F: FnOnce() -> CachedResult,
    {
        if matches!(&self.slot, Some((stored, _)) if *stored == key) {
            self.hits += 1;
        } else {
            self.misses += 1;
            self.slot = None;
        }

        let (_, result) = self.slot.get_or_insert_with(|| (key, compute()));
        result
    }

    /// Number of lookups served from the cache.
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Number of lookups that recomputed.
    pub fn misses(&self) -> u64 {
        self.misses
    }
}
