//! Search session facade.
//!
//! The single call surface the presentation layer uses. Commands mutate the
//! session state; every derived value is recomputed from that state on
//! demand, memoized against corpus identity, criteria and search state.

use crate::corpus::Corpus;
use crate::model::{aggregate, Comment, Criteria, CriteriaField, SentimentCounts};
use crate::state::cache::{CachedResult, ResultCache, ResultCacheKey};
use crate::state::filter::filter_indices;
use crate::state::search::{SearchSessionState, SearchState};
use crate::state::suggestions;
use tracing::debug;

/// Corpus, criteria and search state for one UI session.
#[derive(Debug)]
pub struct SearchSession {
    corpus: Corpus,
    search: SearchSessionState,
    cache: ResultCache,
}

impl SearchSession {
    /// Start an Idle session over a corpus.
    pub fn new(corpus: Corpus) -> Self {
        Self {
            corpus,
            search: SearchSessionState::new(),
            cache: ResultCache::new(),
        }
    }

    /// The corpus being searched.
    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// Current search state.
    pub fn state(&self) -> SearchState {
        self.search.state()
    }

    /// Whether a search has run in this session.
    pub fn has_searched(&self) -> bool {
        self.search.has_searched()
    }

    /// Current criteria.
    pub fn criteria(&self) -> &Criteria {
        self.search.criteria()
    }

    /// Sorted distinct team names for the team picker.
    pub fn teams(&self) -> Vec<String> {
        self.corpus.teams()
    }

    // ===== Commands =====

    /// Overwrite one criteria field. Does not change the search state.
    pub fn set_criteria_field(&mut self, field: CriteriaField, value: impl Into<String>) {
        self.search.set_criteria_field(field, value);
    }

    /// Set both date bounds. Does not change the search state.
    pub fn set_date_range(&mut self, start: impl Into<String>, end: impl Into<String>) {
        self.search.set_date_range(start, end);
    }

    /// Expose results from now on.
    pub fn execute_search(&mut self) {
        self.search.execute_search();
    }

    /// Use a suggestion as the query and search immediately.
    pub fn apply_suggestion(&mut self, text: impl Into<String>) {
        self.search.apply_suggestion(text);
    }

    // ===== Derived Views =====

    /// Matching comments in corpus order. Empty while Idle.
    pub fn filtered_comments(&mut self) -> Vec<&Comment> {
        let corpus = &self.corpus;
        let result = refresh(&mut self.cache, corpus, &self.search);
        result
            .indices
            .iter()
            .filter_map(|&index| corpus.get(index))
            .collect()
    }

    /// Sentiment counts over `filtered_comments`. All zero while Idle.
    pub fn sentiment_counts(&mut self) -> SentimentCounts {
        refresh(&mut self.cache, &self.corpus, &self.search).counts
    }

    /// Suggestions to offer. Empty once a search has run.
    pub fn suggestions(&self) -> &'static [&'static str] {
        if self.has_searched() {
            &[]
        } else {
            suggestions::suggestions()
        }
    }

    /// Cache lookups served without recomputing.
    pub fn cache_hits(&self) -> u64 {
        self.cache.hits()
    }

    /// Cache lookups that recomputed the result.
    pub fn cache_misses(&self) -> u64 {
        self.cache.misses()
    }
}

fn refresh<'c>(
    cache: &'c mut ResultCache,
    corpus: &Corpus,
    search: &SearchSessionState,
) -> &'c CachedResult {
    let key = ResultCacheKey {
        corpus: corpus.id(),
        criteria: search.criteria().clone(),
        has_searched: search.has_searched(),
    };

    cache.get_or_compute(key, || {
        if !search.has_searched() {
            return CachedResult::default();
        }
        let indices = filter_indices(corpus, search.criteria());
        let counts = aggregate(indices.iter().filter_map(|&index| corpus.get(index)));
        debug!(
            matches = indices.len(),
            active = ?search.criteria().active_fields(),
            "Recomputed search results"
        );
        CachedResult { indices, counts }
    })
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
