//! Search state machine.
//!
//! SearchState is a sum type with two states:
//! - Idle: No search has run yet; results are hidden whatever the criteria
//! - Searched: A search has run; results track the current criteria
//!
//! The only transition is Idle -> Searched. There is no reset.

use crate::model::{Criteria, CriteriaField};
use tracing::debug;

// ===== SearchState =====

/// Whether results are exposed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SearchState {
    /// No search executed yet.
    #[default]
    Idle,
    /// At least one search executed. Terminal for the session.
    Searched,
}

// ===== SearchSessionState =====

/// Criteria plus the search state for one UI session.
///
/// Setters never change the state. Only `execute_search` and
/// `apply_suggestion` move it to `Searched`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchSessionState {
    state: SearchState,
    criteria: Criteria,
}

impl SearchSessionState {
    /// Fresh session: Idle, all criteria empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> SearchState {
        self.state
    }

    /// True once any search has been executed.
    pub fn has_searched(&self) -> bool {
        self.state == SearchState::Searched
    }

    /// Current criteria.
    pub fn criteria(&self) -> &Criteria {
        &self.criteria
    }

    /// Mark the session searched. Criteria are left as they are.
    pub fn execute_search(&mut self) {
        if self.state == SearchState::Idle {
            debug!(criteria = ?self.criteria, "Search state Idle -> Searched");
        }
        self.state = SearchState::Searched;
    }

    /// Use a suggestion as the query and search immediately.
    pub fn apply_suggestion(&mut self, text: impl Into<String>) {
        self.set_query(text);
        self.execute_search();
    }

    /// Overwrite one criteria field.
    pub fn set_criteria_field(&mut self, field: CriteriaField, value: impl Into<String>) {
        self.criteria.set(field, value);
    }

    /// Set the free-text query.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.set_criteria_field(CriteriaField::Query, query);
    }

    /// Set the sentiment label.
    pub fn set_sentiment(&mut self, sentiment: impl Into<String>) {
        self.set_criteria_field(CriteriaField::Sentiment, sentiment);
    }

    /// Set the source platform.
    pub fn set_source(&mut self, source: impl Into<String>) {
        self.set_criteria_field(CriteriaField::Source, source);
    }

    /// Set the team name.
    pub fn set_team(&mut self, team: impl Into<String>) {
        self.set_criteria_field(CriteriaField::Team, team);
    }

    /// Set the comment type.
    pub fn set_comment_type(&mut self, comment_type: impl Into<String>) {
        self.set_criteria_field(CriteriaField::CommentType, comment_type);
    }

    /// Set both date bounds. Empty strings clear a bound.
    pub fn set_date_range(&mut self, start: impl Into<String>, end: impl Into<String>) {
        self.set_criteria_field(CriteriaField::StartDate, start);
        self.set_criteria_field(CriteriaField::EndDate, end);
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
