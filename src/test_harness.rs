//! Acceptance Test Harness for end-to-end search flows
//!
//! Wraps a `SearchSession` with the panel flags and render settings the
//! front end uses, and exposes the interactions a user performs: typing a
//! query, picking filters, pressing search, clicking a suggestion.

use crate::corpus::Corpus;
use crate::model::error::InputError;
use crate::model::{CriteriaField, SentimentCounts};
use crate::source::FileSource;
use crate::state::{suggestion, SearchSession, SearchState};
use crate::view::{render_screen, RenderOptions};
use crate::view_state::PanelVisibility;
use std::path::Path;

/// Test harness for acceptance testing
pub struct AcceptanceTestHarness {
    session: SearchSession,
    panels: PanelVisibility,
    options: RenderOptions,
}

impl AcceptanceTestHarness {
    /// Harness over the built-in twelve-comment corpus.
    pub fn seeded() -> Self {
        Self::from_corpus(Corpus::seed())
    }

    /// Harness over a JSONL fixture. Malformed lines are skipped.
    ///
    /// # Returns
    /// * `Ok(Self)` - Harness with the fixture loaded
    /// * `Err(InputError)` - If the fixture cannot be read
    pub fn from_fixture(path: impl AsRef<Path>) -> Result<Self, InputError> {
        let source = FileSource::new(path)?;
        let (comments, _errors) = source.read_comments()?;
        Ok(Self::from_corpus(Corpus::new(comments)))
    }

    fn from_corpus(corpus: Corpus) -> Self {
        Self {
            session: SearchSession::new(corpus),
            panels: PanelVisibility::new(),
            options: RenderOptions::default(),
        }
    }

    // ===== Interactions =====

    /// Replace the search box contents.
    pub fn type_query(&mut self, text: &str) {
        self.session.set_criteria_field(CriteriaField::Query, text);
    }

    /// Pick a value in one of the filter controls.
    pub fn select(&mut self, field: CriteriaField, value: &str) {
        self.session.set_criteria_field(field, value);
    }

    /// Fill both date pickers.
    pub fn pick_dates(&mut self, start: &str, end: &str) {
        self.session.set_date_range(start, end);
    }

    /// Press the search button.
    pub fn click_search(&mut self) {
        self.session.execute_search();
    }

    /// Click the N-th visible suggestion (1-based).
    ///
    /// # Returns
    /// * `true` - A suggestion was shown at that position and applied
    /// * `false` - No suggestion there; nothing happened
    pub fn click_suggestion(&mut self, position: usize) -> bool {
        if self.session.suggestions().is_empty() {
            return false;
        }
        match suggestion(position) {
            Some(text) => {
                self.session.apply_suggestion(text);
                true
            }
            None => false,
        }
    }

    pub fn toggle_stats(&mut self) {
        self.panels.toggle_stats();
    }

    pub fn toggle_advanced_filters(&mut self) {
        self.panels.toggle_advanced_filters();
    }

    // ===== Observations =====

    /// What the user currently sees.
    pub fn screen(&mut self) -> String {
        render_screen(&mut self.session, self.panels, &self.options)
    }

    /// Ids of the visible results, in display order.
    pub fn result_ids(&mut self) -> Vec<String> {
        self.session
            .filtered_comments()
            .iter()
            .map(|comment| comment.id().to_string())
            .collect()
    }

    pub fn counts(&mut self) -> SentimentCounts {
        self.session.sentiment_counts()
    }

    pub fn state(&self) -> SearchState {
        self.session.state()
    }

    pub fn panels(&self) -> PanelVisibility {
        self.panels
    }

    pub fn session(&self) -> &SearchSession {
        &self.session
    }
}
