//! Panel visibility flags.

/// Which optional panels are open.
///
/// Independent booleans; opening one never closes another.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PanelVisibility {
    /// Advanced filter form.
    pub advanced_filters: bool,
    /// Sentiment statistics.
    pub stats: bool,
    /// Preferences menu.
    pub preferences: bool,
}

impl PanelVisibility {
    /// All panels closed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Show or hide the advanced filter panel.
    pub fn toggle_advanced_filters(&mut self) {
        self.advanced_filters = !self.advanced_filters;
    }

    /// Show or hide the statistics panel.
    pub fn toggle_stats(&mut self) {
        self.stats = !self.stats;
    }

    /// Show or hide the preferences menu.
    pub fn toggle_preferences(&mut self) {
        self.preferences = !self.preferences;
    }

    /// Close the statistics panel (modal close button).
    pub fn close_stats(&mut self) {
        self.stats = false;
    }

    /// Close the preferences menu (backdrop click or close button).
    pub fn close_preferences(&mut self) {
        self.preferences = false;
    }
}
