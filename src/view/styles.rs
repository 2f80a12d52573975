//! Sentiment colouring for terminal output.
//!
//! Provides distinct colors per sentiment, with a lighter set for dark
//! backgrounds.

use crate::model::Sentiment;

const RESET: &str = "\x1b[0m";

// ===== ColorConfig =====

/// Whether ANSI colours are emitted.
///
/// Determined by:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from the CLI flag and an optional `NO_COLOR` value.
    ///
    /// Any `NO_COLOR` value, even empty, disables colors.
    pub fn new(no_color_flag: bool, no_color_env: Option<&str>) -> Self {
        Self {
            enabled: !no_color_flag && no_color_env.is_none(),
        }
    }

    /// Read `NO_COLOR` from the process environment.
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let env = std::env::var("NO_COLOR").ok();
        Self::new(no_color_flag, env.as_deref())
    }

    /// Whether ANSI colors may be emitted.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== Palette =====

/// Maps sentiments to ANSI foreground colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
    dark: bool,
}

impl Palette {
    /// Palette for the given color setting and effective background.
    pub fn new(colors: ColorConfig, dark: bool) -> Self {
        Self {
            enabled: colors.colors_enabled(),
            dark,
        }
    }

    /// No escape codes at all.
    pub fn plain() -> Self {
        Self {
            enabled: false,
            dark: false,
        }
    }

    fn code(self, sentiment: Sentiment) -> &'static str {
        match (sentiment, self.dark) {
            (Sentiment::Positive, true) => "\x1b[92m",
            (Sentiment::Negative, true) => "\x1b[91m",
            (Sentiment::Neutral, true) => "\x1b[37m",
            (Sentiment::Positive, false) => "\x1b[32m",
            (Sentiment::Negative, false) => "\x1b[31m",
            (Sentiment::Neutral, false) => "\x1b[90m",
        }
    }

    /// Wrap `text` in the sentiment's color, or return it unchanged.
    pub fn paint(self, sentiment: Sentiment, text: &str) -> String {
        if self.enabled {
            format!("{}{}{}", self.code(sentiment), text, RESET)
        } else {
            text.to_string()
        }
    }
}
