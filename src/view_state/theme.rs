//! Theme preference.
//!
//! Pure UI chrome. Nothing in the query engine reads it.

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// User theme preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Always light.
    Light,
    /// Always dark.
    Dark,
    /// Follow the host preference.
    #[default]
    System,
}

impl Theme {
    /// Names accepted on the command line and in config files.
    pub const NAMES: [&'static str; 3] = ["light", "dark", "system"];

    /// Lowercase theme name.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }

    /// Whether the effective appearance is dark.
    ///
    /// `System` defers to `system_prefers_dark`.
    pub fn resolve(self, system_prefers_dark: bool) -> bool {
        match self {
            Theme::Light => false,
            Theme::Dark => true,
            Theme::System => system_prefers_dark,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = InvalidTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "system" => Ok(Theme::System),
            _ => Err(InvalidTheme(s.to_string())),
        }
    }
}

/// Unknown theme name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown theme '{0}' (expected light, dark or system)")]
pub struct InvalidTheme(pub String);

/// Guess the terminal background from `COLORFGBG` (`"fg;bg"`).
///
/// Background colors 0-6 and 8 are dark in the 16-color palette. Unknown or
/// missing values count as dark.
pub fn terminal_prefers_dark(colorfgbg: Option<&str>) -> bool {
    let Some(background) = colorfgbg.and_then(|v| v.rsplit(';').next()) else {
        return true;
    };
    match background.trim().parse::<u8>() {
        Ok(code) => code <= 6 || code == 8,
        Err(_) => true,
    }
}
