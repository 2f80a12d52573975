//! Configuration file loading with precedence handling.

use crate::view_state::Theme;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "FSA_CONFIG";

/// Environment variable overriding the theme.
pub const THEME_ENV_VAR: &str = "FSA_THEME";

/// Default card width in columns.
pub const DEFAULT_CONTENT_WIDTH: usize = 80;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file path contains invalid UTF-8 or cannot be resolved.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional. Corresponds to `~/.config/fsa/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Color theme: "light", "dark" or "system".
    #[serde(default)]
    pub theme: Option<Theme>,

    /// Print sentiment statistics after results.
    #[serde(default)]
    pub show_stats: Option<bool>,

    /// JSONL corpus to search instead of the built-in one.
    #[serde(default)]
    pub corpus_path: Option<PathBuf>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Card width in columns.
    #[serde(default)]
    pub content_width: Option<usize>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Theme preference.
    pub theme: Theme,
    /// Show stats after results.
    pub show_stats: bool,
    /// Corpus file; `None` means the built-in corpus.
    pub corpus_path: Option<PathBuf>,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Card width in columns.
    pub content_width: usize,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            theme: Theme::System,
            show_stats: false,
            corpus_path: None,
            log_file_path: default_log_path(),
            content_width: DEFAULT_CONTENT_WIDTH,
        }
    }
}

/// CLI flags that take precedence over every other source.
///
/// `None` leaves the lower-precedence value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// From `--theme`.
    pub theme: Option<Theme>,
    /// From `--stats`.
    pub show_stats: Option<bool>,
    /// From `--corpus`.
    pub corpus_path: Option<PathBuf>,
    /// From `--width`.
    pub content_width: Option<usize>,
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/fsa/fsa.log` on Unix-like systems,
/// or the platform equivalent elsewhere. Falls back to the current
/// directory when no state directory exists.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("fsa").join("fsa.log")
    } else {
        PathBuf::from("fsa.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/fsa/config.toml` on Unix, the platform equivalent
/// elsewhere, or `None` if no config directory exists.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("fsa").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `FSA_CONFIG` environment variable
/// 3. Default path `~/.config/fsa/config.toml`
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    match std::env::var(CONFIG_ENV_VAR) {
        Ok(env_path) if !env_path.is_empty() => return load_config_file(PathBuf::from(env_path)),
        Ok(_) => {}
        Err(std::env::VarError::NotPresent) => {}
        Err(std::env::VarError::NotUnicode(raw)) => {
            return Err(ConfigError::InvalidPath(raw.to_string_lossy().into_owned()));
        }
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        theme: config.theme.unwrap_or(defaults.theme),
        show_stats: config.show_stats.unwrap_or(defaults.show_stats),
        corpus_path: config.corpus_path.or(defaults.corpus_path),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        content_width: config
            .content_width
            .filter(|width| *width > 0)
            .unwrap_or(defaults.content_width),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks `FSA_THEME`. An unrecognized value is logged and ignored.
pub fn apply_env_overrides(config: ResolvedConfig) -> ResolvedConfig {
    apply_theme_override(config, std::env::var(THEME_ENV_VAR).ok().as_deref())
}

fn apply_theme_override(mut config: ResolvedConfig, raw: Option<&str>) -> ResolvedConfig {
    if let Some(raw) = raw {
        match raw.parse::<Theme>() {
            Ok(theme) => config.theme = theme,
            Err(error) => warn!(%error, "Ignoring {}", THEME_ENV_VAR),
        }
    }
    config
}

/// Apply CLI argument overrides to resolved config.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(mut config: ResolvedConfig, cli: CliOverrides) -> ResolvedConfig {
    if let Some(theme) = cli.theme {
        config.theme = theme;
    }

    if let Some(stats) = cli.show_stats {
        config.show_stats = stats;
    }

    if let Some(path) = cli.corpus_path {
        config.corpus_path = Some(path);
    }

    if let Some(width) = cli.content_width.filter(|width| *width > 0) {
        config.content_width = width;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
