//! Configuration module.
//!
//! Resolves settings from defaults, a TOML file, environment variables and
//! CLI flags, in that order of increasing precedence.

pub mod loader;

pub use loader::{
    apply_cli_overrides, apply_env_overrides, default_config_path, default_log_path,
    load_config_file, load_config_with_precedence, merge_config, CliOverrides, ConfigError,
    ConfigFile, ResolvedConfig, CONFIG_ENV_VAR, DEFAULT_CONTENT_WIDTH, THEME_ENV_VAR,
};
