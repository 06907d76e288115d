//! Configuration file loading with precedence handling.

use crate::model::SortMode;
use crate::state::{DEFAULT_DEBOUNCE, DEFAULT_SUGGESTIONS};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file).
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

    /// A field parsed but holds a value outside its domain.
    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue {
        /// Config key or environment variable.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/searchview/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Quiet interval before results are recomputed, in milliseconds.
    #[serde(default)]
    pub debounce_ms: Option<u64>,

    /// Path to a JSON dataset. The built-in sample is used when unset.
    #[serde(default)]
    pub dataset: Option<PathBuf>,

    /// Initial sort mode (`relevance` or `rating`).
    #[serde(default)]
    pub default_sort: Option<String>,

    /// Preset queries listed in the suggestions panel.
    #[serde(default)]
    pub suggestions: Option<Vec<String>>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Debounce interval.
    pub debounce: Duration,
    /// Dataset file; `None` means the built-in sample.
    pub dataset: Option<PathBuf>,
    /// Initial sort mode.
    pub default_sort: SortMode,
    /// Suggestion presets.
    pub suggestions: Vec<String>,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
            dataset: None,
            default_sort: SortMode::Relevance,
            suggestions: DEFAULT_SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/searchview/searchview.log` on Linux, or the
/// platform state directory elsewhere. Falls back to the current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("searchview").join("searchview.log")
    } else {
        PathBuf::from("searchview.log")
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

/// Resolve default config file path (`~/.config/searchview/config.toml`).
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("searchview").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `SEARCHVIEW_CONFIG` environment variable
/// 3. Default path `~/.config/searchview/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var("SEARCHVIEW_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// # Errors
///
/// Returns `InvalidValue` when `default_sort` names an unknown mode.
pub fn merge_config(config_file: Option<ConfigFile>) -> Result<ResolvedConfig, ConfigError> {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return Ok(defaults);
    };

    let default_sort = match config.default_sort {
        Some(name) => name.parse().map_err(|e: crate::model::SearchError| {
            ConfigError::InvalidValue {
                field: "default_sort",
                reason: e.to_string(),
            }
        })?,
        None => defaults.default_sort,
    };

    Ok(ResolvedConfig {
        debounce: config
            .debounce_ms
            .map(Duration::from_millis)
            .unwrap_or(defaults.debounce),
        dataset: config.dataset.or(defaults.dataset),
        default_sort,
        suggestions: config.suggestions.unwrap_or(defaults.suggestions),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    })
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `SEARCHVIEW_DEBOUNCE_MS`: debounce interval in milliseconds
/// - `SEARCHVIEW_DATASET`: dataset path
///
/// # Errors
///
/// Returns `InvalidValue` when `SEARCHVIEW_DEBOUNCE_MS` is not an integer.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> Result<ResolvedConfig, ConfigError> {
    if let Ok(raw) = std::env::var("SEARCHVIEW_DEBOUNCE_MS") {
        let ms: u64 = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
            field: "SEARCHVIEW_DEBOUNCE_MS",
            reason: format!("'{raw}' is not a whole number of milliseconds"),
        })?;
        config.debounce = Duration::from_millis(ms);
    }

    if let Ok(path) = std::env::var("SEARCHVIEW_DATASET") {
        config.dataset = Some(PathBuf::from(path));
    }

    Ok(config)
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence. Only flags the user actually passed
/// are applied.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    debounce_ms: Option<u64>,
    dataset: Option<PathBuf>,
    sort: Option<SortMode>,
) -> ResolvedConfig {
    if let Some(ms) = debounce_ms {
        config.debounce = Duration::from_millis(ms);
    }

    if let Some(path) = dataset {
        config.dataset = Some(path);
    }

    if let Some(mode) = sort {
        config.default_sort = mode;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
