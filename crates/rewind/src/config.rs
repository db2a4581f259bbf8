//! Host configuration loaded from `rewind.toml`.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// File looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "rewind.toml";

/// How the view is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Board, status and move list as plain text.
    #[default]
    Text,
    /// The view record as JSON.
    Json,
}

/// Configuration for the terminal host.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct RewindConfig {
    /// Whether the move list starts ascending.
    #[serde(default = "default_sort_ascending")]
    sort_ascending: bool,

    /// Output format for views.
    #[serde(default)]
    output: OutputFormat,

    /// Log filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    log_level: String,
}

#[instrument]
fn default_sort_ascending() -> bool {
    true
}

#[instrument]
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for RewindConfig {
    fn default() -> Self {
        Self {
            sort_ascending: default_sort_ascending(),
            output: OutputFormat::default(),
            log_level: default_log_level(),
        }
    }
}

impl RewindConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(output = ?config.output, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if given, else [`DEFAULT_CONFIG_FILE`] if present, else
    /// defaults.
    ///
    /// An explicitly named file must exist.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::from_file(DEFAULT_CONFIG_FILE)
            }
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Overrides the output format.
    pub fn with_output(mut self, output: OutputFormat) -> Self {
        self.output = output;
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
