//! Application configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Settings read from `hotseat.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct HotseatConfig {
    /// Where the board and turn are persisted.
    #[serde(default = "default_state_file")]
    state_file: PathBuf,

    /// Where the interactive UI writes its logs.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

#[instrument]
fn default_state_file() -> PathBuf {
    PathBuf::from("hotseat_state.json")
}

#[instrument]
fn default_log_file() -> PathBuf {
    PathBuf::from("hotseat.log")
}

impl Default for HotseatConfig {
    fn default() -> Self {
        Self {
            state_file: default_state_file(),
            log_file: default_log_file(),
        }
    }
}

impl HotseatConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(state_file = %config.state_file.display(), "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides; `None` keeps the file's value.
    pub fn with_overrides(
        mut self,
        state_file: Option<PathBuf>,
        log_file: Option<PathBuf>,
    ) -> Self {
        if let Some(state_file) = state_file {
            self.state_file = state_file;
        }
        if let Some(log_file) = log_file {
            self.log_file = log_file;
        }
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
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
