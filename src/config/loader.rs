use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::{ExpansionMode, RouterConfig};

/// Environment variable that overrides the configured expansion mode.
pub const EXPAND_ENV_VAR: &str = "ARGROUTER_EXPAND";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl RouterConfig {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/argrouter/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("argrouter").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// - If the file doesn't exist, returns `RouterConfig::default()`.
    /// - `ARGROUTER_EXPAND` overrides the expansion mode either way.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();

        let config = if path.exists() {
            Self::load_from(&path)?
        } else {
            Self::default()
        };

        Ok(config.with_env_overrides())
    }

    /// Loads configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Apply `ARGROUTER_EXPAND` when it names a valid mode.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(value) = std::env::var(EXPAND_ENV_VAR) {
            match ExpansionMode::parse(&value) {
                Some(mode) => self.expansion.mode = mode,
                None => tracing::warn!(
                    value = %value,
                    "Ignoring unknown {} value",
                    EXPAND_ENV_VAR
                ),
            }
        }
        self
    }
}
