use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("config validation failed: {message}")]
    Validation { message: String },
}

impl Config {
    /// Path to the configuration file.
    ///
    /// `~/.config/chirp/config.toml` on Unix, the platform equivalent
    /// elsewhere via `dirs::config_dir()`. Falls back to the current
    /// directory when no config dir is available.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("chirp").join("config.toml")
    }

    /// Load from the default location. A missing file is not an error;
    /// defaults apply.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Config::default());
        }
        Self::load_from(&path)
    }

    /// Load and validate a specific file. Unlike [`load`], a missing file
    /// is an error here: an explicitly-named path is expected to exist.
    ///
    /// [`load`]: Config::load
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Checks the pieces the UI depends on at startup.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.user.username.trim().is_empty() {
            return Err(ConfigError::Validation {
                message: "user.username must not be empty".to_string(),
            });
        }
        if self.ui.char_budget == 0 {
            return Err(ConfigError::Validation {
                message: "ui.char_budget must be greater than zero".to_string(),
            });
        }
        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::Validation {
                message: "ui.tick_rate_ms must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}
