use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Environment variable that overrides `identity.api_key`.
pub const API_KEY_ENV: &str = "YAC_API_KEY";

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

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/yac/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("yac").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    /// - Applies environment overrides last.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
                path: path.to_path_buf(),
                source: e,
            })?;

            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.to_path_buf(),
                source: e,
            })?
        } else {
            Config::default()
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.is_empty() {
                self.identity.api_key = Some(key);
            }
        }
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - Base URLs use http or https
    /// - Endpoint paths are absolute
    /// - Timeouts are non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, url) in [
            ("api.base_url", &self.api.base_url),
            ("identity.base_url", &self.identity.base_url),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::ValidationError {
                    message: format!("{} must start with http:// or https://, got '{}'", name, url),
                });
            }
        }

        for (name, path) in [
            ("api.user_path", &self.api.user_path),
            ("api.message_path", &self.api.message_path),
        ] {
            if !path.starts_with('/') {
                return Err(ConfigError::ValidationError {
                    message: format!("{} must start with '/', got '{}'", name, path),
                });
            }
        }

        if self.api.timeout_seconds == 0
            || self.api.connect_timeout_seconds == 0
            || self.identity.timeout_seconds == 0
        {
            return Err(ConfigError::ValidationError {
                message: "Timeouts must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}
