//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `TAMARIND_DATA_DIR` - Directory for persisted records (default: `.tamarind`)

use std::env;
use std::path::PathBuf;

use thiserror::Error;

/// Environment variable naming the record-store directory.
pub const DATA_DIR_ENV: &str = "TAMARIND_DATA_DIR";

const DEFAULT_DATA_DIR: &str = ".tamarind";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Client application configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Directory the record store persists into.
    pub data_dir: PathBuf,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if `TAMARIND_DATA_DIR` is set
    /// but empty or not valid unicode.
    pub fn load() -> Result<Self, ConfigError> {
        let data_dir = match env::var(DATA_DIR_ENV) {
            Ok(value) if value.trim().is_empty() => {
                return Err(ConfigError::InvalidEnvVar(
                    DATA_DIR_ENV.to_owned(),
                    "must not be empty".to_owned(),
                ));
            }
            Ok(value) => PathBuf::from(value),
            Err(env::VarError::NotPresent) => PathBuf::from(DEFAULT_DATA_DIR),
            Err(env::VarError::NotUnicode(_)) => {
                return Err(ConfigError::InvalidEnvVar(
                    DATA_DIR_ENV.to_owned(),
                    "not valid unicode".to_owned(),
                ));
            }
        };

        Ok(Self { data_dir })
    }

    /// Build a configuration pointing at an explicit directory.
    ///
    /// Tests use this to keep each instance isolated.
    #[must_use]
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }
}
