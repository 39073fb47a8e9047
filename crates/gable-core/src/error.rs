//! Error types for gable-core

use thiserror::Error;

/// Result type alias using gable-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for Gable
#[derive(Error, Debug)]
pub enum Error {
    /// Required configuration value absent
    #[error("Missing required configuration value: {key}")]
    MissingConfiguration { key: String },

    /// Configuration value present but rejected
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: String },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a missing configuration error
    pub fn missing_configuration(key: impl Into<String>) -> Self {
        Self::MissingConfiguration { key: key.into() }
    }

    /// Create an invalid configuration error
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            message: message.into(),
        }
    }

    /// Create a config not found error
    pub fn config_not_found(path: impl Into<String>) -> Self {
        Self::ConfigNotFound { path: path.into() }
    }
}
