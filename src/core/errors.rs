//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for circmap operations
#[derive(Debug, Error)]
pub enum Error {
    /// An input failed a precondition of the assessment pipeline
    #[error("Validation error: {0}")]
    Validation(String),

    /// Bill-of-materials loading errors
    #[error("BoM error: {message}")]
    Bom {
        message: String,
        path: Option<PathBuf>,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Wrapped external errors
    #[error(transparent)]
    External(#[from] anyhow::Error),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// CSV errors
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// TOML errors
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a validation error naming the offending component
    pub fn component(id: &str, message: impl Into<String>) -> Self {
        Self::Validation(format!("component '{}': {}", id, message.into()))
    }

    /// Create a BoM error with path context
    pub fn bom(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::Bom {
            message: message.into(),
            path: Some(path.into()),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
