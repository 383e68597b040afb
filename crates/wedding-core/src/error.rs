//! Error types for the wedding core library.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using `WeddingError`.
pub type Result<T> = std::result::Result<T, WeddingError>;

/// Core error types for the invitation.
#[derive(Error, Debug)]
pub enum WeddingError {
    /// Configuration loading or validation error.
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration file missing on disk.
    #[error("Configuration file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// Clipboard write rejected or unavailable.
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// File system I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Layered configuration error.
    #[error("Config crate error: {0}")]
    ConfigCrate(#[from] config::ConfigError),
}

impl WeddingError {
    /// Create a new configuration error with a message.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source.
    pub fn config_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new clipboard error.
    pub fn clipboard(message: impl Into<String>) -> Self {
        Self::Clipboard(message.into())
    }
}
