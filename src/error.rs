//! Error types for PrismLog
//!
//! This module defines all error types used throughout the PrismLog crate.
//! Every error surfaces synchronously from the logging call that caused it;
//! there is no deferred delivery and nothing is retried.

use thiserror::Error;

/// Main error type for PrismLog operations
#[derive(Error, Debug)]
pub enum PrismLogError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    ConfigFileMissing(String),

    /// Invalid log level
    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// I/O errors (terminal writes, log file open/append)
    #[error("I/O error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    /// TOML parsing errors
    #[error("TOML parsing error: {source}")]
    TomlError {
        #[from]
        source: toml::de::Error,
    },
}

/// Result type alias for PrismLog operations
pub type Result<T> = std::result::Result<T, PrismLogError>;

impl PrismLogError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::ConfigError(msg.into())
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(msg: S) -> Self {
        Self::ValidationError(msg.into())
    }

    /// Check if this error is recoverable
    ///
    /// I/O failures are tied to the state of the file system at the time of the
    /// call and may succeed on a later call; configuration mistakes will not.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::IoError { .. })
    }

    /// Get the error category for logging purposes
    pub fn category(&self) -> &'static str {
        match self {
            Self::ConfigError(_) | Self::ConfigFileMissing(_) | Self::InvalidLogLevel(_) => {
                "config"
            }
            Self::ValidationError(_) => "validation",
            Self::IoError { .. } => "io",
            Self::TomlError { .. } => "toml",
        }
    }
}
