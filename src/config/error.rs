//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("History capacity must be between 1 and 1000, got {0}")]
    InvalidHistoryCapacity(usize),

    #[error("History path is required for the file backend")]
    MissingHistoryPath,

    #[error("Unsupported catalog file extension: {0}")]
    UnsupportedCatalogFormat(String),

    #[error("Invalid log filter: {0}")]
    InvalidLogLevel(String),
}
