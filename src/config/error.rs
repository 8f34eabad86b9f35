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
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Log filter directive must not be empty")]
    MissingLogLevel,

    #[error("Invalid log filter directive: {0}")]
    InvalidLogLevel(String),

    #[error("Maximum data age must be at least one day")]
    InvalidMaxDataAge,

    #[error("Analyses directory must not be empty")]
    EmptyAnalysesDir,
}
