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
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid socket address: {0}")]
    InvalidAddress(String),

    #[error("Whitening coefficient must lie in [0, 1]")]
    InvalidWhitening,

    #[error("Consistency threshold must be positive")]
    InvalidConsistencyThreshold,

    #[error("Sensitivity delta must lie in (0, 1)")]
    InvalidSensitivityDelta,

    #[error("Decision store capacity must be at least 1")]
    InvalidMaxDecisions,
}
