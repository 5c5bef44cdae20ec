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
    InvalidSocketAddr(String),

    #[error("Model artifact path is empty")]
    EmptyArtifactPath,

    #[error("Scoring value '{0}' must be between 0 and 1")]
    ScoringOutOfRange(&'static str),

    #[error("Model and rule weights must sum to 1, got {0}")]
    WeightsDoNotSumToOne(f64),

    #[error("Medium threshold exceeds high threshold")]
    InvertedTierThresholds,
}
