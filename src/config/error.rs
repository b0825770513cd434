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
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Confirmation threshold must stay below the question bank size")]
    ThresholdTooHigh,

    #[error("Presenter channel capacity must be at least 1")]
    ZeroPresenterCapacity,

    #[error("Knowledge content directory is set but empty")]
    EmptyContentDir,
}
