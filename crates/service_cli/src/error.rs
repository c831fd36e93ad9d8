//! CLI error types

use pricer_barrier::PricingError;
use thiserror::Error;

/// Errors surfaced by the `barrier` binary
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file does not exist
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Configuration file is not valid TOML or misses required fields
    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// Command-line argument rejected
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Parameter validation or pricing failure
    #[error(transparent)]
    Pricing(#[from] PricingError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
