//! CLI error types

use thiserror::Error;

/// CLI error types
#[derive(Debug, Error)]
pub enum CliError {
    /// Settings could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] readonly_mode::ReadOnlyError),

    /// JSON encoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML encoding error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::ser::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
