//! Error types for read-only mode
//!
//! Building lists and deciding verdicts cannot fail. Only loading
//! settings can.

use thiserror::Error;

/// Read-only mode errors
#[derive(Debug, Error)]
pub enum ReadOnlyError {
    /// Settings file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings file is not valid TOML
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Settings are well-formed but unusable
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Result type for read-only mode operations
pub type Result<T> = std::result::Result<T, ReadOnlyError>;
