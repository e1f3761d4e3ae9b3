//! Error types for TwinView.

use thiserror::Error;

/// Main error type for TwinView operations.
#[derive(Error, Debug)]
pub enum TwinViewError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Media error: {0}")]
    Media(String),

    #[error("Probe error: {0}")]
    Probe(String),

    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for TwinView operations.
pub type Result<T> = std::result::Result<T, TwinViewError>;
