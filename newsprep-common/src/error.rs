//! Common error types for newsprep

use thiserror::Error;

/// Common result type for newsprep operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the newsprep tools
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parse or serialize error (wraps serde_json::Error)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Requested file or resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid user input or dataset content
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
