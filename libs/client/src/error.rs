//! Custom error types for the client library

use thiserror::Error;

/// Custom error type for API client operations
#[derive(Error, Debug)]
pub enum ClientError {
    /// Transport-level failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Token slot failure
    #[error("Storage error: {0}")]
    Storage(#[from] common::error::StorageError),

    /// Local input validation failure
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Type alias for client results
pub type ClientResult<T> = Result<T, ClientError>;
