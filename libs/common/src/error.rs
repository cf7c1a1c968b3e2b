//! Custom error types for the common library
//!
//! This module defines application-specific error types that can be used
//! throughout the application.

use thiserror::Error;

/// Custom error type for token storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    /// Error occurred while writing the token file
    #[error("Token file write error: {0}")]
    Write(#[source] std::io::Error),

    /// Error occurred while removing the token file
    #[error("Token file remove error: {0}")]
    Remove(#[source] std::io::Error),

    /// Configuration error
    #[error("Storage configuration error: {0}")]
    Configuration(String),
}

/// Type alias for Result with StorageError
pub type StorageResult<T> = Result<T, StorageError>;
