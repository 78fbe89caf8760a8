//! Storage error types

use thiserror::Error;

/// Errors that can occur while reading or writing client-side storage
#[derive(Error, Debug)]
pub enum StorageError {
    /// I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored data could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Backing store missing or refused access (private browsing, quota, ...)
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Serialization(err.to_string())
    }
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;
