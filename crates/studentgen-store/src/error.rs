//! Storage error types.

use std::path::PathBuf;

/// Errors raised by the student record store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The database file could not be opened or created.
    #[error("failed to open database at {path:?}: {message}")]
    Open { path: PathBuf, message: String },

    /// A statement failed to execute.
    #[error("storage error: {0}")]
    Query(String),

    /// A stored row does not fit the record shape.
    #[error("invalid row {id}: {message}")]
    InvalidRow { id: i64, message: String },
}

/// Convenience alias used throughout the store.
pub type Result<T> = std::result::Result<T, StoreError>;

impl From<libsql::Error> for StoreError {
    fn from(e: libsql::Error) -> Self {
        StoreError::Query(e.to_string())
    }
}
