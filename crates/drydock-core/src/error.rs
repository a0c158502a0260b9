//! Core error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from the snapshot persistence boundary.
///
/// The store treats these as best-effort failures: a load error falls
/// back to defaults, a save error is logged and dropped. They only
/// surface to callers opening a [`crate::SqliteStore`] directly.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to open snapshot store at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Query failed: {0}")]
    QueryFailed(String),

    #[error("Snapshot codec error: {0}")]
    Codec(#[from] serde_json::Error),

    #[error("Data directory unavailable: {0}")]
    DataDir(#[from] std::io::Error),
}

impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        StorageError::QueryFailed(err.to_string())
    }
}

/// Result type alias for StorageError.
pub type Result<T, E = StorageError> = std::result::Result<T, E>;
