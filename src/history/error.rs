//! History error types.

use super::store::StorageError;
use thiserror::Error;

/// Errors that can occur while reading or writing the history.
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("History storage failed: {0}")]
    Storage(#[from] StorageError),

    /// The stored blob is not a JSON array of entries
    #[error("Stored history is corrupt: {0}")]
    StorageCorrupt(String),

    #[error("History serialization failed: {0}")]
    SerializationFailed(String),
}
