//! Error types for storage and persistence.
//!
//! None of these errors reach the user: the store logs them and carries on
//! with whatever state it has in memory.

use thiserror::Error;

/// Errors raised by a [`KeyValueStorage`](crate::storage::KeyValueStorage) backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing file failed.
    #[error("storage I/O error for key `{key}`: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// The key cannot be used as a storage name.
    #[error("invalid storage key: {0}")]
    InvalidKey(String),
}

/// Errors raised while loading or saving a persisted record.
#[derive(Debug, Error)]
pub enum PersistError {
    /// Storage backend failed.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The collection could not be encoded.
    #[error("failed to serialize `{key}`: {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// The stored record is not a valid collection.
    #[error("failed to deserialize `{key}`: {source}")]
    Deserialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type alias for `PersistError`.
pub type Result<T> = std::result::Result<T, PersistError>;
