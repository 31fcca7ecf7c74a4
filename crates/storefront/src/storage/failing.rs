//! Storage backend whose every call fails.

use std::io;

use super::KeyValueStorage;
use crate::error::StorageError;

/// Storage that rejects every read and write with an I/O error.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingStorage;

fn unavailable(key: &str) -> StorageError {
    StorageError::Io {
        key: key.to_string(),
        source: io::Error::new(io::ErrorKind::PermissionDenied, "storage unavailable"),
    }
}

impl KeyValueStorage for FailingStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Err(unavailable(key))
    }

    fn set(&self, key: &str, _value: &str) -> Result<(), StorageError> {
        Err(unavailable(key))
    }
}
