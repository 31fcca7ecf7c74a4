//! Durable key-value storage backends.
//!
//! The store persists each collection as a JSON string under a fixed key.
//! Backends only move strings around; encoding lives in
//! [`persistence`](crate::persistence).
//!
//! # Backends
//!
//! - [`MemoryStorage`] - In-process map, for tests and embedding
//! - [`FileStorage`] - One `<key>.json` file per key under a data directory

#[cfg(test)]
mod failing;
mod file;
mod memory;

#[cfg(test)]
pub use failing::FailingStorage;
pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::error::StorageError;

/// Well-known storage keys.
pub struct StorageKeys;

impl StorageKeys {
    /// Persisted cart record.
    pub const CART: &'static str = "gameCart";
    /// Persisted wishlist record.
    pub const WISHLIST: &'static str = "gameWishlist";
}

/// String-valued key-value storage.
///
/// Implementations must make `set` atomic from a reader's point of view: a
/// subsequent `get` returns either the previous value or the new one in full.
pub trait KeyValueStorage: Send + Sync {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
