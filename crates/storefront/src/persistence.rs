//! Persistence adapter between the store and key-value storage.
//!
//! Collections are stored as plain JSON arrays, one record per collection,
//! with no schema version. Loading is forgiving: a missing record is an empty
//! collection, and a record that cannot be read or parsed is logged and
//! treated as empty.

use std::collections::HashSet;

use gamecart_core::{CartEntry, GameId, GameRecord, WishlistEntry};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, error, warn};

use crate::error::{PersistError, Result};
use crate::storage::{KeyValueStorage, StorageKeys};

/// An item stored in a keyed collection.
pub trait Entry {
    fn game_id(&self) -> &GameId;
}

impl Entry for GameRecord {
    fn game_id(&self) -> &GameId {
        &self.id
    }
}

impl Entry for CartEntry {
    fn game_id(&self) -> &GameId {
        &self.id
    }
}

/// Collections read back from storage at startup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Hydrated {
    pub cart: Vec<CartEntry>,
    pub wishlist: Vec<WishlistEntry>,
}

/// Read and decode the collection stored under `key`.
///
/// Returns `Ok(None)` when nothing has been stored yet.
///
/// # Errors
///
/// Returns `PersistError` if storage fails or the record is not valid JSON
/// for `T`.
pub fn load_collection<T: DeserializeOwned>(
    storage: &dyn KeyValueStorage,
    key: &str,
) -> Result<Option<Vec<T>>> {
    let Some(raw) = storage.get(key)? else {
        return Ok(None);
    };

    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|source| PersistError::Deserialize {
            key: key.to_string(),
            source,
        })
}

/// Encode `items` and overwrite the record stored under `key`.
///
/// # Errors
///
/// Returns `PersistError` if encoding or the storage write fails.
pub fn save_collection<T: Serialize>(
    storage: &dyn KeyValueStorage,
    key: &str,
    items: &[T],
) -> Result<()> {
    let json = serde_json::to_string(items).map_err(|source| PersistError::Serialize {
        key: key.to_string(),
        source,
    })?;
    storage.set(key, &json)?;
    debug!(key, entries = items.len(), "Persisted collection");
    Ok(())
}

/// Load a collection, falling back to empty on any failure.
///
/// Entries whose id already appeared earlier in the record are dropped.
pub fn hydrate_collection<T>(storage: &dyn KeyValueStorage, key: &str) -> Vec<T>
where
    T: DeserializeOwned + Entry,
{
    let items: Vec<T> = match load_collection(storage, key) {
        Ok(Some(items)) => items,
        Ok(None) => return Vec::new(),
        Err(e) => {
            error!(key, error = %e, "Failed to load persisted collection, starting empty");
            return Vec::new();
        }
    };

    let loaded = items.len();
    let mut seen = HashSet::with_capacity(loaded);
    let unique: Vec<T> = items
        .into_iter()
        .filter(|item| seen.insert(item.game_id().clone()))
        .collect();

    if unique.len() != loaded {
        warn!(
            key,
            dropped = loaded - unique.len(),
            "Dropped duplicate entries from persisted collection"
        );
    }

    unique
}

/// Load both collections from their well-known keys.
#[must_use]
pub fn hydrate(storage: &dyn KeyValueStorage) -> Hydrated {
    Hydrated {
        cart: hydrate_collection(storage, StorageKeys::CART),
        wishlist: hydrate_collection(storage, StorageKeys::WISHLIST),
    }
}
