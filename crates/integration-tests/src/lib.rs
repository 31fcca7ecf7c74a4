//! Integration tests for GameCart.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p gamecart-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `store_operations` - Cart/wishlist operations through the shared handle
//! - `persistence` - Reload, corrupt records and file-backed storage
//!
//! This library holds the fixtures shared by the test files.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;

use gamecart_core::GameRecord;
use gamecart_storefront::{
    KeyValueStorage, MemoryStorage, RecordingSink, StoreHandle, StoreOptions,
};
use rust_decimal::Decimal;

/// A store over in-memory storage, with handles on its collaborators.
pub struct TestStore {
    pub handle: StoreHandle,
    pub storage: Arc<MemoryStorage>,
    pub sink: Arc<RecordingSink>,
}

impl TestStore {
    /// Open a fresh, empty store.
    #[must_use]
    pub fn new(options: StoreOptions) -> Self {
        Self::with_storage(Arc::new(MemoryStorage::new()), options)
    }

    /// Open a store over existing storage.
    #[must_use]
    pub fn with_storage(storage: Arc<MemoryStorage>, options: StoreOptions) -> Self {
        let sink = Arc::new(RecordingSink::new());
        let handle = StoreHandle::open(
            storage.clone() as Arc<dyn KeyValueStorage>,
            sink.clone(),
            options,
        );
        Self {
            handle,
            storage,
            sink,
        }
    }

    /// Open a second store over the same storage, as after a page reload.
    #[must_use]
    pub fn reload(&self) -> Self {
        Self::with_storage(self.storage.clone(), self.handle.read(|s| s.options()))
    }
}

/// Whole-unit decimal.
#[must_use]
pub fn amount(units: i64) -> Decimal {
    Decimal::new(units, 0)
}

/// A small catalog used across tests.
#[must_use]
pub fn catalog() -> Vec<GameRecord> {
    vec![
        GameRecord::new("g1", "Neon Drift", amount(40))
            .with_genre("Racing")
            .with_image("/img/neon.webp")
            .with_original_price(amount(50))
            .with_rating(4.6),
        GameRecord::new("g2", "Moonfall Chronicles", amount(10))
            .with_genre("RPG")
            .with_rating(4.8),
        GameRecord::new("g3", "Pixel Garden", amount(100)),
        GameRecord::new("g4", "Valor Protocol", amount(25))
            .with_genre("Shooter")
            .with_original_price(amount(35))
            .with_rating(4.7),
    ]
}

/// Catalog game by id.
///
/// # Panics
///
/// Panics if `id` is not in [`catalog`].
#[must_use]
#[allow(clippy::expect_used)]
pub fn game(id: &str) -> GameRecord {
    catalog()
        .into_iter()
        .find(|g| g.id.as_str() == id)
        .expect("game in test catalog")
}
