//! Shared store handle for front-end components.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use gamecart_core::{GameId, GameRecord, OrderSummary};

use crate::config::StoreOptions;
use crate::notify::NotificationSink;
use crate::services::{ChangeListener, GameStore, Outcome};
use crate::storage::KeyValueStorage;

/// Handle to the session's [`GameStore`].
///
/// This struct is cheaply cloneable via `Arc`; every clone refers to the same
/// store. Each call locks the store for its whole duration, so composite
/// operations such as moves are observed atomically by other holders.
///
/// Change listeners and the notification sink run while the store is
/// locked. Listeners receive the store directly; neither may call back into
/// the handle.
#[derive(Clone, Debug)]
pub struct StoreHandle {
    inner: Arc<Mutex<GameStore>>,
}

impl StoreHandle {
    /// Wrap an already opened store.
    #[must_use]
    pub fn new(store: GameStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Open a store over `storage` and wrap it.
    #[must_use]
    pub fn open(
        storage: Arc<dyn KeyValueStorage>,
        sink: Arc<dyn NotificationSink>,
        options: StoreOptions,
    ) -> Self {
        Self::new(GameStore::open(storage, sink, options))
    }

    fn lock(&self) -> MutexGuard<'_, GameStore> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run `f` with shared access to the store.
    pub fn read<R>(&self, f: impl FnOnce(&GameStore) -> R) -> R {
        f(&self.lock())
    }

    /// Run `f` with exclusive access to the store.
    pub fn update<R>(&self, f: impl FnOnce(&mut GameStore) -> R) -> R {
        f(&mut self.lock())
    }

    pub fn add_to_cart(&self, game: &GameRecord) -> Outcome {
        self.lock().add_to_cart(game)
    }

    pub fn add_to_wishlist(&self, game: &GameRecord) -> Outcome {
        self.lock().add_to_wishlist(game)
    }

    pub fn remove_from_cart(&self, id: &GameId) -> Outcome {
        self.lock().remove_from_cart(id)
    }

    pub fn remove_from_wishlist(&self, id: &GameId) -> Outcome {
        self.lock().remove_from_wishlist(id)
    }

    pub fn move_to_cart_from_wishlist(&self, id: &GameId) -> Outcome {
        self.lock().move_to_cart_from_wishlist(id)
    }

    pub fn move_to_wishlist_from_cart(&self, id: &GameId) -> Outcome {
        self.lock().move_to_wishlist_from_cart(id)
    }

    #[must_use]
    pub fn is_in_cart(&self, id: &GameId) -> bool {
        self.lock().is_in_cart(id)
    }

    #[must_use]
    pub fn is_in_wishlist(&self, id: &GameId) -> bool {
        self.lock().is_in_wishlist(id)
    }

    /// Cart and wishlist badge counts.
    #[must_use]
    pub fn counts(&self) -> (usize, usize) {
        let store = self.lock();
        (store.cart_count(), store.wishlist_count())
    }

    #[must_use]
    pub fn summary(&self) -> OrderSummary {
        self.lock().summary()
    }

    pub fn checkout(&self) -> OrderSummary {
        self.lock().checkout()
    }

    pub fn subscribe(&self, listener: ChangeListener) {
        self.lock().subscribe(listener);
    }
}
