//! Cart and wishlist domain store.
//!
//! [`GameStore`] owns both collections and is the only way to change them.
//! Every effective mutation is written through to storage before the method
//! returns, then reported to the notification sink and to change listeners.
//! Mutations that change nothing perform no write and fire no listener.

use std::fmt;
use std::sync::Arc;

use gamecart_core::{CartEntry, GameId, GameRecord, Notice, OrderSummary, WishlistEntry};
use tracing::{debug, error, info, instrument};

use crate::config::{MoveConflict, StoreOptions};
use crate::notify::NotificationSink;
use crate::persistence::{self, Entry, save_collection};
use crate::storage::{KeyValueStorage, StorageKeys};

/// The two collections held by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Cart,
    Wishlist,
}

impl Collection {
    /// Storage key of the persisted record.
    #[must_use]
    pub const fn storage_key(self) -> &'static str {
        match self {
            Self::Cart => StorageKeys::CART,
            Self::Wishlist => StorageKeys::WISHLIST,
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cart => write!(f, "cart"),
            Self::Wishlist => write!(f, "wishlist"),
        }
    }
}

/// Result of a store operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The game was appended to the target collection.
    Added,
    /// The game was removed from the collection.
    Removed,
    /// The game left the source collection and joined the destination.
    Moved,
    /// The destination already held the game; nothing was added.
    Duplicate,
    /// The id is not in the collection.
    NotFound,
    /// The game had a blank id and was ignored.
    Ignored,
}

impl Outcome {
    /// Whether the operation achieved what it was asked to do.
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Added | Self::Removed | Self::Moved)
    }
}

/// Callback fired after a collection changes.
pub type ChangeListener = Box<dyn Fn(Collection, &GameStore) + Send + Sync>;

/// Owner of the cart and wishlist.
pub struct GameStore {
    cart: Vec<CartEntry>,
    wishlist: Vec<WishlistEntry>,
    storage: Arc<dyn KeyValueStorage>,
    sink: Arc<dyn NotificationSink>,
    options: StoreOptions,
    listeners: Vec<ChangeListener>,
}

impl fmt::Debug for GameStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameStore")
            .field("cart", &self.cart)
            .field("wishlist", &self.wishlist)
            .field("options", &self.options)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl GameStore {
    /// Open a store, hydrating both collections from `storage`.
    ///
    /// Missing or unreadable records start empty; see
    /// [`persistence::hydrate`].
    #[must_use]
    pub fn open(
        storage: Arc<dyn KeyValueStorage>,
        sink: Arc<dyn NotificationSink>,
        options: StoreOptions,
    ) -> Self {
        let hydrated = persistence::hydrate(storage.as_ref());
        info!(
            cart = hydrated.cart.len(),
            wishlist = hydrated.wishlist.len(),
            "Opened game store"
        );

        Self {
            cart: hydrated.cart,
            wishlist: hydrated.wishlist,
            storage,
            sink,
            options,
            listeners: Vec::new(),
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Cart entries in display order.
    #[must_use]
    pub fn cart(&self) -> &[CartEntry] {
        &self.cart
    }

    /// Wishlist entries in display order.
    #[must_use]
    pub fn wishlist(&self) -> &[WishlistEntry] {
        &self.wishlist
    }

    #[must_use]
    pub fn is_in_cart(&self, id: &GameId) -> bool {
        self.cart.iter().any(|entry| &entry.id == id)
    }

    #[must_use]
    pub fn is_in_wishlist(&self, id: &GameId) -> bool {
        self.wishlist.iter().any(|entry| &entry.id == id)
    }

    /// Cart badge count.
    #[must_use]
    pub fn cart_count(&self) -> usize {
        self.cart.len()
    }

    /// Wishlist badge count.
    #[must_use]
    pub fn wishlist_count(&self) -> usize {
        self.wishlist.len()
    }

    /// Totals for the current cart.
    #[must_use]
    pub fn summary(&self) -> OrderSummary {
        OrderSummary::from_entries(&self.cart)
    }

    #[must_use]
    pub const fn options(&self) -> StoreOptions {
        self.options
    }

    /// Register a listener fired after every effective change.
    pub fn subscribe(&mut self, listener: ChangeListener) {
        self.listeners.push(listener);
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Derive a cart entry from `game` and append it.
    #[instrument(skip(self, game), fields(game_id = %game.id))]
    pub fn add_to_cart(&mut self, game: &GameRecord) -> Outcome {
        if game.id.is_blank() {
            debug!("Ignoring add to cart for game without id");
            return Outcome::Ignored;
        }

        if self.is_in_cart(&game.id) {
            self.sink
                .notify(Notice::warning(format!("{} is already in the cart.", game.title)));
            return Outcome::Duplicate;
        }

        self.cart.push(CartEntry::from_game(game));
        self.changed(Collection::Cart);
        self.sink
            .notify(Notice::success(format!("{} added to cart!", game.title)));
        Outcome::Added
    }

    /// Append `game` to the wishlist unchanged.
    #[instrument(skip(self, game), fields(game_id = %game.id))]
    pub fn add_to_wishlist(&mut self, game: &GameRecord) -> Outcome {
        if game.id.is_blank() {
            debug!("Ignoring add to wishlist for game without id");
            return Outcome::Ignored;
        }

        if self.is_in_wishlist(&game.id) {
            self.sink.notify(Notice::error(format!(
                "{} is already in your wishlist!",
                game.title
            )));
            return Outcome::Duplicate;
        }

        self.wishlist.push(game.clone());
        self.changed(Collection::Wishlist);
        self.sink
            .notify(Notice::success(format!("{} added to wishlist!", game.title)));
        Outcome::Added
    }

    /// Remove the cart entry with `id`, if present.
    #[instrument(skip(self))]
    pub fn remove_from_cart(&mut self, id: &GameId) -> Outcome {
        let Some(removed) = take_entry(&mut self.cart, id) else {
            return Outcome::NotFound;
        };

        self.changed(Collection::Cart);
        if self.options.notify_cart_removal {
            self.sink
                .notify(Notice::info(format!("{} removed from cart.", removed.title)));
        }
        Outcome::Removed
    }

    /// Remove the wishlist entry with `id`, if present.
    #[instrument(skip(self))]
    pub fn remove_from_wishlist(&mut self, id: &GameId) -> Outcome {
        let Some(removed) = take_entry(&mut self.wishlist, id) else {
            return Outcome::NotFound;
        };

        self.changed(Collection::Wishlist);
        self.sink.notify(Notice::info(format!(
            "{} removed from wishlist.",
            removed.title
        )));
        Outcome::Removed
    }

    /// Add the wishlisted game to the cart, then drop it from the wishlist.
    #[instrument(skip(self))]
    pub fn move_to_cart_from_wishlist(&mut self, id: &GameId) -> Outcome {
        let Some(game) = find_entry(&self.wishlist, id).cloned() else {
            return Outcome::NotFound;
        };

        let added = self.add_to_cart(&game);
        self.finish_move(added, Collection::Wishlist, id)
    }

    /// Return a cart entry to the wishlist, then drop it from the cart.
    ///
    /// The wishlist receives the catalog-shaped record rebuilt by
    /// [`CartEntry::to_game_record`].
    #[instrument(skip(self))]
    pub fn move_to_wishlist_from_cart(&mut self, id: &GameId) -> Outcome {
        let Some(game) = find_entry(&self.cart, id).map(CartEntry::to_game_record) else {
            return Outcome::NotFound;
        };

        let added = self.add_to_wishlist(&game);
        self.finish_move(added, Collection::Cart, id)
    }

    /// Checkout stub: logs the cart and emits a confirmation notice.
    ///
    /// Has no effect on the collections.
    pub fn checkout(&self) -> OrderSummary {
        let summary = self.summary();
        if summary.is_empty() {
            self.sink.notify(Notice::warning("Your cart is empty."));
            return summary;
        }

        let ids: Vec<&str> = self.cart.iter().map(|entry| entry.id.as_str()).collect();
        info!(
            items = ?ids,
            subtotal = %summary.subtotal,
            discount = %summary.discount,
            "Proceeding to checkout"
        );
        self.sink.notify(Notice::info("Proceeding to checkout..."));
        summary
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn finish_move(&mut self, added: Outcome, source: Collection, id: &GameId) -> Outcome {
        match added {
            Outcome::Added => {
                self.remove_from(source, id);
                Outcome::Moved
            }
            Outcome::Duplicate => {
                if self.options.move_conflict == MoveConflict::RemoveSource {
                    self.remove_from(source, id);
                }
                Outcome::Duplicate
            }
            other => other,
        }
    }

    fn remove_from(&mut self, collection: Collection, id: &GameId) -> Outcome {
        match collection {
            Collection::Cart => self.remove_from_cart(id),
            Collection::Wishlist => self.remove_from_wishlist(id),
        }
    }

    fn changed(&self, collection: Collection) {
        self.persist(collection);
        for listener in &self.listeners {
            listener(collection, self);
        }
    }

    fn persist(&self, collection: Collection) {
        let storage = self.storage.as_ref();
        let key = collection.storage_key();
        let result = match collection {
            Collection::Cart => save_collection(storage, key, &self.cart),
            Collection::Wishlist => save_collection(storage, key, &self.wishlist),
        };

        if let Err(e) = result {
            error!(%collection, error = %e, "Failed to persist collection");
        }
    }
}

fn find_entry<'a, T: Entry>(items: &'a [T], id: &GameId) -> Option<&'a T> {
    items.iter().find(|item| item.game_id() == id)
}

fn take_entry<T: Entry>(items: &mut Vec<T>, id: &GameId) -> Option<T> {
    let index = items.iter().position(|item| item.game_id() == id)?;
    Some(items.remove(index))
}
