//! Integration tests for persisted cart and wishlist records.

use std::sync::Arc;

use gamecart_core::{CartEntry, GameId, WishlistEntry};
use gamecart_integration_tests::{TestStore, game};
use gamecart_storefront::persistence::load_collection;
use gamecart_storefront::{
    FileStorage, KeyValueStorage, MemoryStorage, RecordingSink, StorageKeys, StoreHandle,
    StoreOptions,
};

#[test]
fn test_persisted_records_match_memory_after_each_mutation() {
    let store = TestStore::new(StoreOptions::default());
    let steps: Vec<Box<dyn Fn(&StoreHandle)>> = vec![
        Box::new(|h: &StoreHandle| {
            h.add_to_cart(&game("g1"));
        }),
        Box::new(|h: &StoreHandle| {
            h.add_to_wishlist(&game("g2"));
        }),
        Box::new(|h: &StoreHandle| {
            h.move_to_cart_from_wishlist(&GameId::new("g2"));
        }),
        Box::new(|h: &StoreHandle| {
            h.move_to_wishlist_from_cart(&GameId::new("g1"));
        }),
        Box::new(|h: &StoreHandle| {
            h.remove_from_cart(&GameId::new("g2"));
        }),
    ];

    for step in &steps {
        step(&store.handle);

        let cart: Vec<CartEntry> = load_collection(store.storage.as_ref(), StorageKeys::CART)
            .ok()
            .flatten()
            .unwrap_or_default();
        let wishlist: Vec<WishlistEntry> =
            load_collection(store.storage.as_ref(), StorageKeys::WISHLIST)
                .ok()
                .flatten()
                .unwrap_or_default();

        store.handle.read(|s| {
            assert_eq!(cart, s.cart());
            assert_eq!(wishlist, s.wishlist());
        });
    }
}

#[test]
fn test_reload_reproduces_collections() {
    let store = TestStore::new(StoreOptions::default());
    for raw in ["g4", "g1", "g2"] {
        store.handle.add_to_cart(&game(raw));
    }
    store.handle.add_to_wishlist(&game("g3"));

    let reloaded = store.reload();

    let original = store.handle.read(|s| (s.cart().to_vec(), s.wishlist().to_vec()));
    let restored = reloaded
        .handle
        .read(|s| (s.cart().to_vec(), s.wishlist().to_vec()));
    assert_eq!(restored, original);
}

#[test]
fn test_corrupt_records_start_empty() {
    let storage = Arc::new(MemoryStorage::with_entries([
        (StorageKeys::CART, "[{\"id\": \"g1\", \"title\": 12"),
        (StorageKeys::WISHLIST, "\"not an array\""),
    ]));
    let store = TestStore::with_storage(storage, StoreOptions::default());

    assert_eq!(store.handle.counts(), (0, 0));
    assert!(store.sink.notices().is_empty());

    store.handle.add_to_cart(&game("g1"));
    let cart: Vec<CartEntry> = load_collection(store.storage.as_ref(), StorageKeys::CART)
        .ok()
        .flatten()
        .unwrap_or_default();
    assert_eq!(cart.len(), 1);
}

#[test]
fn test_file_storage_survives_reopen() {
    let Ok(dir) = tempfile::tempdir() else {
        panic!("failed to create temp dir");
    };

    let open = || {
        StoreHandle::open(
            Arc::new(FileStorage::new(dir.path())) as Arc<dyn KeyValueStorage>,
            Arc::new(RecordingSink::new()),
            StoreOptions::default(),
        )
    };

    let first = open();
    first.add_to_cart(&game("g1"));
    first.add_to_wishlist(&game("g2"));
    drop(first);

    assert!(dir.path().join("gameCart.json").exists());
    assert!(dir.path().join("gameWishlist.json").exists());

    let second = open();
    assert!(second.is_in_cart(&GameId::new("g1")));
    assert!(second.is_in_wishlist(&GameId::new("g2")));
}

#[test]
fn test_corrupt_file_starts_empty() {
    let Ok(dir) = tempfile::tempdir() else {
        panic!("failed to create temp dir");
    };
    let storage = FileStorage::new(dir.path());
    assert!(storage.set(StorageKeys::CART, "{{{").is_ok());

    let store = StoreHandle::open(
        Arc::new(storage),
        Arc::new(RecordingSink::new()),
        StoreOptions::default(),
    );
    assert_eq!(store.counts(), (0, 0));
}
