//! Business logic services for the storefront.
//!
//! # Services
//!
//! - `game_store` - Cart and wishlist domain store

pub mod game_store;

pub use game_store::{ChangeListener, Collection, GameStore, Outcome};
