//! Core types for GameCart.
//!
//! This module provides type-safe wrappers for the cart/wishlist domain.

pub mod cart;
pub mod game;
pub mod id;
pub mod notice;
pub mod price;
pub mod summary;

pub use cart::{
    BASE_GAME_TYPE, CartEntry, REWARD_RATING_THRESHOLD, REWARDS_MESSAGE, discount_percent,
};
pub use game::{GameRecord, WishlistEntry};
pub use id::GameId;
pub use notice::{Notice, Severity};
pub use price::{CurrencyCode, CurrencyCodeError, Price};
pub use summary::{OrderSummary, PricedSummary};
