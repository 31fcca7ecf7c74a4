//! GameCart Core - Shared domain types.
//!
//! This crate provides the types used across all GameCart components:
//! - `storefront` - Cart/wishlist store, persistence and notifications
//! - `cli` - Terminal front-end driving a file-backed store
//!
//! # Architecture
//!
//! The core crate contains only types and pure derivations - no I/O, no
//! storage access, no logging. This keeps it lightweight and allows it to be
//! used anywhere, including from a browser front-end.
//!
//! # Modules
//!
//! - [`types`] - Game identifiers, prices, catalog records, cart entries,
//!   order summaries and user-facing notices

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
