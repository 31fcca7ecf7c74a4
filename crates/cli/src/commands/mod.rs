//! CLI command implementations.
//!
//! Output goes through `tracing` at info level, like the rest of the logs.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod wishlist;
