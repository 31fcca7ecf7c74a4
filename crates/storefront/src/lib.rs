//! GameCart Storefront library.
//!
//! The cart/wishlist store behind the storefront front-ends, with its
//! persistence adapter and notification sinks.
//!
//! # Modules
//!
//! - [`services`] - The [`GameStore`](services::GameStore) domain store
//! - [`state`] - Cloneable [`StoreHandle`](state::StoreHandle) shared by views
//! - [`persistence`] - Loading and saving collections as JSON records
//! - [`storage`] - Key-value storage backends (memory, file)
//! - [`notify`] - Notification sinks
//! - [`config`] - Environment configuration and store policies

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod notify;
pub mod persistence;
pub mod services;
pub mod state;
pub mod storage;

pub use config::{MoveConflict, StoreOptions, StorefrontConfig};
pub use notify::{NotificationSink, RecordingSink, TracingSink};
pub use services::{Collection, GameStore, Outcome};
pub use state::StoreHandle;
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage, StorageKeys};
