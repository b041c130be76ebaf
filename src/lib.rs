//! Pantry Core Library
//!
//! Store client and mutation logic for the pantry inventory manager.
//! The rendering layer lives elsewhere; this crate owns everything it
//! talks through: the store backends, the mutation service and its
//! validation rules, the local snapshot filter, and the notification
//! types the UI surfaces.

pub mod config;
pub mod models;
pub mod notify;
pub mod service;
pub mod store;

pub use config::{Config, ConfigError};
pub use models::PantryItem;
pub use notify::{Notification, Severity};
pub use service::{filter, PantryError, PantryService, RemoveOutcome};
pub use store::{FirestoreStore, MemoryStore, PantryStore, StoreError};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
