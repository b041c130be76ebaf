//! Pantry store backends.
//!
//! The store is a flat key-value namespace: one record per item name,
//! each carrying a count. [`FirestoreStore`] talks to the hosted
//! backend over REST; [`MemoryStore`] is an in-process implementation
//! used by tests and local embedders.

mod error;
mod firestore;
mod memory;

pub use error::StoreError;
pub use firestore::{FirestoreStore, DEFAULT_BASE_URL};
pub use memory::{MemoryStore, Op};

use crate::models::PantryItem;

/// The four operations the pantry core needs from its backend.
///
/// No transactions, no batching: each call is an independent round
/// trip, and per-key last-write-wins arbitrates concurrent writers.
#[allow(async_fn_in_trait)]
pub trait PantryStore {
    /// Fetch every record in the collection.
    async fn list_all(&self) -> Result<Vec<PantryItem>, StoreError>;

    /// Fetch one record by name. Absent is `Ok(None)`, not an error.
    async fn get(&self, name: &str) -> Result<Option<PantryItem>, StoreError>;

    /// Upsert a record, overwriting any existing count.
    async fn put(&self, name: &str, count: u32) -> Result<(), StoreError>;

    /// Remove a record. Deleting an absent name succeeds.
    async fn delete(&self, name: &str) -> Result<(), StoreError>;
}
