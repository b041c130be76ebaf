//! In-process pantry store.
//!
//! Backs the mutation-service tests: records live in a map, every
//! call is appended to an operation log, and a single upcoming call
//! can be made to fail to exercise error paths.

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::Mutex;

use super::error::StoreError;
use super::PantryStore;
use crate::models::PantryItem;

/// A store call, as recorded in the operation log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    ListAll,
    Get(String),
    Put(String, u32),
    Delete(String),
}

#[derive(Debug, Default)]
struct Inner {
    records: BTreeMap<String, u32>,
    ops: Vec<Op>,
    fail_next: Option<&'static str>,
}

/// In-memory `PantryStore`. Cloning shares the underlying records.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with the given records.
    pub fn with_records<I, S>(records: I) -> Self
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        let records = records
            .into_iter()
            .map(|(name, count)| (name.into(), count))
            .collect();
        Self {
            inner: Arc::new(Mutex::new(Inner {
                records,
                ..Inner::default()
            })),
        }
    }

    /// Makes the next call of the named kind ("list_all", "get", "put",
    /// "delete") fail with a transport error. One-shot.
    pub async fn fail_next(&self, op: &'static str) {
        self.inner.lock().await.fail_next = Some(op);
    }

    /// Snapshot of the operation log so far.
    pub async fn ops(&self) -> Vec<Op> {
        self.inner.lock().await.ops.clone()
    }

    /// Current count for a name, if stored.
    pub async fn count_of(&self, name: &str) -> Option<u32> {
        self.inner.lock().await.records.get(name).copied()
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.inner.lock().await.records.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.lock().await.records.is_empty()
    }
}

impl Inner {
    fn check_fault(&mut self, op: &str) -> Result<(), StoreError> {
        if self.fail_next == Some(op) {
            self.fail_next = None;
            return Err(StoreError::Http(format!("injected {} fault", op)));
        }
        Ok(())
    }
}

impl PantryStore for MemoryStore {
    async fn list_all(&self) -> Result<Vec<PantryItem>, StoreError> {
        let mut inner = self.inner.lock().await;
        inner.ops.push(Op::ListAll);
        inner.check_fault("list_all")?;
        Ok(inner
            .records
            .iter()
            .map(|(name, count)| PantryItem::new(name.clone(), *count))
            .collect())
    }

    async fn get(&self, name: &str) -> Result<Option<PantryItem>, StoreError> {
        let mut inner = self.inner.lock().await;
        inner.ops.push(Op::Get(name.to_string()));
        inner.check_fault("get")?;
        Ok(inner
            .records
            .get(name)
            .map(|count| PantryItem::new(name, *count)))
    }

    async fn put(&self, name: &str, count: u32) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().await;
        inner.ops.push(Op::Put(name.to_string(), count));
        inner.check_fault("put")?;
        inner.records.insert(name.to_string(), count);
        Ok(())
    }

    async fn delete(&self, name: &str) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().await;
        inner.ops.push(Op::Delete(name.to_string()));
        inner.check_fault("delete")?;
        inner.records.remove(name);
        Ok(())
    }
}
