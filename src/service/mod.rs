//! Pantry mutation service.
//!
//! Translates the three user intents - add, remove one, edit - into
//! sequences of store calls while preserving the core invariant: a
//! stored record always has a positive count, and a count that would
//! reach zero deletes the record instead.
//!
//! The service is stateless. Every successful mutation ends with a
//! full re-read of the collection and the fresh snapshot is handed
//! back to the caller, which owns the only in-memory copy.

pub mod filter;

use thiserror::Error;

use crate::models::PantryItem;
use crate::store::{PantryStore, StoreError};

/// Errors surfaced by pantry mutations.
///
/// Validation failures happen before any store call; `Store` means
/// the backend could not be reached or refused the request, in which
/// case the caller's previous snapshot is still the truth (writes
/// already issued are not rolled back).
#[derive(Error, Debug)]
pub enum PantryError {
    #[error("Item name cannot be blank")]
    InvalidName,

    #[error("Quantity must be a positive number")]
    InvalidQuantity,

    #[error("store unavailable: {0}")]
    Store(#[from] StoreError),
}

/// What a [`PantryService::remove_one`] call did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// Count decremented; the record is still present. Carries the
    /// refreshed snapshot.
    Removed(Vec<PantryItem>),
    /// Count hit zero and the record was deleted. Carries the
    /// refreshed snapshot.
    Deleted(Vec<PantryItem>),
    /// No record under that name; nothing was written.
    Missing,
}

/// Stateless mutation service over a pantry store.
#[derive(Debug, Clone)]
pub struct PantryService<S> {
    store: S,
}

impl<S: PantryStore> PantryService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying store, for direct reads by the embedder.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Validates raw form input.
    ///
    /// Returns the trimmed name and the parsed quantity, or the
    /// validation error to show the user. Quantity is parsed as a
    /// signed integer first so "-3" fails the positivity check rather
    /// than the parse.
    pub fn validate(name: &str, quantity: &str) -> Result<(String, u32), PantryError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PantryError::InvalidName);
        }
        let parsed = quantity
            .trim()
            .parse::<i64>()
            .map_err(|_| PantryError::InvalidQuantity)?;
        if parsed <= 0 {
            return Err(PantryError::InvalidQuantity);
        }
        let quantity = u32::try_from(parsed).map_err(|_| PantryError::InvalidQuantity)?;
        Ok((name.to_string(), quantity))
    }

    /// Re-reads the whole collection.
    ///
    /// This is also the initial-load operation; mutations call it
    /// internally after their writes.
    pub async fn refresh(&self) -> Result<Vec<PantryItem>, PantryError> {
        Ok(self.store.list_all().await?)
    }

    /// Adds `quantity` units of `name`, creating the record if absent
    /// and incrementing the existing count otherwise.
    pub async fn add(&self, name: &str, quantity: &str) -> Result<Vec<PantryItem>, PantryError> {
        let (name, quantity) = Self::validate(name, quantity)?;

        let count = match self.store.get(&name).await? {
            Some(existing) => existing.count.saturating_add(quantity),
            None => quantity,
        };
        self.store.put(&name, count).await?;
        self.refresh().await
    }

    /// Removes one unit of `name`. A count of 1 deletes the record;
    /// an absent name is a no-op and issues no write.
    pub async fn remove_one(&self, name: &str) -> Result<RemoveOutcome, PantryError> {
        let Some(existing) = self.store.get(name).await? else {
            return Ok(RemoveOutcome::Missing);
        };

        if existing.count <= 1 {
            self.store.delete(name).await?;
            Ok(RemoveOutcome::Deleted(self.refresh().await?))
        } else {
            self.store.put(name, existing.count - 1).await?;
            Ok(RemoveOutcome::Removed(self.refresh().await?))
        }
    }

    /// Applies an edit-form submission: rename and/or recount.
    ///
    /// Same name: the quantity replaces the stored count outright.
    /// Rename to a fresh name: the record moves and takes the form
    /// quantity. Rename onto an existing name: the two records merge
    /// by summing their stored counts and the form quantity is
    /// discarded.
    pub async fn edit(
        &self,
        old_name: &str,
        new_name: &str,
        quantity: &str,
    ) -> Result<Vec<PantryItem>, PantryError> {
        let (new_name, quantity) = Self::validate(new_name, quantity)?;

        if new_name == old_name {
            self.store.put(&new_name, quantity).await?;
        } else if let Some(target) = self.store.get(&new_name).await? {
            match self.store.get(old_name).await? {
                Some(old) => {
                    self.store
                        .put(&new_name, target.count.saturating_add(old.count))
                        .await?;
                    self.store.delete(old_name).await?;
                }
                None => {
                    // The old record vanished between the user opening the
                    // form and submitting it. Skip the merge write; the
                    // refresh below surfaces whatever state remains.
                    tracing::warn!(
                        "Skipping merge into '{}': '{}' no longer exists",
                        new_name,
                        old_name
                    );
                }
            }
        } else {
            self.store.put(&new_name, quantity).await?;
            self.store.delete(old_name).await?;
        }

        self.refresh().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStore, Op};

    fn service(store: &MemoryStore) -> PantryService<MemoryStore> {
        PantryService::new(store.clone())
    }

    mod validate {
        use super::*;

        type Svc = PantryService<MemoryStore>;

        #[test]
        fn test_accepts_valid_input() {
            let (name, quantity) = Svc::validate("Rice", "5").unwrap();
            assert_eq!(name, "Rice");
            assert_eq!(quantity, 5);
        }

        #[test]
        fn test_trims_name_and_quantity() {
            let (name, quantity) = Svc::validate("  Rice  ", " 5 ").unwrap();
            assert_eq!(name, "Rice");
            assert_eq!(quantity, 5);
        }

        #[test]
        fn test_rejects_blank_names() {
            assert!(matches!(
                Svc::validate("", "5"),
                Err(PantryError::InvalidName)
            ));
            assert!(matches!(
                Svc::validate("   ", "5"),
                Err(PantryError::InvalidName)
            ));
        }

        #[test]
        fn test_rejects_bad_quantities() {
            for bad in ["0", "-3", "abc", "", "2.5"] {
                assert!(
                    matches!(Svc::validate("Rice", bad), Err(PantryError::InvalidQuantity)),
                    "quantity {:?} should be rejected",
                    bad
                );
            }
        }
    }

    mod add {
        use super::*;

        #[tokio::test]
        async fn test_creates_absent_record() {
            let store = MemoryStore::new();
            let pantry = service(&store).add("Rice", "5").await.unwrap();

            assert_eq!(pantry, vec![PantryItem::new("Rice", 5)]);
            assert_eq!(store.count_of("Rice").await, Some(5));
        }

        #[tokio::test]
        async fn test_increments_existing_record() {
            let store = MemoryStore::new();
            let svc = service(&store);

            svc.add("Rice", "5").await.unwrap();
            let pantry = svc.add("Rice", "3").await.unwrap();

            assert_eq!(pantry, vec![PantryItem::new("Rice", 8)]);
        }

        #[tokio::test]
        async fn test_validation_failure_issues_no_store_call() {
            let store = MemoryStore::new();
            let result = service(&store).add("  ", "5").await;

            assert!(matches!(result, Err(PantryError::InvalidName)));
            assert!(store.ops().await.is_empty());
        }

        #[tokio::test]
        async fn test_store_failure_surfaces_as_error() {
            let store = MemoryStore::new();
            store.fail_next("put").await;

            let result = service(&store).add("Rice", "5").await;
            assert!(matches!(result, Err(PantryError::Store(_))));
            assert!(store.is_empty().await);
        }
    }

    mod remove_one {
        use super::*;

        #[tokio::test]
        async fn test_decrements_when_above_one() {
            let store = MemoryStore::with_records([("Rice", 3)]);
            let outcome = service(&store).remove_one("Rice").await.unwrap();

            let RemoveOutcome::Removed(pantry) = outcome else {
                panic!("expected Removed, got {:?}", outcome);
            };
            assert_eq!(pantry, vec![PantryItem::new("Rice", 2)]);
        }

        #[tokio::test]
        async fn test_deletes_at_one_instead_of_storing_zero() {
            let store = MemoryStore::with_records([("Rice", 1)]);
            let outcome = service(&store).remove_one("Rice").await.unwrap();

            assert!(matches!(outcome, RemoveOutcome::Deleted(ref p) if p.is_empty()));
            assert_eq!(store.count_of("Rice").await, None);
        }

        #[tokio::test]
        async fn test_n_removals_empty_a_count_of_n() {
            let store = MemoryStore::with_records([("Rice", 4)]);
            let svc = service(&store);

            for _ in 0..3 {
                assert!(matches!(
                    svc.remove_one("Rice").await.unwrap(),
                    RemoveOutcome::Removed(_)
                ));
            }
            assert!(matches!(
                svc.remove_one("Rice").await.unwrap(),
                RemoveOutcome::Deleted(_)
            ));
            assert!(store.is_empty().await);
        }

        #[tokio::test]
        async fn test_absent_name_is_a_noop_with_no_writes() {
            let store = MemoryStore::new();
            let outcome = service(&store).remove_one("Ghost").await.unwrap();

            assert_eq!(outcome, RemoveOutcome::Missing);
            assert_eq!(store.ops().await, vec![Op::Get("Ghost".to_string())]);
        }
    }

    mod edit {
        use super::*;

        #[tokio::test]
        async fn test_same_name_overwrites_count_absolutely() {
            let store = MemoryStore::with_records([("Rice", 7)]);
            let pantry = service(&store).edit("Rice", "Rice", "2").await.unwrap();

            // Replacement, not 7 + 2
            assert_eq!(pantry, vec![PantryItem::new("Rice", 2)]);
        }

        #[tokio::test]
        async fn test_rename_to_fresh_name_moves_with_form_quantity() {
            let store = MemoryStore::with_records([("Apples", 7)]);
            let pantry = service(&store)
                .edit("Apples", "Pears", "3")
                .await
                .unwrap();

            // Absolute overwrite: 3, not 7 + 3
            assert_eq!(pantry, vec![PantryItem::new("Pears", 3)]);
            assert_eq!(store.count_of("Apples").await, None);
        }

        #[tokio::test]
        async fn test_rename_onto_existing_name_merges_counts() {
            let store = MemoryStore::with_records([("Apples", 7), ("Pears", 4)]);
            let pantry = service(&store)
                .edit("Apples", "Pears", "999")
                .await
                .unwrap();

            // Form quantity discarded in favor of 7 + 4
            assert_eq!(pantry, vec![PantryItem::new("Pears", 11)]);
            assert_eq!(store.count_of("Apples").await, None);
        }

        #[tokio::test]
        async fn test_merge_race_skips_write_when_old_record_gone() {
            // "Apples" disappeared between opening the form and submitting
            let store = MemoryStore::with_records([("Pears", 4)]);
            let pantry = service(&store)
                .edit("Apples", "Pears", "3")
                .await
                .unwrap();

            assert_eq!(pantry, vec![PantryItem::new("Pears", 4)]);
            let ops = store.ops().await;
            assert!(!ops.iter().any(|op| matches!(op, Op::Put(_, _))));
            assert!(!ops.iter().any(|op| matches!(op, Op::Delete(_))));
        }

        #[tokio::test]
        async fn test_merge_delete_failure_leaves_record_under_both_keys() {
            let store = MemoryStore::with_records([("Apples", 7), ("Pears", 4)]);
            store.fail_next("delete").await;

            let result = service(&store).edit("Apples", "Pears", "1").await;
            assert!(matches!(result, Err(PantryError::Store(_))));

            // The merge put landed and is not rolled back
            assert_eq!(store.count_of("Pears").await, Some(11));
            assert_eq!(store.count_of("Apples").await, Some(7));
        }

        #[tokio::test]
        async fn test_rejects_invalid_new_name_before_any_store_call() {
            let store = MemoryStore::with_records([("Apples", 7)]);
            let result = service(&store).edit("Apples", " ", "3").await;

            assert!(matches!(result, Err(PantryError::InvalidName)));
            assert!(store.ops().await.is_empty());
        }
    }

    #[tokio::test]
    async fn test_refresh_returns_full_snapshot() {
        let store = MemoryStore::with_records([("Beans", 2), ("Rice", 5)]);
        let pantry = service(&store).refresh().await.unwrap();

        assert_eq!(
            pantry,
            vec![PantryItem::new("Beans", 2), PantryItem::new("Rice", 5)]
        );
    }
}
