//! In-memory decision repository.
//!
//! Decisions live for the lifetime of the process. The store holds at most
//! `capacity` decisions; saving past that evicts the oldest one first.

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use tokio::sync::RwLock;

use crate::domain::foundation::{DecisionId, DomainError};
use crate::domain::ranking::DecisionRecord;
use crate::ports::DecisionRepository;

/// Capacity used by [`InMemoryDecisionRepository::new`].
pub const DEFAULT_MAX_DECISIONS: usize = 10_000;

#[derive(Default)]
struct Store {
    records: HashMap<DecisionId, DecisionRecord>,
    /// Ids in first-save order.
    order: VecDeque<DecisionId>,
}

/// Bounded `DecisionRepository` backed by a `HashMap`.
pub struct InMemoryDecisionRepository {
    store: RwLock<Store>,
    capacity: usize,
}

impl Default for InMemoryDecisionRepository {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_MAX_DECISIONS)
    }
}

impl InMemoryDecisionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding at most `capacity` decisions (minimum 1).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            store: RwLock::new(Store::default()),
            capacity: capacity.max(1),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[async_trait]
impl DecisionRepository for InMemoryDecisionRepository {
    async fn save(&self, record: &DecisionRecord) -> Result<(), DomainError> {
        let mut store = self.store.write().await;
        if store.records.insert(record.id, record.clone()).is_none() {
            store.order.push_back(record.id);
        }

        while store.records.len() > self.capacity {
            let Some(oldest) = store.order.pop_front() else {
                break;
            };
            store.records.remove(&oldest);
            tracing::debug!(decision_id = %oldest, "Evicted oldest decision");
        }
        Ok(())
    }

    async fn find_by_id(&self, id: &DecisionId) -> Result<Option<DecisionRecord>, DomainError> {
        Ok(self.store.read().await.records.get(id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ranking::{Alternative, Criterion, DecisionEngine};

    fn record() -> DecisionRecord {
        let result = DecisionEngine::default()
            .decide(
                vec![Criterion::benefit("reliability").unwrap()],
                vec![Alternative::new("dhl", "DHL", vec![0.95])],
                &[],
            )
            .unwrap();
        DecisionRecord::new(result, None)
    }

    #[tokio::test]
    async fn save_then_find_returns_record() {
        let repo = InMemoryDecisionRepository::new();
        let record = record();

        repo.save(&record).await.unwrap();

        let found = repo.find_by_id(&record.id).await.unwrap();
        assert_eq!(found, Some(record));
    }

    #[tokio::test]
    async fn find_unknown_returns_none() {
        let repo = InMemoryDecisionRepository::new();
        let found = repo.find_by_id(&DecisionId::new()).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn save_replaces_existing_record() {
        let repo = InMemoryDecisionRepository::with_capacity(1);
        let mut record = record();
        repo.save(&record).await.unwrap();

        record.summary = "updated".to_string();
        repo.save(&record).await.unwrap();

        let found = repo.find_by_id(&record.id).await.unwrap().unwrap();
        assert_eq!(found.summary, "updated");
    }

    #[tokio::test]
    async fn oldest_decision_is_evicted_at_capacity() {
        let repo = InMemoryDecisionRepository::with_capacity(2);
        let (first, second, third) = (record(), record(), record());

        repo.save(&first).await.unwrap();
        repo.save(&second).await.unwrap();
        repo.save(&third).await.unwrap();

        assert!(repo.find_by_id(&first.id).await.unwrap().is_none());
        assert!(repo.find_by_id(&second.id).await.unwrap().is_some());
        assert!(repo.find_by_id(&third.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn resaving_does_not_refresh_eviction_order() {
        let repo = InMemoryDecisionRepository::with_capacity(2);
        let (first, second, third) = (record(), record(), record());

        repo.save(&first).await.unwrap();
        repo.save(&second).await.unwrap();
        repo.save(&first).await.unwrap();
        repo.save(&third).await.unwrap();

        assert!(repo.find_by_id(&first.id).await.unwrap().is_none());
        assert!(repo.find_by_id(&second.id).await.unwrap().is_some());
    }

    #[test]
    fn zero_capacity_is_raised_to_one() {
        assert_eq!(InMemoryDecisionRepository::with_capacity(0).capacity(), 1);
    }
}
