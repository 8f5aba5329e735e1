use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;

use katla_core::{Entity, RecordId};

use super::entity_set::{EntitySet, StoreError, StoreResult};

/// In-memory entity set for tests/dev.
///
/// Records live in a `BTreeMap` so listing is naturally ordered by id. New ids
/// are `max(existing) + 1`, starting at 1.
#[derive(Debug)]
pub struct InMemoryEntitySet<E: Entity> {
    inner: RwLock<BTreeMap<E::Id, E>>,
}

impl<E: Entity> InMemoryEntitySet<E> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(BTreeMap::new()),
        }
    }

    /// Build a set from existing records, keeping their ids.
    pub fn from_records(records: impl IntoIterator<Item = E>) -> Self {
        let map = records.into_iter().map(|r| (r.id(), r)).collect();
        Self {
            inner: RwLock::new(map),
        }
    }

    fn next_id(map: &BTreeMap<E::Id, E>) -> StoreResult<E::Id> {
        let last = map.keys().next_back().map(|id| id.raw()).unwrap_or(0);
        last.max(0)
            .checked_add(1)
            .map(E::Id::from_raw)
            .ok_or(StoreError::IdExhausted)
    }
}

impl<E: Entity> Default for InMemoryEntitySet<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<E: Entity> EntitySet<E> for InMemoryEntitySet<E> {
    async fn list(&self) -> StoreResult<Vec<E>> {
        let map = self
            .inner
            .read()
            .map_err(|_| StoreError::LockPoisoned("entity set"))?;
        Ok(map.values().cloned().collect())
    }

    async fn find(&self, id: E::Id) -> StoreResult<Option<E>> {
        let map = self
            .inner
            .read()
            .map_err(|_| StoreError::LockPoisoned("entity set"))?;
        Ok(map.get(&id).cloned())
    }

    async fn add(&self, mut record: E) -> StoreResult<E> {
        let mut map = self
            .inner
            .write()
            .map_err(|_| StoreError::LockPoisoned("entity set"))?;
        let id = Self::next_id(&map)?;
        record.assign_id(id);
        map.insert(id, record.clone());
        Ok(record)
    }

    async fn update(&self, record: E) -> StoreResult<bool> {
        let mut map = self
            .inner
            .write()
            .map_err(|_| StoreError::LockPoisoned("entity set"))?;
        match map.get_mut(&record.id()) {
            Some(slot) => {
                *slot = record;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn remove(&self, id: E::Id) -> StoreResult<bool> {
        let mut map = self
            .inner
            .write()
            .map_err(|_| StoreError::LockPoisoned("entity set"))?;
        Ok(map.remove(&id).is_some())
    }
}
