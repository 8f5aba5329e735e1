use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use katla_core::Entity;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("lock poisoned: {0}")]
    LockPoisoned(&'static str),

    #[error("identifier space exhausted")]
    IdExhausted,
}

/// Typed collection of records keyed by id.
///
/// This is the seam between services and whatever actually holds the data.
/// Implementations assign ids on `add` and return records in ascending id order
/// from `list`.
#[async_trait]
pub trait EntitySet<E: Entity>: Send + Sync {
    async fn list(&self) -> StoreResult<Vec<E>>;

    async fn find(&self, id: E::Id) -> StoreResult<Option<E>>;

    /// Insert a new record, assigning it the next free id. Returns the stored record.
    async fn add(&self, record: E) -> StoreResult<E>;

    /// Overwrite an existing record. Returns `false` if no record has that id.
    async fn update(&self, record: E) -> StoreResult<bool>;

    /// Remove a record. Returns `false` if no record has that id.
    async fn remove(&self, id: E::Id) -> StoreResult<bool>;
}

#[async_trait]
impl<E, S> EntitySet<E> for Arc<S>
where
    E: Entity,
    S: EntitySet<E> + ?Sized,
{
    async fn list(&self) -> StoreResult<Vec<E>> {
        (**self).list().await
    }

    async fn find(&self, id: E::Id) -> StoreResult<Option<E>> {
        (**self).find(id).await
    }

    async fn add(&self, record: E) -> StoreResult<E> {
        (**self).add(record).await
    }

    async fn update(&self, record: E) -> StoreResult<bool> {
        (**self).update(record).await
    }

    async fn remove(&self, id: E::Id) -> StoreResult<bool> {
        (**self).remove(id).await
    }
}
