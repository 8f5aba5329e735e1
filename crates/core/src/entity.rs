//! Entity traits: identity, unique codes and the soft-delete flag.

use crate::id::RecordId;

/// Entity marker + minimal interface.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Strongly-typed entity identifier.
    type Id: RecordId;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;

    /// Set the identifier; used by stores when a record is first added.
    fn assign_id(&mut self, id: Self::Id);
}

/// Entities carrying a business code that must be unique within their collection.
pub trait Coded {
    fn code(&self) -> &str;
}

/// Entities that support the active → soft-deleted → purged lifecycle.
pub trait SoftDelete {
    fn is_deleted(&self) -> bool;

    fn set_deleted(&mut self, deleted: bool);
}
