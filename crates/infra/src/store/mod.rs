//! Id-keyed record storage abstractions.

pub mod entity_set;
pub mod in_memory;

pub use entity_set::{EntitySet, StoreError, StoreResult};
pub use in_memory::InMemoryEntitySet;
