//! `katla-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! identifiers, entity traits, audit stamps, paging and field rules shared by
//! the catalogue and store hive modules.

pub mod audit;
pub mod entity;
pub mod error;
pub mod id;
pub mod page;
pub mod rules;

pub use audit::Audit;
pub use entity::{Coded, Entity, SoftDelete};
pub use error::{DomainError, DomainResult};
pub use id::{CategoryId, HiveId, HiveSectionId, ProductId, RecordId, UserId};
pub use page::Page;
