//! Store hive domain module.
//!
//! A hive is a storage location; sections partition a hive. This crate holds
//! the persistence records and their field rules (no IO).

pub mod hive;
pub mod section;

pub use hive::StoreHive;
pub use section::StoreHiveSection;
