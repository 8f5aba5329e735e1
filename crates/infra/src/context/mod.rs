//! Data contexts: the typed collections a unit of work operates on.
//!
//! Services depend on these traits only; the in-memory implementations back
//! tests and the development server.

pub mod product_catalogue;
pub mod product_store_hive;

pub use product_catalogue::{InMemoryProductCatalogueContext, ProductCatalogueContext};
pub use product_store_hive::{InMemoryProductStoreHiveContext, ProductStoreHiveContext};
