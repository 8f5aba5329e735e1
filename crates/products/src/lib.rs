//! Product catalogue domain module.
//!
//! Persistence records for product categories and catalogue products, with the
//! field rules they must satisfy before being written. No IO lives here.

pub mod category;
pub mod product;

pub use category::ProductCategory;
pub use product::CatalogueProduct;
