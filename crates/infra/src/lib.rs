//! Infrastructure layer: entity storage and the data contexts built on it.

pub mod context;
pub mod seed;
pub mod store;

pub use context::{
    InMemoryProductCatalogueContext, InMemoryProductStoreHiveContext, ProductCatalogueContext,
    ProductStoreHiveContext,
};
pub use store::{EntitySet, InMemoryEntitySet, StoreError, StoreResult};
