//! Service layer: validated CRUD over the catalogue and store hive contexts.
//!
//! - Each service wraps one data context and returns DTOs, never records.
//! - Failures are reported through [`ServiceError`]; nothing here panics.
//! - [`ServicesBuilder`] wires every service and rejects missing collaborators.

pub mod catalogue_management;
pub mod error;
mod guard;
pub mod hive_management;
pub mod product_management;
pub mod registry;
pub mod user;

#[cfg(test)]
mod test_support;

pub use catalogue_management::CatalogueManagementService;
pub use error::{ServiceError, ServiceResult};
pub use hive_management::{HiveSectionService, HiveService};
pub use product_management::{ProductCatalogueService, ProductCategoryService};
pub use registry::{Services, ServicesBuilder, SharedCatalogueContext, SharedHiveContext};
pub use user::{FixedUserContext, UserContext};
