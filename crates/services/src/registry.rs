//! Wiring of every service over shared contexts.

use std::sync::Arc;

use katla_infra::{ProductCatalogueContext, ProductStoreHiveContext};

use crate::catalogue_management::CatalogueManagementService;
use crate::error::{ServiceError, ServiceResult};
use crate::hive_management::{HiveSectionService, HiveService};
use crate::product_management::{ProductCatalogueService, ProductCategoryService};
use crate::user::UserContext;

pub type SharedCatalogueContext = Arc<dyn ProductCatalogueContext>;
pub type SharedHiveContext = Arc<dyn ProductStoreHiveContext>;

/// All services for one caller.
pub struct Services {
    pub categories: ProductCategoryService<SharedCatalogueContext>,
    pub products: ProductCatalogueService<SharedCatalogueContext>,
    pub catalogue_management: CatalogueManagementService<SharedCatalogueContext>,
    pub hives: HiveService<SharedHiveContext>,
    pub sections: HiveSectionService<SharedHiveContext>,
}

#[derive(Default, Clone)]
pub struct ServicesBuilder {
    catalogue: Option<SharedCatalogueContext>,
    hives: Option<SharedHiveContext>,
    user: Option<Arc<dyn UserContext>>,
}

impl ServicesBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn catalogue(mut self, context: SharedCatalogueContext) -> Self {
        self.catalogue = Some(context);
        self
    }

    pub fn hives(mut self, context: SharedHiveContext) -> Self {
        self.hives = Some(context);
        self
    }

    pub fn user(mut self, user: Arc<dyn UserContext>) -> Self {
        self.user = Some(user);
        self
    }

    /// Fails with `InvalidArgument` naming the first missing collaborator.
    pub fn build(self) -> ServiceResult<Services> {
        let catalogue = self
            .catalogue
            .ok_or_else(|| ServiceError::invalid_argument("product catalogue context"))?;
        let hives = self
            .hives
            .ok_or_else(|| ServiceError::invalid_argument("store hive context"))?;
        let user = self
            .user
            .ok_or_else(|| ServiceError::invalid_argument("user context"))?;

        Ok(Services {
            categories: ProductCategoryService::new(catalogue.clone(), user.clone()),
            products: ProductCatalogueService::new(catalogue.clone(), user.clone()),
            catalogue_management: CatalogueManagementService::new(catalogue, user.clone()),
            hives: HiveService::new(hives.clone(), user.clone()),
            sections: HiveSectionService::new(hives, user),
        })
    }
}
