//! Record builders and in-memory contexts for service tests.

use std::sync::Arc;

use katla_core::{CategoryId, HiveId, HiveSectionId, ProductId, UserId};
use katla_hives::{StoreHive, StoreHiveSection};
use katla_infra::{InMemoryProductCatalogueContext, InMemoryProductStoreHiveContext};
use katla_products::{CatalogueProduct, ProductCategory};

use crate::user::{FixedUserContext, UserContext};

pub fn user() -> Arc<dyn UserContext> {
    Arc::new(FixedUserContext(UserId::new(1)))
}

pub fn category(id: i32, code: &str) -> ProductCategory {
    ProductCategory {
        id: CategoryId::new(id),
        code: code.to_string(),
        ..Default::default()
    }
}

pub fn product(id: i32, category_id: i32, code: &str) -> CatalogueProduct {
    CatalogueProduct {
        id: ProductId::new(id),
        category_id: CategoryId::new(category_id),
        code: code.to_string(),
        ..Default::default()
    }
}

pub fn hive(id: i32, code: &str) -> StoreHive {
    StoreHive {
        id: HiveId::new(id),
        code: code.to_string(),
        ..Default::default()
    }
}

pub fn section(id: i32, hive_id: i32, code: &str) -> StoreHiveSection {
    StoreHiveSection {
        id: HiveSectionId::new(id),
        store_hive_id: HiveId::new(hive_id),
        code: code.to_string(),
        ..Default::default()
    }
}

pub fn catalogue(
    categories: Vec<ProductCategory>,
    products: Vec<CatalogueProduct>,
) -> Arc<InMemoryProductCatalogueContext> {
    Arc::new(InMemoryProductCatalogueContext::with_records(categories, products))
}

pub fn hives(
    hives: Vec<StoreHive>,
    sections: Vec<StoreHiveSection>,
) -> Arc<InMemoryProductStoreHiveContext> {
    Arc::new(InMemoryProductStoreHiveContext::with_records(hives, sections))
}
