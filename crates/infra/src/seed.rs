//! Demo data for the development server.

use chrono::{DateTime, Utc};
use tracing::info;

use katla_core::{Audit, CategoryId, HiveId, UserId};
use katla_hives::{StoreHive, StoreHiveSection};
use katla_products::{CatalogueProduct, ProductCategory};

use crate::context::{ProductCatalogueContext, ProductStoreHiveContext};
use crate::store::StoreResult;

/// Populate empty contexts with a small, recognisable data set.
///
/// Does nothing for a context that already holds records.
pub async fn seed_demo(
    catalogue: &dyn ProductCatalogueContext,
    hives: &dyn ProductStoreHiveContext,
    user: UserId,
    at: DateTime<Utc>,
) -> StoreResult<()> {
    let audit = Audit::new(user, at);

    if catalogue.categories().list().await?.is_empty() {
        let footwear = catalogue
            .categories()
            .add(category("FW", "Footwear", &audit))
            .await?;
        let balls = catalogue
            .categories()
            .add(category("BL", "Balls", &audit))
            .await?;

        catalogue
            .products()
            .add(product(footwear.id, "RUN01", "Trail runner", 8999, &audit))
            .await?;
        catalogue
            .products()
            .add(product(balls.id, "FB01", "Match football", 2499, &audit))
            .await?;
        info!("seeded demo product catalogue");
    }

    if hives.hives().list().await?.is_empty() {
        let north = hives.hives().add(hive("NRTH", "North hive", &audit)).await?;
        hives.hives().add(hive("STH", "South hive", &audit)).await?;

        for code in ["N-A", "N-B"] {
            hives
                .sections()
                .add(section(north.id, code, &audit))
                .await?;
        }
        info!("seeded demo store hives");
    }

    Ok(())
}

fn category(code: &str, name: &str, audit: &Audit) -> ProductCategory {
    ProductCategory {
        code: code.to_string(),
        name: name.to_string(),
        audit: audit.clone(),
        ..Default::default()
    }
}

fn product(
    category_id: CategoryId,
    code: &str,
    name: &str,
    price: u64,
    audit: &Audit,
) -> CatalogueProduct {
    CatalogueProduct {
        category_id,
        code: code.to_string(),
        name: name.to_string(),
        price,
        audit: audit.clone(),
        ..Default::default()
    }
}

fn hive(code: &str, name: &str, audit: &Audit) -> StoreHive {
    StoreHive {
        code: code.to_string(),
        name: name.to_string(),
        audit: audit.clone(),
        ..Default::default()
    }
}

fn section(hive_id: HiveId, code: &str, audit: &Audit) -> StoreHiveSection {
    StoreHiveSection {
        store_hive_id: hive_id,
        code: code.to_string(),
        name: format!("Section {code}"),
        audit: audit.clone(),
        ..Default::default()
    }
}
