use std::sync::Arc;

use chrono::Utc;
use tracing::{info, instrument};

use katla_core::{Audit, CategoryId, Page, ProductId, SoftDelete};
use katla_infra::ProductCatalogueContext;
use katla_products::CatalogueProduct;

use super::dto::{ProductListItem, ProductView, UpdateProductRequest};
use super::mapping;
use crate::error::ServiceResult;
use crate::guard;
use crate::user::UserContext;

const WHAT: &str = "product";
const CATEGORY: &str = "product category";

/// Application service for catalogue products.
///
/// Every product must belong to an existing category; the category is checked
/// on create and whenever an update moves the product.
pub struct ProductCatalogueService<C: ProductCatalogueContext> {
    context: C,
    user: Arc<dyn UserContext>,
}

impl<C: ProductCatalogueContext> ProductCatalogueService<C> {
    pub fn new(context: C, user: Arc<dyn UserContext>) -> Self {
        Self { context, user }
    }

    pub async fn get_products(&self, page: Page) -> ServiceResult<Vec<ProductListItem>> {
        let products = self.context.products().list().await?;
        Ok(page.apply(products).iter().map(ProductListItem::from).collect())
    }

    pub async fn get_category_products(
        &self,
        category_id: CategoryId,
    ) -> ServiceResult<Vec<ProductListItem>> {
        guard::require(self.context.categories(), category_id, CATEGORY).await?;

        let products = self.context.products().list().await?;
        Ok(products
            .iter()
            .filter(|p| p.category_id == category_id)
            .map(ProductListItem::from)
            .collect())
    }

    pub async fn get_product(&self, id: ProductId) -> ServiceResult<ProductView> {
        let product = guard::require(self.context.products(), id, WHAT).await?;
        Ok(ProductView::from(&product))
    }

    #[instrument(
        skip(self, request),
        fields(code = %request.code, category_id = %request.category_id)
    )]
    pub async fn create_product(
        &self,
        request: &UpdateProductRequest,
    ) -> ServiceResult<ProductView> {
        let mut product = CatalogueProduct {
            audit: Audit::new(self.user.user_id(), Utc::now()),
            ..Default::default()
        };
        mapping::apply_product_request(&mut product, request);
        product.validate()?;

        guard::require(self.context.categories(), product.category_id, CATEGORY).await?;
        guard::ensure_code_free(self.context.products(), &product.code, None, WHAT).await?;

        let created = self.context.products().add(product).await?;
        info!(id = %created.id, "product_created");
        Ok(ProductView::from(&created))
    }

    #[instrument(skip(self, request), fields(code = %request.code))]
    pub async fn update_product(
        &self,
        id: ProductId,
        request: &UpdateProductRequest,
    ) -> ServiceResult<ProductView> {
        let mut product = guard::require(self.context.products(), id, WHAT).await?;
        let previous_category = product.category_id;
        mapping::apply_product_request(&mut product, request);
        product.validate()?;

        if product.category_id != previous_category {
            guard::require(self.context.categories(), product.category_id, CATEGORY).await?;
        }
        guard::ensure_code_free(self.context.products(), &product.code, Some(id), WHAT).await?;

        product.audit.touch(self.user.user_id(), Utc::now());
        let updated = guard::store(self.context.products(), product, WHAT).await?;
        info!("product_updated");
        Ok(ProductView::from(&updated))
    }

    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: ProductId) -> ServiceResult<()> {
        let product = guard::require(self.context.products(), id, WHAT).await?;
        guard::ensure_purgeable(&product, WHAT)?;

        self.context.products().remove(id).await?;
        info!("product_purged");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn set_status(&self, id: ProductId, is_deleted: bool) -> ServiceResult<ProductView> {
        let mut product = guard::require(self.context.products(), id, WHAT).await?;
        product.set_deleted(is_deleted);
        product.audit.touch(self.user.user_id(), Utc::now());

        let updated = guard::store(self.context.products(), product, WHAT).await?;
        Ok(ProductView::from(&updated))
    }
}
