use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tracing::{info, instrument};

use katla_core::{Audit, CategoryId, Page, SoftDelete};
use katla_infra::ProductCatalogueContext;
use katla_products::ProductCategory;

use super::dto::{ProductCategoryListItem, ProductCategoryView, UpdateProductCategoryRequest};
use super::mapping;
use crate::error::ServiceResult;
use crate::guard;
use crate::user::UserContext;

const WHAT: &str = "product category";

/// Application service for product categories.
pub struct ProductCategoryService<C: ProductCatalogueContext> {
    context: C,
    user: Arc<dyn UserContext>,
}

impl<C: ProductCatalogueContext> ProductCategoryService<C> {
    pub fn new(context: C, user: Arc<dyn UserContext>) -> Self {
        Self { context, user }
    }

    /// Categories in id order, each with the number of products filed under it.
    pub async fn get_categories(&self, page: Page) -> ServiceResult<Vec<ProductCategoryListItem>> {
        let mut counts: HashMap<CategoryId, usize> = HashMap::new();
        for product in self.context.products().list().await? {
            *counts.entry(product.category_id).or_default() += 1;
        }

        let categories = self.context.categories().list().await?;
        Ok(page
            .apply(categories)
            .iter()
            .map(|c| mapping::category_list_item(c, counts.get(&c.id).copied().unwrap_or(0)))
            .collect())
    }

    pub async fn get_category(&self, id: CategoryId) -> ServiceResult<ProductCategoryView> {
        let category = guard::require(self.context.categories(), id, WHAT).await?;
        Ok(ProductCategoryView::from(&category))
    }

    #[instrument(skip(self, request), fields(code = %request.code))]
    pub async fn create_category(
        &self,
        request: &UpdateProductCategoryRequest,
    ) -> ServiceResult<ProductCategoryView> {
        let mut category = ProductCategory {
            audit: Audit::new(self.user.user_id(), Utc::now()),
            ..Default::default()
        };
        mapping::apply_category_request(&mut category, request);
        category.validate()?;

        guard::ensure_code_free(self.context.categories(), &category.code, None, WHAT).await?;

        let created = self.context.categories().add(category).await?;
        info!(id = %created.id, "product_category_created");
        Ok(ProductCategoryView::from(&created))
    }

    #[instrument(skip(self, request), fields(code = %request.code))]
    pub async fn update_category(
        &self,
        id: CategoryId,
        request: &UpdateProductCategoryRequest,
    ) -> ServiceResult<ProductCategoryView> {
        let mut category = guard::require(self.context.categories(), id, WHAT).await?;
        mapping::apply_category_request(&mut category, request);
        category.validate()?;

        guard::ensure_code_free(self.context.categories(), &category.code, Some(id), WHAT).await?;

        category.audit.touch(self.user.user_id(), Utc::now());
        let updated = guard::store(self.context.categories(), category, WHAT).await?;
        info!("product_category_updated");
        Ok(ProductCategoryView::from(&updated))
    }

    /// Purge a soft-deleted category together with its products.
    #[instrument(skip(self))]
    pub async fn delete_category(&self, id: CategoryId) -> ServiceResult<()> {
        let category = guard::require(self.context.categories(), id, WHAT).await?;
        guard::ensure_purgeable(&category, WHAT)?;

        let products = self.context.products();
        let mut purged_products = 0usize;
        for product in products.list().await? {
            if product.category_id == id && products.remove(product.id).await? {
                purged_products += 1;
            }
        }

        self.context.categories().remove(id).await?;
        info!(purged_products, "product_category_purged");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn set_status(
        &self,
        id: CategoryId,
        is_deleted: bool,
    ) -> ServiceResult<ProductCategoryView> {
        let mut category = guard::require(self.context.categories(), id, WHAT).await?;
        category.set_deleted(is_deleted);
        category.audit.touch(self.user.user_id(), Utc::now());

        let updated = guard::store(self.context.categories(), category, WHAT).await?;
        Ok(ProductCategoryView::from(&updated))
    }
}
