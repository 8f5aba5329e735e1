//! Read-side facade over the product catalogue used by management screens.

use std::sync::Arc;

use katla_core::Page;
use katla_infra::ProductCatalogueContext;

use crate::error::ServiceResult;
use crate::product_management::{
    ProductCategoryListItem, ProductCategoryService, ProductCategoryView,
    UpdateProductCategoryRequest,
};
use crate::user::UserContext;

pub struct CatalogueManagementService<C: ProductCatalogueContext> {
    categories: ProductCategoryService<C>,
}

impl<C: ProductCatalogueContext> CatalogueManagementService<C> {
    pub fn new(context: C, user: Arc<dyn UserContext>) -> Self {
        Self {
            categories: ProductCategoryService::new(context, user),
        }
    }

    /// Every category, soft-deleted ones included.
    pub async fn product_categories(&self) -> ServiceResult<Vec<ProductCategoryListItem>> {
        self.categories.get_categories(Page::all()).await
    }

    pub async fn add_product_category(
        &self,
        request: &UpdateProductCategoryRequest,
    ) -> ServiceResult<ProductCategoryView> {
        self.categories.create_category(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ServiceError;
    use crate::test_support::{catalogue, category, user};

    #[tokio::test]
    async fn product_categories_on_empty_collection_is_empty() {
        let svc = CatalogueManagementService::new(catalogue(vec![], vec![]), user());
        assert!(svc.product_categories().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn product_categories_includes_soft_deleted() {
        let mut deleted = category(2, "bb");
        deleted.is_deleted = true;
        let ctx = catalogue(vec![category(1, "aa"), deleted], vec![]);
        let svc = CatalogueManagementService::new(ctx, user());

        let list = svc.product_categories().await.unwrap();

        assert_eq!(list.len(), 2);
        assert!(list.iter().any(|c| c.is_deleted));
    }

    #[tokio::test]
    async fn add_product_category_applies_create_rules() {
        let ctx = catalogue(vec![category(1, "aa")], vec![]);
        let svc = CatalogueManagementService::new(ctx, user());

        let dup = UpdateProductCategoryRequest {
            code: "aa".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            svc.add_product_category(&dup).await,
            Err(ServiceError::Conflict(_))
        ));

        let fresh = UpdateProductCategoryRequest {
            code: "bb".to_string(),
            name: "Bikes".to_string(),
            ..Default::default()
        };
        let created = svc.add_product_category(&fresh).await.unwrap();
        assert_eq!(created.name, "Bikes");
        assert_eq!(svc.product_categories().await.unwrap().len(), 2);
    }
}
