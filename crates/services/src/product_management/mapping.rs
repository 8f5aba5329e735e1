//! Field copies between catalogue records and DTOs.

use katla_products::{CatalogueProduct, ProductCategory};

use super::dto::{
    ProductCategoryListItem, ProductCategoryView, ProductListItem, ProductView,
    UpdateProductCategoryRequest, UpdateProductRequest,
};

impl From<&ProductCategory> for ProductCategoryView {
    fn from(c: &ProductCategory) -> Self {
        Self {
            id: c.id,
            code: c.code.clone(),
            name: c.name.clone(),
            description: c.description.clone(),
            is_deleted: c.is_deleted,
            last_updated: c.audit.last_updated,
        }
    }
}

impl From<&CatalogueProduct> for ProductView {
    fn from(p: &CatalogueProduct) -> Self {
        Self {
            id: p.id,
            category_id: p.category_id,
            code: p.code.clone(),
            name: p.name.clone(),
            description: p.description.clone(),
            manufacturer_code: p.manufacturer_code.clone(),
            price: p.price,
            is_deleted: p.is_deleted,
            last_updated: p.audit.last_updated,
        }
    }
}

impl From<&CatalogueProduct> for ProductListItem {
    fn from(p: &CatalogueProduct) -> Self {
        Self {
            id: p.id,
            category_id: p.category_id,
            code: p.code.clone(),
            name: p.name.clone(),
            price: p.price,
            is_deleted: p.is_deleted,
        }
    }
}

pub fn category_list_item(c: &ProductCategory, product_count: usize) -> ProductCategoryListItem {
    ProductCategoryListItem {
        id: c.id,
        code: c.code.clone(),
        name: c.name.clone(),
        is_deleted: c.is_deleted,
        product_count,
    }
}

/// Copy the mutable fields of a request onto a category. Id, status and audit are untouched.
pub fn apply_category_request(
    target: &mut ProductCategory,
    request: &UpdateProductCategoryRequest,
) {
    target.code = request.code.clone();
    target.name = request.name.clone();
    target.description = request.description.clone();
}

/// Copy the mutable fields of a request onto a product. Id, status and audit are untouched.
pub fn apply_product_request(target: &mut CatalogueProduct, request: &UpdateProductRequest) {
    target.category_id = request.category_id;
    target.code = request.code.clone();
    target.name = request.name.clone();
    target.description = request.description.clone();
    target.manufacturer_code = request.manufacturer_code.clone();
    target.price = request.price;
}
