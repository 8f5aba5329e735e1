use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use katla_core::{CategoryId, ProductId};

// -------------------------
// Request DTOs
// -------------------------

/// Body of both create and update calls for a category.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateProductCategoryRequest {
    pub code: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Body of both create and update calls for a product.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateProductRequest {
    pub category_id: CategoryId,
    pub code: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub manufacturer_code: String,
    #[serde(default)]
    pub price: u64,
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductCategoryView {
    pub id: CategoryId,
    pub code: String,
    pub name: String,
    pub description: String,
    pub is_deleted: bool,
    pub last_updated: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductCategoryListItem {
    pub id: CategoryId,
    pub code: String,
    pub name: String,
    pub is_deleted: bool,
    pub product_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductView {
    pub id: ProductId,
    pub category_id: CategoryId,
    pub code: String,
    pub name: String,
    pub description: String,
    pub manufacturer_code: String,
    pub price: u64,
    pub is_deleted: bool,
    pub last_updated: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductListItem {
    pub id: ProductId,
    pub category_id: CategoryId,
    pub code: String,
    pub name: String,
    pub price: u64,
    pub is_deleted: bool,
}
