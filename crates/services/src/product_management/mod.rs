//! Product categories and the catalogue products filed under them.

pub mod catalogue_service;
pub mod category_service;
pub mod dto;
pub mod mapping;

pub use catalogue_service::ProductCatalogueService;
pub use category_service::ProductCategoryService;
pub use dto::{
    ProductCategoryListItem, ProductCategoryView, ProductListItem, ProductView,
    UpdateProductCategoryRequest, UpdateProductRequest,
};
