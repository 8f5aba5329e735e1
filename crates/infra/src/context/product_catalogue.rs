use std::sync::Arc;

use katla_products::{CatalogueProduct, ProductCategory};

use crate::store::{EntitySet, InMemoryEntitySet};

/// Categories and the products filed under them.
pub trait ProductCatalogueContext: Send + Sync {
    fn categories(&self) -> &dyn EntitySet<ProductCategory>;

    fn products(&self) -> &dyn EntitySet<CatalogueProduct>;
}

impl<C> ProductCatalogueContext for Arc<C>
where
    C: ProductCatalogueContext + ?Sized,
{
    fn categories(&self) -> &dyn EntitySet<ProductCategory> {
        (**self).categories()
    }

    fn products(&self) -> &dyn EntitySet<CatalogueProduct> {
        (**self).products()
    }
}

#[derive(Debug, Default)]
pub struct InMemoryProductCatalogueContext {
    categories: InMemoryEntitySet<ProductCategory>,
    products: InMemoryEntitySet<CatalogueProduct>,
}

impl InMemoryProductCatalogueContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(
        categories: impl IntoIterator<Item = ProductCategory>,
        products: impl IntoIterator<Item = CatalogueProduct>,
    ) -> Self {
        Self {
            categories: InMemoryEntitySet::from_records(categories),
            products: InMemoryEntitySet::from_records(products),
        }
    }
}

impl ProductCatalogueContext for InMemoryProductCatalogueContext {
    fn categories(&self) -> &dyn EntitySet<ProductCategory> {
        &self.categories
    }

    fn products(&self) -> &dyn EntitySet<CatalogueProduct> {
        &self.products
    }
}
