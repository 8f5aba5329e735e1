use serde::{Deserialize, Serialize};

use katla_core::{rules, Audit, CategoryId, Coded, DomainResult, Entity, ProductId, SoftDelete};

/// Persistence record: a product listed in the catalogue.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogueProduct {
    pub id: ProductId,
    pub category_id: CategoryId,
    pub code: String,
    pub name: String,
    pub description: String,
    pub manufacturer_code: String,
    /// Price in smallest currency unit (e.g., cents).
    pub price: u64,
    pub is_deleted: bool,
    pub audit: Audit,
}

impl CatalogueProduct {
    pub fn validate(&self) -> DomainResult<()> {
        rules::code(&self.code)?;
        rules::name(&self.name)?;
        rules::text("description", &self.description)?;
        rules::max_len("manufacturer_code", &self.manufacturer_code, rules::NAME_MAX_LEN)
    }
}

impl Entity for CatalogueProduct {
    type Id = ProductId;

    fn id(&self) -> ProductId {
        self.id
    }

    fn assign_id(&mut self, id: ProductId) {
        self.id = id;
    }
}

impl Coded for CatalogueProduct {
    fn code(&self) -> &str {
        &self.code
    }
}

impl SoftDelete for CatalogueProduct {
    fn is_deleted(&self) -> bool {
        self.is_deleted
    }

    fn set_deleted(&mut self, deleted: bool) {
        self.is_deleted = deleted;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use katla_core::DomainError;
    use proptest::prelude::*;

    fn product(code: &str, name: &str) -> CatalogueProduct {
        CatalogueProduct {
            code: code.to_string(),
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn product_with_oversized_name_is_invalid() {
        let err = product("P1", &"n".repeat(61)).validate().unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn product_with_oversized_manufacturer_code_is_invalid() {
        let mut p = product("P1", "Ball");
        p.manufacturer_code = "m".repeat(61);
        assert!(p.validate().is_err());
    }

    proptest! {
        /// Property: any non-blank code up to five characters with a bounded name validates.
        #[test]
        fn bounded_fields_validate(
            code in "[A-Za-z0-9]{1,5}",
            name in "[A-Za-z ]{0,60}"
        ) {
            prop_assert!(product(&code, &name).validate().is_ok());
        }
    }
}
