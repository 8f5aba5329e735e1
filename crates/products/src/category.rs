use serde::{Deserialize, Serialize};

use katla_core::{rules, Audit, CategoryId, Coded, DomainResult, Entity, SoftDelete};

/// Persistence record: a product category.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductCategory {
    pub id: CategoryId,
    pub code: String,
    pub name: String,
    pub description: String,
    pub is_deleted: bool,
    pub audit: Audit,
}

impl ProductCategory {
    pub fn validate(&self) -> DomainResult<()> {
        rules::code(&self.code)?;
        rules::name(&self.name)?;
        rules::text("description", &self.description)
    }
}

impl Entity for ProductCategory {
    type Id = CategoryId;

    fn id(&self) -> CategoryId {
        self.id
    }

    fn assign_id(&mut self, id: CategoryId) {
        self.id = id;
    }
}

impl Coded for ProductCategory {
    fn code(&self) -> &str {
        &self.code
    }
}

impl SoftDelete for ProductCategory {
    fn is_deleted(&self) -> bool {
        self.is_deleted
    }

    fn set_deleted(&mut self, deleted: bool) {
        self.is_deleted = deleted;
    }
}
