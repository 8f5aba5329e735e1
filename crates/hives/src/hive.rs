use serde::{Deserialize, Serialize};

use katla_core::{rules, Audit, Coded, DomainResult, Entity, HiveId, SoftDelete};

/// Persistence record: a store hive (warehouse).
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreHive {
    pub id: HiveId,
    pub code: String,
    pub name: String,
    pub address: String,
    pub is_deleted: bool,
    pub audit: Audit,
}

impl StoreHive {
    pub fn validate(&self) -> DomainResult<()> {
        rules::code(&self.code)?;
        rules::name(&self.name)?;
        rules::text("address", &self.address)
    }
}

impl Entity for StoreHive {
    type Id = HiveId;

    fn id(&self) -> HiveId {
        self.id
    }

    fn assign_id(&mut self, id: HiveId) {
        self.id = id;
    }
}

impl Coded for StoreHive {
    fn code(&self) -> &str {
        &self.code
    }
}

impl SoftDelete for StoreHive {
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

    #[test]
    fn hive_with_long_address_is_invalid() {
        let hive = StoreHive {
            code: "H1".to_string(),
            address: "a".repeat(301),
            ..Default::default()
        };
        assert!(matches!(hive.validate(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn hive_with_code_and_name_is_valid() {
        let hive = StoreHive {
            code: "H1".to_string(),
            name: "North".to_string(),
            ..Default::default()
        };
        assert!(hive.validate().is_ok());
    }
}
