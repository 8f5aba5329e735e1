use serde::{Deserialize, Serialize};

use katla_core::{rules, Audit, Coded, DomainResult, Entity, HiveId, HiveSectionId, SoftDelete};

/// Persistence record: a section inside a store hive.
///
/// `store_hive_id` must reference an existing hive; the service layer checks it
/// on create.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreHiveSection {
    pub id: HiveSectionId,
    pub store_hive_id: HiveId,
    pub code: String,
    pub name: String,
    pub is_deleted: bool,
    pub audit: Audit,
}

impl StoreHiveSection {
    pub fn validate(&self) -> DomainResult<()> {
        rules::code(&self.code)?;
        rules::name(&self.name)
    }
}

impl Entity for StoreHiveSection {
    type Id = HiveSectionId;

    fn id(&self) -> HiveSectionId {
        self.id
    }

    fn assign_id(&mut self, id: HiveSectionId) {
        self.id = id;
    }
}

impl Coded for StoreHiveSection {
    fn code(&self) -> &str {
        &self.code
    }
}

impl SoftDelete for StoreHiveSection {
    fn is_deleted(&self) -> bool {
        self.is_deleted
    }

    fn set_deleted(&mut self, deleted: bool) {
        self.is_deleted = deleted;
    }
}
