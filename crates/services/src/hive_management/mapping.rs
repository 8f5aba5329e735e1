//! Field copies between hive records and DTOs.

use katla_hives::{StoreHive, StoreHiveSection};

use super::dto::{
    HiveListItem, HiveSectionListItem, HiveSectionView, HiveView, UpdateHiveRequest,
    UpdateHiveSectionRequest,
};

impl From<&StoreHive> for HiveView {
    fn from(h: &StoreHive) -> Self {
        Self {
            id: h.id,
            code: h.code.clone(),
            name: h.name.clone(),
            address: h.address.clone(),
            is_deleted: h.is_deleted,
            last_updated: h.audit.last_updated,
        }
    }
}

impl From<&StoreHiveSection> for HiveSectionView {
    fn from(s: &StoreHiveSection) -> Self {
        Self {
            id: s.id,
            store_hive_id: s.store_hive_id,
            code: s.code.clone(),
            name: s.name.clone(),
            is_deleted: s.is_deleted,
            last_updated: s.audit.last_updated,
        }
    }
}

impl From<&StoreHiveSection> for HiveSectionListItem {
    fn from(s: &StoreHiveSection) -> Self {
        Self {
            id: s.id,
            store_hive_id: s.store_hive_id,
            code: s.code.clone(),
            name: s.name.clone(),
            is_deleted: s.is_deleted,
        }
    }
}

pub fn hive_list_item(h: &StoreHive, section_count: usize) -> HiveListItem {
    HiveListItem {
        id: h.id,
        code: h.code.clone(),
        name: h.name.clone(),
        is_deleted: h.is_deleted,
        section_count,
    }
}

pub fn apply_hive_request(target: &mut StoreHive, request: &UpdateHiveRequest) {
    target.code = request.code.clone();
    target.name = request.name.clone();
    target.address = request.address.clone();
}

pub fn apply_section_request(target: &mut StoreHiveSection, request: &UpdateHiveSectionRequest) {
    target.code = request.code.clone();
    target.name = request.name.clone();
}
