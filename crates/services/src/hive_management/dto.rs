use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use katla_core::{HiveId, HiveSectionId};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateHiveRequest {
    pub code: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
}

/// Sections are created under a hive given by the caller, so the request carries no hive id.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateHiveSectionRequest {
    pub code: String,
    #[serde(default)]
    pub name: String,
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HiveView {
    pub id: HiveId,
    pub code: String,
    pub name: String,
    pub address: String,
    pub is_deleted: bool,
    pub last_updated: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HiveListItem {
    pub id: HiveId,
    pub code: String,
    pub name: String,
    pub is_deleted: bool,
    pub section_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HiveSectionView {
    pub id: HiveSectionId,
    pub store_hive_id: HiveId,
    pub code: String,
    pub name: String,
    pub is_deleted: bool,
    pub last_updated: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HiveSectionListItem {
    pub id: HiveSectionId,
    pub store_hive_id: HiveId,
    pub code: String,
    pub name: String,
    pub is_deleted: bool,
}
