//! Store hives and their sections.

pub mod dto;
pub mod hive_service;
pub mod mapping;
pub mod section_service;

pub use dto::{
    HiveListItem, HiveSectionListItem, HiveSectionView, HiveView, UpdateHiveRequest,
    UpdateHiveSectionRequest,
};
pub use hive_service::HiveService;
pub use section_service::HiveSectionService;
