use std::sync::Arc;

use chrono::Utc;
use tracing::{info, instrument};

use katla_core::{Audit, HiveId, HiveSectionId, Page, SoftDelete};
use katla_hives::StoreHiveSection;
use katla_infra::ProductStoreHiveContext;

use super::dto::{HiveSectionListItem, HiveSectionView, UpdateHiveSectionRequest};
use super::mapping;
use crate::error::ServiceResult;
use crate::guard;
use crate::user::UserContext;

const WHAT: &str = "hive section";

/// Application service for hive sections.
///
/// Section codes are unique across all hives, not per hive.
pub struct HiveSectionService<C: ProductStoreHiveContext> {
    context: C,
    user: Arc<dyn UserContext>,
}

impl<C: ProductStoreHiveContext> HiveSectionService<C> {
    pub fn new(context: C, user: Arc<dyn UserContext>) -> Self {
        Self { context, user }
    }

    pub async fn get_hive_sections(&self, page: Page) -> ServiceResult<Vec<HiveSectionListItem>> {
        let sections = self.context.sections().list().await?;
        Ok(page.apply(sections).iter().map(HiveSectionListItem::from).collect())
    }

    /// Sections of one hive. An unknown hive simply has no sections.
    pub async fn get_sections_of_hive(
        &self,
        hive_id: HiveId,
    ) -> ServiceResult<Vec<HiveSectionListItem>> {
        let sections = self.context.sections().list().await?;
        Ok(sections
            .iter()
            .filter(|s| s.store_hive_id == hive_id)
            .map(HiveSectionListItem::from)
            .collect())
    }

    pub async fn get_hive_section(&self, id: HiveSectionId) -> ServiceResult<HiveSectionView> {
        let section = guard::require(self.context.sections(), id, WHAT).await?;
        Ok(HiveSectionView::from(&section))
    }

    #[instrument(skip(self, request), fields(code = %request.code))]
    pub async fn create_hive_section(
        &self,
        hive_id: HiveId,
        request: &UpdateHiveSectionRequest,
    ) -> ServiceResult<HiveSectionView> {
        let mut section = StoreHiveSection {
            store_hive_id: hive_id,
            audit: Audit::new(self.user.user_id(), Utc::now()),
            ..Default::default()
        };
        mapping::apply_section_request(&mut section, request);
        section.validate()?;

        guard::require(self.context.hives(), hive_id, "hive").await?;
        guard::ensure_code_free(self.context.sections(), &section.code, None, WHAT).await?;

        let created = self.context.sections().add(section).await?;
        info!(id = %created.id, "hive_section_created");
        Ok(HiveSectionView::from(&created))
    }

    #[instrument(skip(self, request), fields(code = %request.code))]
    pub async fn update_hive_section(
        &self,
        id: HiveSectionId,
        request: &UpdateHiveSectionRequest,
    ) -> ServiceResult<HiveSectionView> {
        let mut section = guard::require(self.context.sections(), id, WHAT).await?;
        mapping::apply_section_request(&mut section, request);
        section.validate()?;

        guard::ensure_code_free(self.context.sections(), &section.code, Some(id), WHAT).await?;

        section.audit.touch(self.user.user_id(), Utc::now());
        let updated = guard::store(self.context.sections(), section, WHAT).await?;
        info!("hive_section_updated");
        Ok(HiveSectionView::from(&updated))
    }

    #[instrument(skip(self))]
    pub async fn delete_hive_section(&self, id: HiveSectionId) -> ServiceResult<()> {
        let section = guard::require(self.context.sections(), id, WHAT).await?;
        guard::ensure_purgeable(&section, WHAT)?;

        self.context.sections().remove(id).await?;
        info!("hive_section_purged");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn set_status(
        &self,
        id: HiveSectionId,
        is_deleted: bool,
    ) -> ServiceResult<HiveSectionView> {
        let mut section = guard::require(self.context.sections(), id, WHAT).await?;
        section.set_deleted(is_deleted);
        section.audit.touch(self.user.user_id(), Utc::now());

        let updated = guard::store(self.context.sections(), section, WHAT).await?;
        Ok(HiveSectionView::from(&updated))
    }
}
