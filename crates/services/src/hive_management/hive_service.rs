use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tracing::{info, instrument};

use katla_core::{Audit, HiveId, Page, SoftDelete};
use katla_hives::StoreHive;
use katla_infra::ProductStoreHiveContext;

use super::dto::{HiveListItem, HiveView, UpdateHiveRequest};
use super::mapping;
use crate::error::ServiceResult;
use crate::guard;
use crate::user::UserContext;

const WHAT: &str = "hive";

/// Application service for store hives.
pub struct HiveService<C: ProductStoreHiveContext> {
    context: C,
    user: Arc<dyn UserContext>,
}

impl<C: ProductStoreHiveContext> HiveService<C> {
    pub fn new(context: C, user: Arc<dyn UserContext>) -> Self {
        Self { context, user }
    }

    /// Hives in id order, each with its number of sections.
    pub async fn get_hives(&self, page: Page) -> ServiceResult<Vec<HiveListItem>> {
        let mut counts: HashMap<HiveId, usize> = HashMap::new();
        for section in self.context.sections().list().await? {
            *counts.entry(section.store_hive_id).or_default() += 1;
        }

        let hives = self.context.hives().list().await?;
        Ok(page
            .apply(hives)
            .iter()
            .map(|h| mapping::hive_list_item(h, counts.get(&h.id).copied().unwrap_or(0)))
            .collect())
    }

    pub async fn get_hive(&self, id: HiveId) -> ServiceResult<HiveView> {
        let hive = guard::require(self.context.hives(), id, WHAT).await?;
        Ok(HiveView::from(&hive))
    }

    #[instrument(skip(self, request), fields(code = %request.code))]
    pub async fn create_hive(&self, request: &UpdateHiveRequest) -> ServiceResult<HiveView> {
        let mut hive = StoreHive {
            audit: Audit::new(self.user.user_id(), Utc::now()),
            ..Default::default()
        };
        mapping::apply_hive_request(&mut hive, request);
        hive.validate()?;

        guard::ensure_code_free(self.context.hives(), &hive.code, None, WHAT).await?;

        let created = self.context.hives().add(hive).await?;
        info!(id = %created.id, "hive_created");
        Ok(HiveView::from(&created))
    }

    #[instrument(skip(self, request), fields(code = %request.code))]
    pub async fn update_hive(
        &self,
        id: HiveId,
        request: &UpdateHiveRequest,
    ) -> ServiceResult<HiveView> {
        let mut hive = guard::require(self.context.hives(), id, WHAT).await?;
        mapping::apply_hive_request(&mut hive, request);
        hive.validate()?;

        guard::ensure_code_free(self.context.hives(), &hive.code, Some(id), WHAT).await?;

        hive.audit.touch(self.user.user_id(), Utc::now());
        let updated = guard::store(self.context.hives(), hive, WHAT).await?;
        info!("hive_updated");
        Ok(HiveView::from(&updated))
    }

    /// Purge a soft-deleted hive together with its sections.
    #[instrument(skip(self))]
    pub async fn delete_hive(&self, id: HiveId) -> ServiceResult<()> {
        let hive = guard::require(self.context.hives(), id, WHAT).await?;
        guard::ensure_purgeable(&hive, WHAT)?;

        let sections = self.context.sections();
        let mut purged_sections = 0usize;
        for section in sections.list().await? {
            if section.store_hive_id == id && sections.remove(section.id).await? {
                purged_sections += 1;
            }
        }

        self.context.hives().remove(id).await?;
        info!(purged_sections, "hive_purged");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn set_status(&self, id: HiveId, is_deleted: bool) -> ServiceResult<HiveView> {
        let mut hive = guard::require(self.context.hives(), id, WHAT).await?;
        hive.set_deleted(is_deleted);
        hive.audit.touch(self.user.user_id(), Utc::now());

        let updated = guard::store(self.context.hives(), hive, WHAT).await?;
        Ok(HiveView::from(&updated))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ServiceError;
    use crate::test_support::{hive, hives, section, user};
    use katla_hives::StoreHiveSection;
    use katla_infra::InMemoryProductStoreHiveContext;

    fn service(
        records: Vec<StoreHive>,
        sections: Vec<StoreHiveSection>,
    ) -> HiveService<Arc<InMemoryProductStoreHiveContext>> {
        HiveService::new(hives(records, sections), user())
    }

    fn request(code: &str) -> UpdateHiveRequest {
        UpdateHiveRequest {
            code: code.to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn get_hives_on_empty_collection_is_empty() {
        let svc = service(vec![], vec![]);
        assert!(svc.get_hives(Page::all()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn get_hives_counts_sections() {
        let svc = service(
            vec![hive(1, "aa"), hive(2, "bb")],
            vec![section(1, 1, "s1"), section(2, 2, "s2"), section(3, 2, "s3")],
        );

        let list = svc.get_hives(Page::all()).await.unwrap();

        assert_eq!(list.len(), 2);
        assert_eq!(list[0].section_count, 1);
        assert_eq!(list[1].section_count, 2);
    }

    #[tokio::test]
    async fn get_hive_with_unknown_id_is_not_found() {
        let svc = service(vec![hive(1, "aa"), hive(2, "bb")], vec![]);
        let err = svc.get_hive(HiveId::new(0)).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn get_hive_returns_requested_hive() {
        let svc = service(vec![hive(1, "aa"), hive(2, "bb")], vec![]);
        assert_eq!(svc.get_hive(HiveId::new(1)).await.unwrap().id, HiveId::new(1));
    }

    #[tokio::test]
    async fn create_hive_with_taken_code_conflicts() {
        let svc = service(vec![hive(1, "aa"), hive(2, "bb")], vec![]);
        let err = svc.create_hive(&request("aa")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));
    }

    #[tokio::test]
    async fn create_hive_with_unique_code_is_stored() {
        let svc = service(vec![hive(1, "aa"), hive(2, "bb")], vec![]);

        let created = svc
            .create_hive(&UpdateHiveRequest {
                address: "1 Dock Road".to_string(),
                ..request("cc")
            })
            .await
            .unwrap();

        assert_eq!(created.code, "cc");
        assert_eq!(created.address, "1 Dock Road");
        assert_eq!(created.id, HiveId::new(3));
    }

    #[tokio::test]
    async fn update_hive_to_taken_code_conflicts() {
        let svc = service(vec![hive(1, "aa"), hive(2, "bb")], vec![]);
        let err = svc.update_hive(HiveId::new(1), &request("bb")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));
    }

    #[tokio::test]
    async fn update_hive_with_unknown_id_is_not_found() {
        let svc = service(vec![hive(1, "aa"), hive(2, "bb")], vec![]);
        let err = svc.update_hive(HiveId::new(3), &request("bb")).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn update_hive_with_free_code_succeeds() {
        let svc = service(vec![hive(1, "aa"), hive(2, "bb")], vec![]);
        let updated = svc.update_hive(HiveId::new(1), &request("cc")).await.unwrap();
        assert_eq!(updated.code, "cc");
    }

    #[tokio::test]
    async fn delete_hive_with_unknown_id_is_not_found() {
        let svc = service(vec![hive(1, "aa"), hive(2, "bb")], vec![]);
        let err = svc.delete_hive(HiveId::new(3)).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_active_hive_conflicts() {
        let svc = service(vec![hive(1, "aa"), hive(2, "bb")], vec![]);
        let err = svc.delete_hive(HiveId::new(1)).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));
    }

    #[tokio::test]
    async fn delete_soft_deleted_hive_purges_its_sections() {
        let mut deleted = hive(1, "aa");
        deleted.is_deleted = true;
        let ctx = hives(
            vec![deleted, hive(2, "bb")],
            vec![section(1, 1, "s1"), section(2, 2, "s2")],
        );
        let svc = HiveService::new(ctx.clone(), user());

        svc.delete_hive(HiveId::new(1)).await.unwrap();

        let remaining = svc.get_hives(Page::all()).await.unwrap();
        assert!(remaining.iter().all(|h| h.id != HiveId::new(1)));
        let sections = ctx.sections().list().await.unwrap();
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].store_hive_id, HiveId::new(2));
    }

    #[tokio::test]
    async fn set_status_with_unknown_id_is_not_found() {
        let svc = service(vec![hive(1, "aa"), hive(2, "bb")], vec![]);
        let err = svc.set_status(HiveId::new(3), false).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn set_status_restores_soft_deleted_hive() {
        let mut deleted = hive(1, "aa");
        deleted.is_deleted = true;
        let svc = service(vec![deleted, hive(2, "bb")], vec![]);

        svc.set_status(HiveId::new(1), false).await.unwrap();

        assert!(!svc.get_hive(HiveId::new(1)).await.unwrap().is_deleted);
    }
}
