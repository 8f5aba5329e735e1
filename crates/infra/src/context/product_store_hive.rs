use std::sync::Arc;

use katla_hives::{StoreHive, StoreHiveSection};

use crate::store::{EntitySet, InMemoryEntitySet};

/// Store hives and their sections.
pub trait ProductStoreHiveContext: Send + Sync {
    fn hives(&self) -> &dyn EntitySet<StoreHive>;

    fn sections(&self) -> &dyn EntitySet<StoreHiveSection>;
}

impl<C> ProductStoreHiveContext for Arc<C>
where
    C: ProductStoreHiveContext + ?Sized,
{
    fn hives(&self) -> &dyn EntitySet<StoreHive> {
        (**self).hives()
    }

    fn sections(&self) -> &dyn EntitySet<StoreHiveSection> {
        (**self).sections()
    }
}

#[derive(Debug, Default)]
pub struct InMemoryProductStoreHiveContext {
    hives: InMemoryEntitySet<StoreHive>,
    sections: InMemoryEntitySet<StoreHiveSection>,
}

impl InMemoryProductStoreHiveContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(
        hives: impl IntoIterator<Item = StoreHive>,
        sections: impl IntoIterator<Item = StoreHiveSection>,
    ) -> Self {
        Self {
            hives: InMemoryEntitySet::from_records(hives),
            sections: InMemoryEntitySet::from_records(sections),
        }
    }
}

impl ProductStoreHiveContext for InMemoryProductStoreHiveContext {
    fn hives(&self) -> &dyn EntitySet<StoreHive> {
        &self.hives
    }

    fn sections(&self) -> &dyn EntitySet<StoreHiveSection> {
        &self.sections
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use katla_core::{HiveId, HiveSectionId};

    #[tokio::test]
    async fn collections_are_independent() {
        let ctx = InMemoryProductStoreHiveContext::with_records(
            vec![StoreHive {
                id: HiveId::new(1),
                code: "H1".to_string(),
                ..Default::default()
            }],
            vec![],
        );

        let section = ctx
            .sections()
            .add(StoreHiveSection {
                store_hive_id: HiveId::new(1),
                code: "S1".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(section.id, HiveSectionId::new(1));
        assert_eq!(ctx.hives().list().await.unwrap().len(), 1);
        assert_eq!(ctx.sections().list().await.unwrap().len(), 1);
    }
}
