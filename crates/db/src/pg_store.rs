use async_trait::async_trait;
use shelf_core::item::{CatalogItem, ItemPatch, NewItem};
use shelf_core::types::ItemId;
use shelf_core::CatalogKind;

use crate::repositories::CatalogRepo;
use crate::store::{CatalogStore, ListFilter};
use crate::DbPool;

/// [`CatalogStore`] over a PostgreSQL pool.
#[derive(Clone)]
pub struct PgCatalogStore {
    pool: DbPool,
}

impl PgCatalogStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl CatalogStore for PgCatalogStore {
    async fn create(&self, kind: CatalogKind, input: &NewItem) -> Result<CatalogItem, sqlx::Error> {
        CatalogRepo::create(&self.pool, kind, input).await
    }

    async fn find_all(
        &self,
        kind: CatalogKind,
        filter: ListFilter,
    ) -> Result<Vec<CatalogItem>, sqlx::Error> {
        CatalogRepo::find_all(&self.pool, kind, filter).await
    }

    async fn find_by_id(
        &self,
        kind: CatalogKind,
        id: ItemId,
    ) -> Result<Option<CatalogItem>, sqlx::Error> {
        CatalogRepo::find_by_id(&self.pool, kind, id).await
    }

    async fn update(
        &self,
        kind: CatalogKind,
        id: ItemId,
        patch: &ItemPatch,
    ) -> Result<Option<CatalogItem>, sqlx::Error> {
        CatalogRepo::update(&self.pool, kind, id, patch).await
    }

    async fn set_delete_flag(
        &self,
        kind: CatalogKind,
        id: ItemId,
    ) -> Result<Option<CatalogItem>, sqlx::Error> {
        CatalogRepo::set_delete_flag(&self.pool, kind, id).await
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        crate::health_check(&self.pool).await
    }
}
