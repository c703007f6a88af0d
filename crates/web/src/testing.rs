//! In-process [`CatalogApi`] for page tests.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use shelf_core::item::{ItemPatch, NewItem};
use shelf_core::types::ItemId;
use shelf_core::CatalogEntity;
use shelf_db::{CatalogStore, ListFilter, MemoryCatalogStore};

use crate::client::{CatalogApi, ClientError};

/// Answers from a [`MemoryCatalogStore`]; can be told to fail or stall every
/// call.
#[derive(Default)]
pub struct FakeCatalog {
    store: MemoryCatalogStore,
    failing: AtomicBool,
    stalled: AtomicBool,
    requests: AtomicUsize,
}

impl FakeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// While stalled, calls are counted and then never answer.
    pub fn set_stalled(&self, stalled: bool) {
        self.stalled.store(stalled, Ordering::SeqCst);
    }

    /// Calls that reached the fake, failed ones included.
    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    /// Seed a record directly, bypassing the request counter.
    pub async fn seed<E: CatalogEntity>(&self, draft: E::Draft) -> E {
        let input = NewItem::from_draft::<E>(draft).unwrap();
        E::from_item(self.store.create(E::KIND, &input).await.unwrap())
    }

    async fn begin(&self) -> Result<(), ClientError> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        if self.stalled.load(Ordering::SeqCst) {
            std::future::pending::<()>().await;
        }
        if self.failing.load(Ordering::SeqCst) {
            return Err(api_error("injected failure"));
        }
        Ok(())
    }
}

fn api_error(message: impl ToString) -> ClientError {
    ClientError::Api {
        status: 500,
        message: message.to_string(),
    }
}

#[async_trait]
impl CatalogApi for FakeCatalog {
    async fn list<E: CatalogEntity>(&self) -> Result<Vec<E>, ClientError> {
        self.begin().await?;
        let items = self
            .store
            .find_all(E::KIND, ListFilter::Active)
            .await
            .map_err(api_error)?;
        Ok(items.into_iter().map(E::from_item).collect())
    }

    async fn get<E: CatalogEntity>(&self, id: ItemId) -> Result<E, ClientError> {
        self.begin().await?;
        self.store
            .find_by_id(E::KIND, id)
            .await
            .map_err(api_error)?
            .map(E::from_item)
            .ok_or_else(|| api_error("not found"))
    }

    async fn create<E: CatalogEntity>(&self, draft: &E::Draft) -> Result<E, ClientError> {
        self.begin().await?;
        let input = NewItem::from_draft::<E>(draft.clone()).map_err(api_error)?;
        let item = self.store.create(E::KIND, &input).await.map_err(api_error)?;
        Ok(E::from_item(item))
    }

    async fn update<E: CatalogEntity>(
        &self,
        id: ItemId,
        patch: &E::Patch,
    ) -> Result<E, ClientError> {
        self.begin().await?;
        let patch = ItemPatch::from_patch::<E>(patch.clone()).map_err(api_error)?;
        self.store
            .update(E::KIND, id, &patch)
            .await
            .map_err(api_error)?
            .map(E::from_item)
            .ok_or_else(|| api_error("not found"))
    }

    async fn delete<E: CatalogEntity>(&self, id: ItemId) -> Result<E, ClientError> {
        self.begin().await?;
        self.store
            .set_delete_flag(E::KIND, id)
            .await
            .map_err(api_error)?
            .map(E::from_item)
            .ok_or_else(|| api_error("not found"))
    }
}
