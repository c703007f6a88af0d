//! In-process [`CatalogStore`].
//!
//! Keeps each collection as a vector in insertion order behind a
//! `tokio::sync::RwLock`. Semantics match the PostgreSQL store: ids are
//! time-ordered UUIDs, listings hide soft-deleted documents unless asked,
//! and edits skip deleted documents.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use shelf_core::item::{CatalogItem, ItemPatch, NewItem};
use shelf_core::types::{new_item_id, ItemId};
use shelf_core::CatalogKind;
use tokio::sync::RwLock;

use crate::store::{CatalogStore, ListFilter};

#[derive(Default)]
pub struct MemoryCatalogStore {
    collections: RwLock<HashMap<CatalogKind, Vec<CatalogItem>>>,
}

impl MemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CatalogStore for MemoryCatalogStore {
    async fn create(&self, kind: CatalogKind, input: &NewItem) -> Result<CatalogItem, sqlx::Error> {
        let item = input.clone().into_item(kind, new_item_id(), Utc::now());
        self.collections
            .write()
            .await
            .entry(kind)
            .or_default()
            .push(item.clone());
        Ok(item)
    }

    async fn find_all(
        &self,
        kind: CatalogKind,
        filter: ListFilter,
    ) -> Result<Vec<CatalogItem>, sqlx::Error> {
        let collections = self.collections.read().await;
        let items = collections.get(&kind).map(Vec::as_slice).unwrap_or_default();
        Ok(items
            .iter()
            .filter(|item| filter == ListFilter::All || !item.delflag)
            .cloned()
            .collect())
    }

    async fn find_by_id(
        &self,
        kind: CatalogKind,
        id: ItemId,
    ) -> Result<Option<CatalogItem>, sqlx::Error> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(&kind)
            .and_then(|items| items.iter().find(|item| item.id == id))
            .cloned())
    }

    async fn update(
        &self,
        kind: CatalogKind,
        id: ItemId,
        patch: &ItemPatch,
    ) -> Result<Option<CatalogItem>, sqlx::Error> {
        let mut collections = self.collections.write().await;
        let Some(item) = collections
            .get_mut(&kind)
            .and_then(|items| items.iter_mut().find(|item| item.id == id && !item.delflag))
        else {
            return Ok(None);
        };
        patch.apply(item, Utc::now());
        Ok(Some(item.clone()))
    }

    async fn set_delete_flag(
        &self,
        kind: CatalogKind,
        id: ItemId,
    ) -> Result<Option<CatalogItem>, sqlx::Error> {
        let mut collections = self.collections.write().await;
        let Some(item) = collections
            .get_mut(&kind)
            .and_then(|items| items.iter_mut().find(|item| item.id == id))
        else {
            return Ok(None);
        };
        item.delflag = true;
        item.updated_at = Utc::now();
        Ok(Some(item.clone()))
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use shelf_core::genre::GenreList;
    use shelf_core::movie::{MoviePatch, NewMovie};
    use shelf_core::music::NewMusic;
    use shelf_core::{Movie, Music};

    use super::*;

    fn movie(title: &str) -> NewItem {
        NewItem::from_draft::<Movie>(NewMovie {
            title: title.into(),
            director: "Villeneuve".into(),
            genre: GenreList::from("SF"),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn create_assigns_id_and_lists_in_insertion_order() {
        let store = MemoryCatalogStore::new();
        let a = store.create(CatalogKind::Movie, &movie("Arrival")).await.unwrap();
        let b = store.create(CatalogKind::Movie, &movie("Sicario")).await.unwrap();
        assert_ne!(a.id, b.id);

        let listed = store
            .find_all(CatalogKind::Movie, ListFilter::Active)
            .await
            .unwrap();
        let titles: Vec<_> = listed.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, ["Arrival", "Sicario"]);
    }

    #[tokio::test]
    async fn collections_are_separate() {
        let store = MemoryCatalogStore::new();
        store.create(CatalogKind::Movie, &movie("Dune")).await.unwrap();
        let music = NewItem::from_draft::<Music>(NewMusic {
            title: "Blue".into(),
            artist: "Joni Mitchell".into(),
            genre: GenreList::from("Folk"),
        })
        .unwrap();
        store.create(CatalogKind::Music, &music).await.unwrap();

        let movies = store.find_all(CatalogKind::Movie, ListFilter::All).await.unwrap();
        let books = store.find_all(CatalogKind::Book, ListFilter::All).await.unwrap();
        assert_eq!(movies.len(), 1);
        assert!(books.is_empty());
    }

    #[tokio::test]
    async fn delete_flag_hides_from_active_listing_only() {
        let store = MemoryCatalogStore::new();
        let dune = store.create(CatalogKind::Movie, &movie("Dune")).await.unwrap();

        let deleted = store
            .set_delete_flag(CatalogKind::Movie, dune.id)
            .await
            .unwrap()
            .unwrap();
        assert!(deleted.delflag);

        let active = store.find_all(CatalogKind::Movie, ListFilter::Active).await.unwrap();
        assert!(active.is_empty());

        let all = store.find_all(CatalogKind::Movie, ListFilter::All).await.unwrap();
        assert_eq!(all.len(), 1);
        assert!(all[0].delflag);
    }

    #[tokio::test]
    async fn delete_flag_is_idempotent() {
        let store = MemoryCatalogStore::new();
        let dune = store.create(CatalogKind::Movie, &movie("Dune")).await.unwrap();
        store.set_delete_flag(CatalogKind::Movie, dune.id).await.unwrap();
        let again = store.set_delete_flag(CatalogKind::Movie, dune.id).await.unwrap();
        assert!(again.is_some_and(|item| item.delflag));
    }

    #[tokio::test]
    async fn unknown_id_yields_none() {
        let store = MemoryCatalogStore::new();
        let id = new_item_id();
        assert!(store.set_delete_flag(CatalogKind::Book, id).await.unwrap().is_none());
        assert!(store.find_by_id(CatalogKind::Book, id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn id_from_another_collection_does_not_match() {
        let store = MemoryCatalogStore::new();
        let dune = store.create(CatalogKind::Movie, &movie("Dune")).await.unwrap();
        assert!(store
            .set_delete_flag(CatalogKind::Book, dune.id)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn update_edits_live_documents_only() {
        let store = MemoryCatalogStore::new();
        let dune = store.create(CatalogKind::Movie, &movie("Dune")).await.unwrap();
        let patch = ItemPatch::from_patch::<Movie>(MoviePatch {
            title: Some("Dune: Part One".into()),
            ..Default::default()
        })
        .unwrap();

        let updated = store
            .update(CatalogKind::Movie, dune.id, &patch)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.title, "Dune: Part One");
        assert!(updated.updated_at >= dune.updated_at);

        store.set_delete_flag(CatalogKind::Movie, dune.id).await.unwrap();
        assert!(store
            .update(CatalogKind::Movie, dune.id, &patch)
            .await
            .unwrap()
            .is_none());
    }
}
