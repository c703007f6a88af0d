use async_trait::async_trait;
use shelf_core::item::{CatalogItem, ItemPatch, NewItem};
use shelf_core::types::ItemId;
use shelf_core::CatalogKind;

/// Which documents a listing returns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListFilter {
    /// Only documents whose delete flag is unset.
    #[default]
    Active,
    /// Soft-deleted documents too.
    All,
}

impl ListFilter {
    pub fn from_include_deleted(include_deleted: bool) -> Self {
        if include_deleted {
            ListFilter::All
        } else {
            ListFilter::Active
        }
    }
}

/// Document store for the three catalog collections.
///
/// Every operation is scoped to one [`CatalogKind`]. Inputs arrive already
/// validated (`NewItem`, `ItemPatch`), so implementations only persist.
/// Operations that target an id return `None` when nothing matched and leave
/// the not-found decision to the caller.
#[async_trait]
pub trait CatalogStore: Send + Sync + 'static {
    /// Insert a document with a fresh id and `delflag = false`.
    async fn create(&self, kind: CatalogKind, input: &NewItem) -> Result<CatalogItem, sqlx::Error>;

    /// All documents of `kind` in insertion order.
    async fn find_all(
        &self,
        kind: CatalogKind,
        filter: ListFilter,
    ) -> Result<Vec<CatalogItem>, sqlx::Error>;

    /// A single document, soft-deleted or not.
    async fn find_by_id(
        &self,
        kind: CatalogKind,
        id: ItemId,
    ) -> Result<Option<CatalogItem>, sqlx::Error>;

    /// Apply an edit to a live document. Soft-deleted documents are not edited.
    async fn update(
        &self,
        kind: CatalogKind,
        id: ItemId,
        patch: &ItemPatch,
    ) -> Result<Option<CatalogItem>, sqlx::Error>;

    /// Set the delete flag. Repeating it on a deleted document is a no-op
    /// that still returns the document.
    async fn set_delete_flag(
        &self,
        kind: CatalogKind,
        id: ItemId,
    ) -> Result<Option<CatalogItem>, sqlx::Error>;

    /// Cheap liveness probe for `/health`.
    async fn ping(&self) -> Result<(), sqlx::Error>;
}
