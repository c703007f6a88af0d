use shelf_core::item::CatalogItem;
use shelf_core::types::{ItemId, Timestamp};
use shelf_core::CatalogKind;
use sqlx::FromRow;

/// A row from `movies`, `music` or `books`.
///
/// The kind-specific creator column is selected as `creator`, so one row
/// type serves all three tables.
#[derive(Debug, Clone, FromRow)]
pub struct CatalogRow {
    pub id: ItemId,
    pub title: String,
    pub creator: String,
    pub genre: Vec<String>,
    pub delflag: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl CatalogRow {
    pub fn into_item(self, kind: CatalogKind) -> CatalogItem {
        CatalogItem {
            id: self.id,
            kind,
            title: self.title,
            creator: self.creator,
            genre: self.genre,
            delflag: self.delflag,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
