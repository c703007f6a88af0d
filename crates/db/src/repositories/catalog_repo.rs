//! Repository for the `movies`, `music` and `books` tables.

use shelf_core::item::{CatalogItem, ItemPatch, NewItem};
use shelf_core::types::{new_item_id, ItemId};
use shelf_core::CatalogKind;
use sqlx::PgPool;

use crate::models::CatalogRow;
use crate::store::ListFilter;

/// Column list shared across queries, with the creator column aliased.
fn columns(kind: CatalogKind) -> String {
    format!(
        "id, title, {} AS creator, genre, delflag, created_at, updated_at",
        kind.creator_field()
    )
}

/// Provides CRUD operations for every catalog table.
pub struct CatalogRepo;

impl CatalogRepo {
    /// Insert a new document, returning the created row.
    pub async fn create(
        pool: &PgPool,
        kind: CatalogKind,
        input: &NewItem,
    ) -> Result<CatalogItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO {table} (id, title, {creator}, genre)
             VALUES ($1, $2, $3, $4)
             RETURNING {cols}",
            table = kind.table(),
            creator = kind.creator_field(),
            cols = columns(kind),
        );
        let row = sqlx::query_as::<_, CatalogRow>(&query)
            .bind(new_item_id())
            .bind(input.title())
            .bind(input.creator())
            .bind(input.genre())
            .fetch_one(pool)
            .await?;
        Ok(row.into_item(kind))
    }

    /// List documents in creation order.
    pub async fn find_all(
        pool: &PgPool,
        kind: CatalogKind,
        filter: ListFilter,
    ) -> Result<Vec<CatalogItem>, sqlx::Error> {
        let condition = match filter {
            ListFilter::Active => "WHERE delflag = FALSE",
            ListFilter::All => "",
        };
        let query = format!(
            "SELECT {cols} FROM {table} {condition} ORDER BY created_at ASC, id ASC",
            cols = columns(kind),
            table = kind.table(),
        );
        let rows = sqlx::query_as::<_, CatalogRow>(&query)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(|r| r.into_item(kind)).collect())
    }

    /// Find a document by id, including soft-deleted rows.
    pub async fn find_by_id(
        pool: &PgPool,
        kind: CatalogKind,
        id: ItemId,
    ) -> Result<Option<CatalogItem>, sqlx::Error> {
        let query = format!(
            "SELECT {cols} FROM {table} WHERE id = $1",
            cols = columns(kind),
            table = kind.table(),
        );
        let row = sqlx::query_as::<_, CatalogRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(|r| r.into_item(kind)))
    }

    /// Update a live document. Only the fields present in `patch` are applied.
    ///
    /// Returns `None` if no live row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        kind: CatalogKind,
        id: ItemId,
        patch: &ItemPatch,
    ) -> Result<Option<CatalogItem>, sqlx::Error> {
        let query = format!(
            "UPDATE {table} SET
                title = COALESCE($2, title),
                {creator} = COALESCE($3, {creator}),
                genre = COALESCE($4, genre),
                updated_at = NOW()
             WHERE id = $1 AND delflag = FALSE
             RETURNING {cols}",
            table = kind.table(),
            creator = kind.creator_field(),
            cols = columns(kind),
        );
        let row = sqlx::query_as::<_, CatalogRow>(&query)
            .bind(id)
            .bind(patch.title())
            .bind(patch.creator())
            .bind(patch.genre().map(<[String]>::to_vec))
            .fetch_optional(pool)
            .await?;
        Ok(row.map(|r| r.into_item(kind)))
    }

    /// Soft-delete a document by setting its delete flag.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn set_delete_flag(
        pool: &PgPool,
        kind: CatalogKind,
        id: ItemId,
    ) -> Result<Option<CatalogItem>, sqlx::Error> {
        let query = format!(
            "UPDATE {table} SET delflag = TRUE, updated_at = NOW()
             WHERE id = $1
             RETURNING {cols}",
            table = kind.table(),
            cols = columns(kind),
        );
        let row = sqlx::query_as::<_, CatalogRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(|r| r.into_item(kind)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_alias_the_creator_field() {
        assert_eq!(
            columns(CatalogKind::Music),
            "id, title, artist AS creator, genre, delflag, created_at, updated_at"
        );
    }
}
