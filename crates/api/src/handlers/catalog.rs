//! Handlers for the `/api/{slug}` catalog resources.
//!
//! Written once over [`CatalogEntity`] and instantiated per kind by
//! [`crate::routes::catalog::router`].

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use shelf_core::error::CoreError;
use shelf_core::item::{ItemPatch, NewItem};
use shelf_core::types::ItemId;
use shelf_core::CatalogEntity;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::query::IncludeDeletedParams;
use crate::state::AppState;

/// Body of the delete request (`PUT /api/{slug}`).
#[derive(Debug, Deserialize)]
pub struct DeleteRequest {
    pub id: ItemId,
}

fn not_found<E: CatalogEntity>(id: ItemId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: E::KIND.label(),
        id,
    })
}

/// GET /api/{slug}
pub async fn list<E: CatalogEntity>(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<IncludeDeletedParams>,
) -> AppResult<Json<Vec<E>>> {
    let items = state.store.find_all(E::KIND, params.filter()).await?;
    Ok(Json(items.into_iter().map(E::from_item).collect()))
}

/// POST /api/{slug}
pub async fn create<E: CatalogEntity>(
    State(state): State<AppState>,
    ApiJson(draft): ApiJson<E::Draft>,
) -> AppResult<Json<E>> {
    let input = NewItem::from_draft::<E>(draft)?;
    let item = state.store.create(E::KIND, &input).await?;
    tracing::info!(kind = %E::KIND, id = %item.id, "Catalog item created");
    Ok(Json(E::from_item(item)))
}

/// PUT /api/{slug}
///
/// Soft delete: sets the delete flag and returns the flagged record.
pub async fn delete<E: CatalogEntity>(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<DeleteRequest>,
) -> AppResult<Json<E>> {
    let id = request.id;
    let item = state
        .store
        .set_delete_flag(E::KIND, id)
        .await?
        .ok_or_else(|| not_found::<E>(id))?;
    tracing::info!(kind = %E::KIND, %id, "Catalog item deleted");
    Ok(Json(E::from_item(item)))
}

/// GET /api/{slug}/{id}
pub async fn get_by_id<E: CatalogEntity>(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<ItemId>,
) -> AppResult<Json<E>> {
    let item = state
        .store
        .find_by_id(E::KIND, id)
        .await?
        .ok_or_else(|| not_found::<E>(id))?;
    Ok(Json(E::from_item(item)))
}

/// PATCH /api/{slug}/{id}
pub async fn update<E: CatalogEntity>(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<ItemId>,
    ApiJson(patch): ApiJson<E::Patch>,
) -> AppResult<Json<E>> {
    let patch = ItemPatch::from_patch::<E>(patch)?;
    let item = state
        .store
        .update(E::KIND, id, &patch)
        .await?
        .ok_or_else(|| not_found::<E>(id))?;
    tracing::info!(kind = %E::KIND, %id, "Catalog item updated");
    Ok(Json(E::from_item(item)))
}
