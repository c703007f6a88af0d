use axum::routing::get;
use axum::Router;
use shelf_core::CatalogEntity;

use crate::handlers::catalog;
use crate::state::AppState;

/// Routes for one catalog kind, nested at `/api/{slug}`.
///
/// ```text
/// GET    /            -> list
/// POST   /            -> create
/// PUT    /            -> delete (soft, body { id })
/// GET    /{id}        -> get_by_id
/// PATCH  /{id}        -> update
/// ```
pub fn router<E: CatalogEntity>() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(catalog::list::<E>)
                .post(catalog::create::<E>)
                .put(catalog::delete::<E>),
        )
        .route(
            "/{id}",
            get(catalog::get_by_id::<E>).patch(catalog::update::<E>),
        )
}
