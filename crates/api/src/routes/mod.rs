pub mod catalog;
pub mod health;

use axum::Router;
use shelf_core::{Book, CatalogEntity, Movie, Music};

use crate::state::AppState;

/// Build the `/api` route tree: one sub-router per catalog kind.
///
/// ```text
/// /movie    Movie records (director)
/// /music    Music records (artist)
/// /book     Book records (author)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest(&slug_path::<Movie>(), catalog::router::<Movie>())
        .nest(&slug_path::<Music>(), catalog::router::<Music>())
        .nest(&slug_path::<Book>(), catalog::router::<Book>())
}

fn slug_path<E: CatalogEntity>() -> String {
    format!("/{}", E::KIND.slug())
}
