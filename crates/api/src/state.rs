use std::sync::Arc;

use shelf_db::CatalogStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything sits behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Catalog document store (PostgreSQL or in-memory).
    pub store: Arc<dyn CatalogStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
