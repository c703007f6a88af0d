use std::fmt;

use shelf_core::types::ItemId;
use shelf_core::CatalogKind;

/// Client page addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `/<slug>`
    List(CatalogKind),
    /// `/<slug>/add`
    Add(CatalogKind),
    /// `/<slug>/<id>/edit`
    Edit(CatalogKind, ItemId),
}

impl Route {
    pub fn kind(self) -> CatalogKind {
        match self {
            Route::List(kind) | Route::Add(kind) | Route::Edit(kind, _) => kind,
        }
    }

    pub fn path(self) -> String {
        match self {
            Route::List(kind) => format!("/{kind}"),
            Route::Add(kind) => format!("/{kind}/add"),
            Route::Edit(kind, id) => format!("/{kind}/{id}/edit"),
        }
    }

    /// Inverse of [`Route::path`]. A trailing slash is tolerated.
    pub fn parse(path: &str) -> Option<Route> {
        let trimmed = path.strip_prefix('/')?.trim_end_matches('/');
        let mut segments = trimmed.split('/');
        let kind = CatalogKind::from_slug(segments.next()?)?;

        let route = match (segments.next(), segments.next()) {
            (None, _) => Route::List(kind),
            (Some("add"), None) => Route::Add(kind),
            (Some(id), Some("edit")) => Route::Edit(kind, ItemId::parse_str(id).ok()?),
            _ => return None,
        };

        if segments.next().is_some() {
            return None;
        }
        Some(route)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
