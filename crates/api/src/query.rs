//! Shared query parameter types for API handlers.

use serde::Deserialize;
use shelf_db::ListFilter;

/// Query parameters for catalog listings (`?include_deleted=true`).
#[derive(Debug, Default, Deserialize)]
pub struct IncludeDeletedParams {
    #[serde(default)]
    pub include_deleted: bool,
}

impl IncludeDeletedParams {
    pub fn filter(&self) -> ListFilter {
        ListFilter::from_include_deleted(self.include_deleted)
    }
}
