//! The typed face of a catalog kind.
//!
//! Storage works with the kind-agnostic [`CatalogItem`]; HTTP handlers and
//! client pages work with one concrete record type per kind (`Movie`,
//! `Music`, `Book`) whose creator field carries the kind's own name. This
//! trait ties a record type to its kind and to its create/edit payloads so
//! handlers and pages can be written once, generically.

use serde::de::DeserializeOwned;
use serde::Serialize;
use validator::Validate;

use crate::catalog::CatalogKind;
use crate::genre::GenreList;
use crate::item::CatalogItem;
use crate::types::ItemId;

/// Fields of a create payload, with the creator field under its neutral name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DraftFields {
    pub title: String,
    pub creator: String,
    pub genre: GenreList,
}

/// Fields of an edit payload; `None` leaves the stored value unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatchFields {
    pub title: Option<String>,
    pub creator: Option<String>,
    pub genre: Option<GenreList>,
}

impl PatchFields {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.creator.is_none() && self.genre.is_none()
    }
}

pub trait CatalogEntity:
    Serialize + DeserializeOwned + Clone + std::fmt::Debug + Send + Sync + 'static
{
    const KIND: CatalogKind;

    /// Create payload (`POST /api/{slug}`).
    type Draft: Validate
        + Clone
        + Serialize
        + DeserializeOwned
        + From<DraftFields>
        + Into<DraftFields>
        + Send
        + Sync
        + 'static;

    /// Edit payload (`PATCH /api/{slug}/{id}`).
    type Patch: Validate
        + Clone
        + Serialize
        + DeserializeOwned
        + From<PatchFields>
        + Into<PatchFields>
        + Send
        + Sync
        + 'static;

    fn from_item(item: CatalogItem) -> Self;

    fn id(&self) -> ItemId;

    fn title(&self) -> &str;

    /// Director, artist or author.
    fn creator(&self) -> &str;

    fn genre(&self) -> &[String];

    fn is_deleted(&self) -> bool;
}
