//! Book records and payloads.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::catalog::CatalogKind;
use crate::entity::{CatalogEntity, DraftFields, PatchFields};
use crate::genre::GenreList;
use crate::item::CatalogItem;
use crate::types::{null_as_default, ItemId, Timestamp};
use crate::validation::{check_genre, check_optional_text, check_required_text, finish};

/// A book document as served by `/api/book`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    #[serde(rename = "_id")]
    pub id: ItemId,
    pub title: String,
    pub author: String,
    pub genre: Vec<String>,
    pub delflag: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Body of `POST /api/book`.
///
/// Same decoding rules as [`crate::movie::NewMovie`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewBook {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub author: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub genre: GenreList,
}

/// Body of `PATCH /api/book/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<GenreList>,
}

impl Validate for NewBook {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_required_text(&mut errors, "title", &self.title);
        check_required_text(&mut errors, "author", &self.author);
        check_genre(&mut errors, "genre", &self.genre);
        finish(errors)
    }
}

impl Validate for BookPatch {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_optional_text(&mut errors, "title", self.title.as_deref());
        check_optional_text(&mut errors, "author", self.author.as_deref());
        if let Some(genre) = &self.genre {
            check_genre(&mut errors, "genre", genre);
        }
        finish(errors)
    }
}

impl From<DraftFields> for NewBook {
    fn from(fields: DraftFields) -> Self {
        Self {
            title: fields.title,
            author: fields.creator,
            genre: fields.genre,
        }
    }
}

impl From<NewBook> for DraftFields {
    fn from(draft: NewBook) -> Self {
        Self {
            title: draft.title,
            creator: draft.author,
            genre: draft.genre,
        }
    }
}

impl From<PatchFields> for BookPatch {
    fn from(fields: PatchFields) -> Self {
        Self {
            title: fields.title,
            author: fields.creator,
            genre: fields.genre,
        }
    }
}

impl From<BookPatch> for PatchFields {
    fn from(patch: BookPatch) -> Self {
        Self {
            title: patch.title,
            creator: patch.author,
            genre: patch.genre,
        }
    }
}

impl CatalogEntity for Book {
    const KIND: CatalogKind = CatalogKind::Book;
    type Draft = NewBook;
    type Patch = BookPatch;

    fn from_item(item: CatalogItem) -> Self {
        Self {
            id: item.id,
            title: item.title,
            author: item.creator,
            genre: item.genre,
            delflag: item.delflag,
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }

    fn id(&self) -> ItemId {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn creator(&self) -> &str {
        &self.author
    }

    fn genre(&self) -> &[String] {
        &self.genre
    }

    fn is_deleted(&self) -> bool {
        self.delflag
    }
}
