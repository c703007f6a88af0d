//! Movie records and payloads.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::catalog::CatalogKind;
use crate::entity::{CatalogEntity, DraftFields, PatchFields};
use crate::genre::GenreList;
use crate::item::CatalogItem;
use crate::types::{null_as_default, ItemId, Timestamp};
use crate::validation::{check_genre, check_optional_text, check_required_text, finish};

/// A movie document as served by `/api/movie`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    #[serde(rename = "_id")]
    pub id: ItemId,
    pub title: String,
    pub director: String,
    pub genre: Vec<String>,
    pub delflag: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Body of `POST /api/movie`.
///
/// Absent or null fields deserialize as empty so that validation, not JSON
/// decoding, reports which required field is missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewMovie {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub director: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub genre: GenreList,
}

/// Body of `PATCH /api/movie/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MoviePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<GenreList>,
}

impl Validate for NewMovie {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_required_text(&mut errors, "title", &self.title);
        check_required_text(&mut errors, "director", &self.director);
        check_genre(&mut errors, "genre", &self.genre);
        finish(errors)
    }
}

impl Validate for MoviePatch {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_optional_text(&mut errors, "title", self.title.as_deref());
        check_optional_text(&mut errors, "director", self.director.as_deref());
        if let Some(genre) = &self.genre {
            check_genre(&mut errors, "genre", genre);
        }
        finish(errors)
    }
}

impl From<DraftFields> for NewMovie {
    fn from(fields: DraftFields) -> Self {
        Self {
            title: fields.title,
            director: fields.creator,
            genre: fields.genre,
        }
    }
}

impl From<NewMovie> for DraftFields {
    fn from(draft: NewMovie) -> Self {
        Self {
            title: draft.title,
            creator: draft.director,
            genre: draft.genre,
        }
    }
}

impl From<PatchFields> for MoviePatch {
    fn from(fields: PatchFields) -> Self {
        Self {
            title: fields.title,
            director: fields.creator,
            genre: fields.genre,
        }
    }
}

impl From<MoviePatch> for PatchFields {
    fn from(patch: MoviePatch) -> Self {
        Self {
            title: patch.title,
            creator: patch.director,
            genre: patch.genre,
        }
    }
}

impl CatalogEntity for Movie {
    const KIND: CatalogKind = CatalogKind::Movie;
    type Draft = NewMovie;
    type Patch = MoviePatch;

    fn from_item(item: CatalogItem) -> Self {
        Self {
            id: item.id,
            title: item.title,
            director: item.creator,
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
        &self.director
    }

    fn genre(&self) -> &[String] {
        &self.genre
    }

    fn is_deleted(&self) -> bool {
        self.delflag
    }
}
