//! Music records and payloads.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::catalog::CatalogKind;
use crate::entity::{CatalogEntity, DraftFields, PatchFields};
use crate::genre::GenreList;
use crate::item::CatalogItem;
use crate::types::{null_as_default, ItemId, Timestamp};
use crate::validation::{check_genre, check_optional_text, check_required_text, finish};

/// A track or album as served by `/api/music`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Music {
    #[serde(rename = "_id")]
    pub id: ItemId,
    pub title: String,
    pub artist: String,
    pub genre: Vec<String>,
    pub delflag: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Body of `POST /api/music`.
///
/// Same decoding rules as [`crate::movie::NewMovie`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewMusic {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub artist: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub genre: GenreList,
}

/// Body of `PATCH /api/music/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MusicPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<GenreList>,
}

impl Validate for NewMusic {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_required_text(&mut errors, "title", &self.title);
        check_required_text(&mut errors, "artist", &self.artist);
        check_genre(&mut errors, "genre", &self.genre);
        finish(errors)
    }
}

impl Validate for MusicPatch {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_optional_text(&mut errors, "title", self.title.as_deref());
        check_optional_text(&mut errors, "artist", self.artist.as_deref());
        if let Some(genre) = &self.genre {
            check_genre(&mut errors, "genre", genre);
        }
        finish(errors)
    }
}

impl From<DraftFields> for NewMusic {
    fn from(fields: DraftFields) -> Self {
        Self {
            title: fields.title,
            artist: fields.creator,
            genre: fields.genre,
        }
    }
}

impl From<NewMusic> for DraftFields {
    fn from(draft: NewMusic) -> Self {
        Self {
            title: draft.title,
            creator: draft.artist,
            genre: draft.genre,
        }
    }
}

impl From<PatchFields> for MusicPatch {
    fn from(fields: PatchFields) -> Self {
        Self {
            title: fields.title,
            artist: fields.creator,
            genre: fields.genre,
        }
    }
}

impl From<MusicPatch> for PatchFields {
    fn from(patch: MusicPatch) -> Self {
        Self {
            title: patch.title,
            creator: patch.artist,
            genre: patch.genre,
        }
    }
}

impl CatalogEntity for Music {
    const KIND: CatalogKind = CatalogKind::Music;
    type Draft = NewMusic;
    type Patch = MusicPatch;

    fn from_item(item: CatalogItem) -> Self {
        Self {
            id: item.id,
            title: item.title,
            artist: item.creator,
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
        &self.artist
    }

    fn genre(&self) -> &[String] {
        &self.genre
    }

    fn is_deleted(&self) -> bool {
        self.delflag
    }
}
