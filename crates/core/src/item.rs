//! Stored catalog items and the validated inputs that create or edit them.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::catalog::CatalogKind;
use crate::entity::{CatalogEntity, DraftFields, PatchFields};
use crate::error::CoreError;
use crate::types::{ItemId, Timestamp};
use crate::validation::into_core_error;

/// One document of a catalog collection, independent of its kind.
///
/// `creator` holds the director, artist or author depending on `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: ItemId,
    pub kind: CatalogKind,
    pub title: String,
    pub creator: String,
    pub genre: Vec<String>,
    pub delflag: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A validated create request.
///
/// Only obtainable through [`NewItem::from_draft`], so a value of this type
/// always has a non-blank title and creator and at least one genre tag.
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    title: String,
    creator: String,
    genre: Vec<String>,
}

impl NewItem {
    /// Validate a create payload and normalize it (trimmed text, unique tags).
    pub fn from_draft<E: CatalogEntity>(draft: E::Draft) -> Result<Self, CoreError> {
        draft
            .validate()
            .map_err(|errors| into_core_error(E::KIND, &errors))?;

        let fields: DraftFields = draft.into();
        Ok(Self {
            title: fields.title.trim().to_string(),
            creator: fields.creator.trim().to_string(),
            genre: fields.genre.normalized(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn creator(&self) -> &str {
        &self.creator
    }

    pub fn genre(&self) -> &[String] {
        &self.genre
    }

    /// Build the stored document for this input.
    pub fn into_item(self, kind: CatalogKind, id: ItemId, now: Timestamp) -> CatalogItem {
        CatalogItem {
            id,
            kind,
            title: self.title,
            creator: self.creator,
            genre: self.genre,
            delflag: false,
            created_at: now,
            updated_at: now,
        }
    }
}

/// A validated, non-empty edit request.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemPatch {
    title: Option<String>,
    creator: Option<String>,
    genre: Option<Vec<String>>,
}

impl ItemPatch {
    /// Validate an edit payload. A patch that changes nothing is rejected.
    pub fn from_patch<E: CatalogEntity>(patch: E::Patch) -> Result<Self, CoreError> {
        patch
            .validate()
            .map_err(|errors| into_core_error(E::KIND, &errors))?;

        let fields: PatchFields = patch.into();
        if fields.is_empty() {
            return Err(CoreError::Validation(format!(
                "{} validation failed: no fields to update",
                E::KIND.label()
            )));
        }

        Ok(Self {
            title: fields.title.map(|t| t.trim().to_string()),
            creator: fields.creator.map(|c| c.trim().to_string()),
            genre: fields.genre.map(|g| g.normalized()),
        })
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn creator(&self) -> Option<&str> {
        self.creator.as_deref()
    }

    pub fn genre(&self) -> Option<&[String]> {
        self.genre.as_deref()
    }

    /// Apply the present fields to `item` and stamp `updated_at`.
    pub fn apply(&self, item: &mut CatalogItem, now: Timestamp) {
        if let Some(title) = &self.title {
            item.title = title.clone();
        }
        if let Some(creator) = &self.creator {
            item.creator = creator.clone();
        }
        if let Some(genre) = &self.genre {
            item.genre = genre.clone();
        }
        item.updated_at = now;
    }
}
