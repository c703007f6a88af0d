//! Field checks shared by every catalog payload.
//!
//! Payload types implement [`validator::Validate`] by running these checks
//! and collecting the failures into [`ValidationErrors`]. Handlers turn the
//! collected errors into a single [`CoreError::Validation`] message with
//! [`into_core_error`].

use std::borrow::Cow;

use validator::{ValidationError, ValidationErrors};

use crate::catalog::CatalogKind;
use crate::error::CoreError;
use crate::genre::GenreList;

/// Maximum length (in characters) of a title or creator name.
pub const MAX_TEXT_LEN: usize = 200;

/// Maximum number of genre tags on one item.
pub const MAX_GENRES: usize = 20;

/// Maximum length (in characters) of a single genre tag.
pub const MAX_GENRE_LEN: usize = 40;

fn failure(code: &'static str, message: String) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Owned(message));
    error
}

/// A required text field must contain something other than whitespace.
pub fn check_required_text(errors: &mut ValidationErrors, field: &'static str, value: &str) {
    if value.trim().is_empty() {
        errors.add(field, failure("required", "is required".to_string()));
    } else if value.trim().chars().count() > MAX_TEXT_LEN {
        errors.add(
            field,
            failure(
                "length",
                format!("must not exceed {MAX_TEXT_LEN} characters"),
            ),
        );
    }
}

/// An optional text field is only checked when present.
pub fn check_optional_text(errors: &mut ValidationErrors, field: &'static str, value: Option<&str>) {
    if let Some(value) = value {
        check_required_text(errors, field, value);
    }
}

/// Genre tags: at least one, none blank, bounded count and length.
pub fn check_genre(errors: &mut ValidationErrors, field: &'static str, genre: &GenreList) {
    let tags = genre.as_slice();
    if tags.is_empty() {
        errors.add(field, failure("required", "is required".to_string()));
        return;
    }
    if genre.normalized().len() > MAX_GENRES {
        errors.add(
            field,
            failure("count", format!("must not have more than {MAX_GENRES} tags")),
        );
    }
    if let Some(i) = tags.iter().position(|t| t.trim().is_empty()) {
        errors.add(field, failure("blank", format!("tag at index {i} is blank")));
    }
    if let Some(i) = tags
        .iter()
        .position(|t| t.trim().chars().count() > MAX_GENRE_LEN)
    {
        errors.add(
            field,
            failure(
                "length",
                format!("tag at index {i} exceeds {MAX_GENRE_LEN} characters"),
            ),
        );
    }
}

/// Close out a round of checks.
pub fn finish(errors: ValidationErrors) -> Result<(), ValidationErrors> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Flatten collected field errors into one message, e.g.
/// `Movie validation failed: director is required`.
///
/// Fields are listed alphabetically so the message is stable.
pub fn into_core_error(kind: CatalogKind, errors: &ValidationErrors) -> CoreError {
    let mut parts: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, field_errors)| {
            field_errors.iter().map(move |e| {
                let detail = e.message.as_deref().unwrap_or(&*e.code);
                format!("{field} {detail}")
            })
        })
        .collect();
    parts.sort();
    CoreError::Validation(format!(
        "{} validation failed: {}",
        kind.label(),
        parts.join(", ")
    ))
}
