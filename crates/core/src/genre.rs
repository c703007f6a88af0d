//! Genre tags.
//!
//! Every catalog item carries an ordered set of genre tags. Older clients
//! submit a single genre string, so [`GenreList`] accepts either shape on
//! the wire and always serializes as an array.

use serde::{Deserialize, Deserializer, Serialize};

/// Genre tags as submitted by a client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GenreList(Vec<String>);

#[derive(Deserialize)]
#[serde(untagged)]
enum GenreWire {
    One(String),
    Many(Vec<String>),
}

impl<'de> Deserialize<'de> for GenreList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match GenreWire::deserialize(deserializer)? {
            GenreWire::One(tag) => GenreList(vec![tag]),
            GenreWire::Many(tags) => GenreList(tags),
        })
    }
}

impl GenreList {
    pub fn new(tags: Vec<String>) -> Self {
        Self(tags)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Trimmed tags with repeats removed, keeping the first occurrence.
    pub fn normalized(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::with_capacity(self.0.len());
        for tag in &self.0 {
            let tag = tag.trim();
            if !out.iter().any(|seen| seen == tag) {
                out.push(tag.to_string());
            }
        }
        out
    }
}

impl From<Vec<String>> for GenreList {
    fn from(tags: Vec<String>) -> Self {
        Self(tags)
    }
}

impl From<&str> for GenreList {
    fn from(tag: &str) -> Self {
        Self(vec![tag.to_string()])
    }
}

/// Checkbox selection state on the add/edit form.
///
/// Tags are unique; order is the order in which they were checked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenreSelection {
    tags: Vec<String>,
}

impl GenreSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a checkbox change: `checked` adds the tag, unchecked removes it.
    pub fn toggle(&mut self, tag: &str, checked: bool) {
        if checked {
            if !self.contains(tag) {
                self.tags.push(tag.to_string());
            }
        } else {
            self.tags.retain(|t| t != tag);
        }
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn clear(&mut self) {
        self.tags.clear();
    }

    pub fn to_list(&self) -> GenreList {
        GenreList(self.tags.clone())
    }
}

impl FromIterator<String> for GenreSelection {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut selection = GenreSelection::new();
        for tag in iter {
            selection.toggle(&tag, true);
        }
        selection
    }
}
