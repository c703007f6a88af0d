//! The three catalog collections and their per-kind naming.

use serde::{Deserialize, Serialize};

/// Genres offered by the movie form.
pub const MOVIE_GENRES: &[&str] = &[
    "Romance", "Anime", "Action", "SF", "Drama", "Adventure", "Horror", "Fantasy", "Comedy",
    "Thriller", "Mystery",
];

/// Genres offered by the music form.
pub const MUSIC_GENRES: &[&str] = &[
    "Pop",
    "Rock",
    "Hip-Hop",
    "R&B",
    "Jazz",
    "Classical",
    "Electronic",
    "Country",
    "Folk",
    "Metal",
    "Indie",
    "K-Pop",
];

/// Genres offered by the book form.
pub const BOOK_GENRES: &[&str] = &[
    "Fiction",
    "Non-Fiction",
    "Mystery",
    "Thriller",
    "Romance",
    "Fantasy",
    "SF",
    "Horror",
    "Adventure",
    "Historical Fiction",
    "Biography",
    "Autobiography",
    "Self-Help",
    "Health & Wellness",
    "Psychology",
    "Philosophy",
    "Science",
    "Business",
    "Politics",
    "Religion & Spirituality",
    "Cookbook",
    "Educational",
];

/// A catalog collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogKind {
    Movie,
    Music,
    Book,
}

impl CatalogKind {
    pub const ALL: [CatalogKind; 3] = [CatalogKind::Movie, CatalogKind::Music, CatalogKind::Book];

    /// URL segment used by both the API (`/api/{slug}`) and the pages (`/{slug}`).
    pub fn slug(self) -> &'static str {
        match self {
            CatalogKind::Movie => "movie",
            CatalogKind::Music => "music",
            CatalogKind::Book => "book",
        }
    }

    /// Human-readable entity name, as used in error messages.
    pub fn label(self) -> &'static str {
        match self {
            CatalogKind::Movie => "Movie",
            CatalogKind::Music => "Music",
            CatalogKind::Book => "Book",
        }
    }

    /// Backing table in the document store.
    pub fn table(self) -> &'static str {
        match self {
            CatalogKind::Movie => "movies",
            CatalogKind::Music => "music",
            CatalogKind::Book => "books",
        }
    }

    /// Name of the second identifying field: who made the work.
    pub fn creator_field(self) -> &'static str {
        match self {
            CatalogKind::Movie => "director",
            CatalogKind::Music => "artist",
            CatalogKind::Book => "author",
        }
    }

    /// Genre tags the add form offers as checkboxes.
    pub fn genres(self) -> &'static [&'static str] {
        match self {
            CatalogKind::Movie => MOVIE_GENRES,
            CatalogKind::Music => MUSIC_GENRES,
            CatalogKind::Book => BOOK_GENRES,
        }
    }

    pub fn api_path(self) -> String {
        format!("/api/{}", self.slug())
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.slug() == slug)
    }
}

impl std::fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}
