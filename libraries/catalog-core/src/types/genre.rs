//! Genre types

use serde::{Deserialize, Serialize};

/// Genre identifier
pub type GenreId = i64;

/// A music genre
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    /// Genre ID
    pub id: GenreId,
    /// Display name
    pub name: String,
}

impl Genre {
    /// Create a genre value
    pub fn new(id: GenreId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Data for creating a new genre
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGenre {
    /// Display name (must be non-blank and unique)
    pub name: String,
}

/// Genre association of a music record
///
/// A music row may lose its genre when the genre is deleted, so the
/// association is either resolved or absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenreRef {
    /// The record references this genre
    Present(Genre),
    /// The record has no genre
    Absent,
}

impl GenreRef {
    /// Name of the referenced genre, if any
    pub fn name(&self) -> Option<&str> {
        match self {
            GenreRef::Present(genre) => Some(genre.name.as_str()),
            GenreRef::Absent => None,
        }
    }

    /// ID of the referenced genre, if any
    pub fn id(&self) -> Option<GenreId> {
        match self {
            GenreRef::Present(genre) => Some(genre.id),
            GenreRef::Absent => None,
        }
    }
}

impl From<Option<Genre>> for GenreRef {
    fn from(genre: Option<Genre>) -> Self {
        genre.map_or(GenreRef::Absent, GenreRef::Present)
    }
}

impl From<Genre> for GenreRef {
    fn from(genre: Genre) -> Self {
        GenreRef::Present(genre)
    }
}
