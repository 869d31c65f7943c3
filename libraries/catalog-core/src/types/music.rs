//! Music types

use super::{GenreId, GenreRef};
use serde::{Deserialize, Serialize};

/// Music identifier
pub type MusicId = i64;

/// A music record with its genre resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Music {
    /// Music ID
    pub id: MusicId,
    /// Display name
    pub name: String,
    /// Genre association, resolved eagerly on every read
    pub genre: GenreRef,
}

impl Music {
    /// Create a music value
    pub fn new(id: MusicId, name: impl Into<String>, genre: GenreRef) -> Self {
        Self {
            id,
            name: name.into(),
            genre,
        }
    }
}

/// Data for inserting a new music record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMusic {
    /// Display name (must be non-blank)
    pub name: String,
    /// Existing genre to file the record under
    pub genre_id: GenreId,
}
