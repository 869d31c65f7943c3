//! Storage contract for the music catalog

use crate::error::Result;
use crate::types::{CreateGenre, Genre, GenreId, Music, MusicId, NewMusic, Page, PageRequest};
use async_trait::async_trait;

/// Storage context providing access to catalog persistence
///
/// Every read goes to the backing store; implementations hold no cached
/// state between calls.
#[async_trait]
pub trait CatalogStorage: Send + Sync {
    // ========================================================================
    // Genres
    // ========================================================================

    /// Get genre by ID
    async fn find_genre_by_id(&self, id: GenreId) -> Result<Option<Genre>>;

    /// Get all genres, ordered by name
    async fn get_all_genres(&self) -> Result<Vec<Genre>>;

    /// Create a new genre
    async fn create_genre(&self, genre: CreateGenre) -> Result<Genre>;

    // ========================================================================
    // Music
    // ========================================================================

    /// Insert a new music record
    ///
    /// The referenced genre must exist. The returned record carries the
    /// resolved genre.
    async fn insert_music(&self, music: NewMusic) -> Result<Music>;

    /// Get one page of music records with their genres, ordered by ID
    async fn find_all_music_with_genre(&self, request: PageRequest) -> Result<Page<Music>>;

    /// Get music by ID with its genre
    async fn find_music_by_id_with_genre(&self, id: MusicId) -> Result<Option<Music>>;

    /// Get every music record referencing a genre, ordered by ID
    async fn find_music_by_genre_id_with_genre(&self, genre_id: GenreId) -> Result<Vec<Music>>;

    /// Begin an all-or-nothing unit of work
    async fn begin(&self) -> Result<Box<dyn CatalogTransaction>>;
}

/// An open storage transaction
///
/// Writes become visible to other callers only after [`commit`]. Dropping the
/// transaction without committing rolls every write back.
///
/// [`commit`]: CatalogTransaction::commit
#[async_trait]
pub trait CatalogTransaction: Send {
    /// Get genre by ID
    async fn find_genre_by_id(&mut self, id: GenreId) -> Result<Option<Genre>>;

    /// Get music by ID with its genre
    async fn find_music_by_id_with_genre(&mut self, id: MusicId) -> Result<Option<Music>>;

    /// Persist the name and genre of an existing music record
    ///
    /// The record must exist. Returns the stored state re-read with its genre.
    async fn update_music(&mut self, music: &Music) -> Result<Music>;

    /// Whether a music record with this ID exists
    async fn music_exists(&mut self, id: MusicId) -> Result<bool>;

    /// Delete a music record
    async fn delete_music_by_id(&mut self, id: MusicId) -> Result<()>;

    /// Make every write of this transaction durable
    async fn commit(self: Box<Self>) -> Result<()>;
}
