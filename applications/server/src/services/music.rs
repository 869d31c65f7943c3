/// Music catalog service - create, list, read, update, delete, filter by genre
use crate::{
    dto::{DeleteMusicResponse, MusicDto, NewMusicRequest, PaginationResponse, UpdateMusicRequest},
    error::{Result, ServerError},
};
use catalog_core::{
    CatalogError, CatalogStorage, CatalogTransaction, GenreId, GenreRef, Music, MusicId, NewMusic,
    PageRequest,
};
use std::sync::Arc;

pub const DELETE_SUCCESS_MESSAGE: &str = "Music deleted successfully";

#[derive(Clone)]
pub struct MusicService {
    storage: Arc<dyn CatalogStorage>,
}

impl MusicService {
    pub fn new(storage: Arc<dyn CatalogStorage>) -> Self {
        Self { storage }
    }

    /// Create a music record under an existing genre
    pub async fn create(&self, request: NewMusicRequest) -> Result<MusicDto> {
        let genre = self
            .storage
            .find_genre_by_id(request.genre_id)
            .await?
            .ok_or_else(|| CatalogError::not_found("Genre", request.genre_id))?;

        let music = self
            .storage
            .insert_music(NewMusic {
                name: request.name,
                genre_id: genre.id,
            })
            .await?;

        tracing::info!(music_id = music.id, genre_id = genre.id, "Created music");

        Ok(MusicDto::from(&music))
    }

    /// One zero-based page of music, ordered by ID
    pub async fn list(&self, page_no: u32, page_size: u32) -> Result<PaginationResponse> {
        let request = PageRequest::new(page_no, page_size)?;
        let page = self.storage.find_all_music_with_genre(request).await?;

        Ok(PaginationResponse::from(page))
    }

    pub async fn get_by_id(&self, id: MusicId) -> Result<MusicDto> {
        let music = self
            .storage
            .find_music_by_id_with_genre(id)
            .await?
            .ok_or_else(|| CatalogError::not_found("Music", id))?;

        Ok(MusicDto::from(&music))
    }

    /// Rename a music record and move it to another genre
    ///
    /// Runs in one transaction. A value the store rejects yields
    /// `ServerError::UpdateRejected`, which carries no detail to the client.
    pub async fn update(&self, id: MusicId, request: UpdateMusicRequest) -> Result<MusicDto> {
        match self.update_in_transaction(id, request).await {
            Ok(music) => {
                tracing::info!(music_id = music.id, "Updated music");
                Ok(MusicDto::from(&music))
            }
            Err(CatalogError::InvalidArgument(msg)) => Err(ServerError::UpdateRejected(msg)),
            Err(err) => Err(err.into()),
        }
    }

    async fn update_in_transaction(
        &self,
        id: MusicId,
        request: UpdateMusicRequest,
    ) -> catalog_core::Result<Music> {
        let mut tx = self.storage.begin().await?;

        let music = apply_update(tx.as_mut(), id, request).await?;
        tx.commit().await?;

        Ok(music)
    }

    /// Delete a music record after checking it exists, in one transaction
    pub async fn delete(&self, id: MusicId) -> Result<DeleteMusicResponse> {
        let mut tx = self.storage.begin().await?;

        if !tx.music_exists(id).await? {
            return Err(CatalogError::not_found("Music", id).into());
        }

        tx.delete_music_by_id(id).await?;
        tx.commit().await?;

        tracing::info!(music_id = id, "Deleted music");

        Ok(DeleteMusicResponse {
            message: DELETE_SUCCESS_MESSAGE.to_string(),
        })
    }

    /// Every music record under a genre, unpaginated
    pub async fn get_by_genre(&self, genre_id: GenreId) -> Result<Vec<MusicDto>> {
        let music = self
            .storage
            .find_music_by_genre_id_with_genre(genre_id)
            .await?;

        Ok(music.iter().map(MusicDto::from).collect())
    }
}

async fn apply_update(
    tx: &mut dyn CatalogTransaction,
    id: MusicId,
    request: UpdateMusicRequest,
) -> catalog_core::Result<Music> {
    let mut music = tx
        .find_music_by_id_with_genre(id)
        .await?
        .ok_or_else(|| CatalogError::not_found("Music", id))?;

    let genre = tx
        .find_genre_by_id(request.genre_id)
        .await?
        .ok_or_else(|| CatalogError::not_found("Genre", request.genre_id))?;

    music.name = request.name;
    music.genre = GenreRef::Present(genre);

    tx.update_music(&music).await
}
