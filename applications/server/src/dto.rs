/// Transport-facing data shapes
use catalog_core::{GenreId, Music, MusicId, Page};
use serde::{Deserialize, Serialize};

/// A music record as returned to clients, with the genre flattened to its name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MusicDto {
    pub id: MusicId,
    pub name: String,
    pub genre_name: Option<String>,
}

impl From<&Music> for MusicDto {
    fn from(music: &Music) -> Self {
        Self {
            id: music.id,
            name: music.name.clone(),
            genre_name: music.genre.name().map(str::to_string),
        }
    }
}

impl From<Music> for MusicDto {
    fn from(music: Music) -> Self {
        Self::from(&music)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMusicRequest {
    pub name: String,
    pub genre_id: GenreId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMusicRequest {
    pub name: String,
    pub genre_id: GenreId,
}

/// One page of music plus the store's page metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationResponse {
    pub content: Vec<MusicDto>,
    pub page_no: u32,
    pub page_size: u32,
    pub total_elements: u64,
    pub total_pages: u64,
    pub last: bool,
}

impl From<Page<Music>> for PaginationResponse {
    fn from(page: Page<Music>) -> Self {
        let total_pages = page.total_pages();
        let last = page.is_last();
        let page = page.map(|music| MusicDto::from(&music));

        Self {
            content: page.content,
            page_no: page.page_no,
            page_size: page.page_size,
            total_elements: page.total_elements,
            total_pages,
            last,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteMusicResponse {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGenreRequest {
    pub name: String,
}
