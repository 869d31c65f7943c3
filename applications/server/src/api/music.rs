/// Music API routes
use crate::{
    dto::{DeleteMusicResponse, MusicDto, NewMusicRequest, PaginationResponse, UpdateMusicRequest},
    error::Result,
    state::AppState,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use catalog_core::{GenreId, MusicId};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    #[serde(default)]
    pub page_no: u32,
    #[serde(default)]
    pub page_size: Option<u32>,
}

/// POST /api/music
pub async fn create_music(
    State(app_state): State<AppState>,
    Json(req): Json<NewMusicRequest>,
) -> Result<(StatusCode, Json<MusicDto>)> {
    let music = app_state.music_service.create(req).await?;
    Ok((StatusCode::CREATED, Json(music)))
}

/// GET /api/music?pageNo=&pageSize=
pub async fn list_music(
    State(app_state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<PaginationResponse>> {
    let page_size = query
        .page_size
        .unwrap_or(app_state.pagination.default_page_size);

    let page = app_state
        .music_service
        .list(query.page_no, page_size)
        .await?;
    Ok(Json(page))
}

/// GET /api/music/:id
pub async fn get_music(
    Path(id): Path<MusicId>,
    State(app_state): State<AppState>,
) -> Result<Json<MusicDto>> {
    let music = app_state.music_service.get_by_id(id).await?;
    Ok(Json(music))
}

/// PUT /api/music/:id
pub async fn update_music(
    Path(id): Path<MusicId>,
    State(app_state): State<AppState>,
    Json(req): Json<UpdateMusicRequest>,
) -> Result<Json<MusicDto>> {
    let music = app_state.music_service.update(id, req).await?;
    Ok(Json(music))
}

/// DELETE /api/music/:id
pub async fn delete_music(
    Path(id): Path<MusicId>,
    State(app_state): State<AppState>,
) -> Result<Json<DeleteMusicResponse>> {
    let response = app_state.music_service.delete(id).await?;
    Ok(Json(response))
}

/// GET /api/music/genre/:genre_id
pub async fn get_music_by_genre(
    Path(genre_id): Path<GenreId>,
    State(app_state): State<AppState>,
) -> Result<Json<Vec<MusicDto>>> {
    let music = app_state.music_service.get_by_genre(genre_id).await?;
    Ok(Json(music))
}
