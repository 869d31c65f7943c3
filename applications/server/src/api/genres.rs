/// Genres API routes
use crate::{dto::CreateGenreRequest, error::Result, state::AppState};
use axum::{extract::State, http::StatusCode, Json};
use catalog_core::{CreateGenre, Genre};

/// GET /api/genres
pub async fn list_genres(State(app_state): State<AppState>) -> Result<Json<Vec<Genre>>> {
    let genres = app_state.storage.get_all_genres().await?;
    Ok(Json(genres))
}

/// POST /api/genres
pub async fn create_genre(
    State(app_state): State<AppState>,
    Json(req): Json<CreateGenreRequest>,
) -> Result<(StatusCode, Json<Genre>)> {
    let genre = app_state
        .storage
        .create_genre(CreateGenre { name: req.name })
        .await?;

    tracing::info!(genre_id = genre.id, name = %genre.name, "Created genre");

    Ok((StatusCode::CREATED, Json(genre)))
}
