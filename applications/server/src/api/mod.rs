/// API route modules
pub mod genres;
pub mod health;
pub mod music;

use crate::state::AppState;
use axum::{
    routing::get,
    Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Build the HTTP router with every route nested under `/api`
pub fn router(app_state: AppState) -> Router {
    let routes = Router::new()
        .route("/health", get(health::health))
        // Music
        .route("/music", get(music::list_music).post(music::create_music))
        .route(
            "/music/:id",
            get(music::get_music)
                .put(music::update_music)
                .delete(music::delete_music),
        )
        .route("/music/genre/:genre_id", get(music::get_music_by_genre))
        // Genres
        .route("/genres", get(genres::list_genres).post(genres::create_genre));

    Router::new()
        .nest("/api", routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
