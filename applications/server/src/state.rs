/// Shared application state
use crate::{config::PaginationSettings, services::MusicService};
use catalog_core::CatalogStorage;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn CatalogStorage>,
    pub music_service: Arc<MusicService>,
    pub pagination: PaginationSettings,
}

impl AppState {
    pub fn new(storage: Arc<dyn CatalogStorage>, pagination: PaginationSettings) -> Self {
        let music_service = Arc::new(MusicService::new(Arc::clone(&storage)));

        Self {
            storage,
            music_service,
            pagination,
        }
    }
}
