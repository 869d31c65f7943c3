//! Common test utilities and fixtures
#![allow(dead_code)]

use catalog_core::{CatalogStorage, CreateGenre, GenreId, MusicId, NewMusic};
use catalog_server::{config::PaginationSettings, state::AppState};
use catalog_storage::LocalStorageContext;
use std::sync::Arc;
use tempfile::TempDir;

/// A migrated database in a temporary directory
pub struct TestContext {
    pub storage: Arc<LocalStorageContext>,
    _temp_dir: TempDir,
}

impl TestContext {
    /// Create a test database backed by a real SQLite file
    pub async fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let db_url = format!("sqlite://{}", temp_dir.path().join("catalog.db").display());

        let pool = catalog_storage::create_pool(&db_url, 5)
            .await
            .expect("Failed to create pool");
        catalog_storage::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        Self {
            storage: Arc::new(LocalStorageContext::new(pool)),
            _temp_dir: temp_dir,
        }
    }

    /// Application state using the default page size of 10
    pub fn app_state(&self) -> AppState {
        AppState::new(
            self.storage.clone(),
            PaginationSettings {
                default_page_size: 10,
            },
        )
    }

    pub async fn genre(&self, name: &str) -> GenreId {
        self.storage
            .create_genre(CreateGenre {
                name: name.to_string(),
            })
            .await
            .expect("Failed to create genre")
            .id
    }

    pub async fn music(&self, name: &str, genre_id: GenreId) -> MusicId {
        self.storage
            .insert_music(NewMusic {
                name: name.to_string(),
                genre_id,
            })
            .await
            .expect("Failed to create music")
            .id
    }

    pub async fn music_count(&self) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM musics")
            .fetch_one(self.storage.pool())
            .await
            .expect("Failed to count music")
    }
}
