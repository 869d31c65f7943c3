use crate::{genres, music};
use async_trait::async_trait;
use catalog_core::{
    error::Result,
    storage::{CatalogStorage, CatalogTransaction},
    types::*,
};
use sqlx::{Sqlite, SqlitePool, Transaction};

/// Local storage context using `SQLite`
#[derive(Debug, Clone)]
pub struct LocalStorageContext {
    pool: SqlitePool,
}

impl LocalStorageContext {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl CatalogStorage for LocalStorageContext {
    // Genres
    async fn find_genre_by_id(&self, id: GenreId) -> Result<Option<Genre>> {
        let mut conn = self.pool.acquire().await?;
        genres::get_by_id(&mut conn, id).await
    }

    async fn get_all_genres(&self) -> Result<Vec<Genre>> {
        let mut conn = self.pool.acquire().await?;
        genres::get_all(&mut conn).await
    }

    async fn create_genre(&self, genre: CreateGenre) -> Result<Genre> {
        let mut conn = self.pool.acquire().await?;
        genres::create(&mut conn, genre).await
    }

    // Music
    async fn insert_music(&self, new_music: NewMusic) -> Result<Music> {
        let mut conn = self.pool.acquire().await?;
        music::insert(&mut conn, new_music).await
    }

    async fn find_all_music_with_genre(&self, request: PageRequest) -> Result<Page<Music>> {
        let mut conn = self.pool.acquire().await?;
        music::find_all_with_genre(&mut conn, request).await
    }

    async fn find_music_by_id_with_genre(&self, id: MusicId) -> Result<Option<Music>> {
        let mut conn = self.pool.acquire().await?;
        music::find_by_id_with_genre(&mut conn, id).await
    }

    async fn find_music_by_genre_id_with_genre(&self, genre_id: GenreId) -> Result<Vec<Music>> {
        let mut conn = self.pool.acquire().await?;
        music::find_by_genre_id_with_genre(&mut conn, genre_id).await
    }

    async fn begin(&self) -> Result<Box<dyn CatalogTransaction>> {
        let tx = self.pool.begin().await?;
        Ok(Box::new(LocalTransaction { tx }))
    }
}

/// An open `SQLite` transaction; rolls back when dropped uncommitted
pub struct LocalTransaction {
    tx: Transaction<'static, Sqlite>,
}

#[async_trait]
impl CatalogTransaction for LocalTransaction {
    async fn find_genre_by_id(&mut self, id: GenreId) -> Result<Option<Genre>> {
        genres::get_by_id(&mut self.tx, id).await
    }

    async fn find_music_by_id_with_genre(&mut self, id: MusicId) -> Result<Option<Music>> {
        music::find_by_id_with_genre(&mut self.tx, id).await
    }

    async fn update_music(&mut self, record: &Music) -> Result<Music> {
        music::update(&mut self.tx, record).await
    }

    async fn music_exists(&mut self, id: MusicId) -> Result<bool> {
        music::exists_by_id(&mut self.tx, id).await
    }

    async fn delete_music_by_id(&mut self, id: MusicId) -> Result<()> {
        music::delete_by_id(&mut self.tx, id).await
    }

    async fn commit(self: Box<Self>) -> Result<()> {
        self.tx.commit().await?;
        Ok(())
    }
}
