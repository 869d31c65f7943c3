//! Music Catalog Storage
//!
//! `SQLite` database layer for the music catalog.
//!
//! # Architecture
//!
//! - **Vertical Slicing**: Each table owns its own queries (`genres`, `music`)
//! - **Connection-Agnostic Queries**: Query functions take a
//!   `&mut SqliteConnection`, so the same function runs on a pooled
//!   connection or inside a transaction
//! - **Eager Genres**: Every music read joins its genre
//!
//! # Example
//!
//! ```rust,no_run
//! use catalog_storage::{LocalStorageContext, create_pool, run_migrations};
//! use catalog_core::{CatalogStorage, PageRequest};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create database connection
//! let pool = create_pool("sqlite://catalog.db", 5).await?;
//! run_migrations(&pool).await?;
//!
//! let storage = LocalStorageContext::new(pool);
//!
//! // First page of ten
//! let page = storage.find_all_music_with_genre(PageRequest::new(0, 10)?).await?;
//! # Ok(())
//! # }
//! ```

mod context;

// Vertical slices
pub mod genres;
pub mod music;

pub use context::{LocalStorageContext, LocalTransaction};

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// This should be called once when the application starts to ensure
/// the database schema is up to date.
///
/// # Errors
///
/// Returns an error if migrations fail to run
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://catalog.db>`)
/// * `max_connections` - Upper bound on pooled connections
///
/// # Errors
///
/// Returns an error if the connection fails
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    tracing::debug!(database_url, "Creating SQLite pool");

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .foreign_keys(true)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    tracing::debug!(max_connections, "SQLite pool created");

    Ok(pool)
}
