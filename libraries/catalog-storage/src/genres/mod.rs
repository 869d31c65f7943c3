use catalog_core::{error::Result, types::*, CatalogError};
use sqlx::{FromRow, SqliteConnection};

#[derive(Debug, FromRow)]
struct GenreRow {
    id: i64,
    name: String,
}

impl From<GenreRow> for Genre {
    fn from(row: GenreRow) -> Self {
        Genre {
            id: row.id,
            name: row.name,
        }
    }
}

pub async fn get_all(conn: &mut SqliteConnection) -> Result<Vec<Genre>> {
    let rows = sqlx::query_as::<_, GenreRow>(
        "SELECT id, name
         FROM genres
         ORDER BY name",
    )
    .fetch_all(&mut *conn)
    .await?;

    Ok(rows.into_iter().map(Genre::from).collect())
}

/// Get a genre by ID; `None` when no row matches
pub async fn get_by_id(conn: &mut SqliteConnection, id: GenreId) -> Result<Option<Genre>> {
    let row = sqlx::query_as::<_, GenreRow>(
        "SELECT id, name
         FROM genres
         WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(&mut *conn)
    .await?;

    Ok(row.map(Genre::from))
}

/// Insert a genre
///
/// Blank names fail with `InvalidArgument`, taken names with `Duplicate`.
pub async fn create(conn: &mut SqliteConnection, genre: CreateGenre) -> Result<Genre> {
    let result = sqlx::query(
        "INSERT INTO genres (name)
         VALUES (?)",
    )
    .bind(&genre.name)
    .execute(&mut *conn)
    .await?;

    let id = result.last_insert_rowid();

    get_by_id(conn, id)
        .await?
        .ok_or_else(|| CatalogError::storage("Failed to retrieve created genre"))
}
