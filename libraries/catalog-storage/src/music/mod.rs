//! Music queries
//!
//! Every read joins the genre so callers never issue a second lookup.

use catalog_core::{error::Result, types::*, CatalogError};
use sqlx::{FromRow, SqliteConnection};

const SELECT_WITH_GENRE: &str = "SELECT m.id, m.name, g.id AS genre_id, g.name AS genre_name
     FROM musics m
     LEFT JOIN genres g ON g.id = m.genre_id";

#[derive(Debug, FromRow)]
struct MusicRow {
    id: i64,
    name: String,
    genre_id: Option<i64>,
    genre_name: Option<String>,
}

impl From<MusicRow> for Music {
    fn from(row: MusicRow) -> Self {
        let genre = match (row.genre_id, row.genre_name) {
            (Some(id), Some(name)) => GenreRef::Present(Genre { id, name }),
            _ => GenreRef::Absent,
        };

        Music {
            id: row.id,
            name: row.name,
            genre,
        }
    }
}

/// Insert a new music record
///
/// Precondition: `music.genre_id` references an existing genre (enforced by
/// the foreign key; a dangling ID fails with `InvalidArgument`).
/// Postcondition: the returned record carries the resolved genre.
pub async fn insert(conn: &mut SqliteConnection, music: NewMusic) -> Result<Music> {
    let result = sqlx::query(
        "INSERT INTO musics (name, genre_id)
         VALUES (?, ?)",
    )
    .bind(&music.name)
    .bind(music.genre_id)
    .execute(&mut *conn)
    .await?;

    let id = result.last_insert_rowid();

    find_by_id_with_genre(conn, id)
        .await?
        .ok_or_else(|| CatalogError::storage("Failed to retrieve created music"))
}

/// Persist the name and genre of an existing record
///
/// Fails with `NotFound` when no row has `music.id`.
pub async fn update(conn: &mut SqliteConnection, music: &Music) -> Result<Music> {
    let result = sqlx::query(
        "UPDATE musics
         SET name = ?, genre_id = ?, updated_at = datetime('now')
         WHERE id = ?",
    )
    .bind(&music.name)
    .bind(music.genre.id())
    .bind(music.id)
    .execute(&mut *conn)
    .await?;

    if result.rows_affected() == 0 {
        return Err(CatalogError::not_found("Music", music.id));
    }

    find_by_id_with_genre(conn, music.id)
        .await?
        .ok_or_else(|| CatalogError::storage("Failed to retrieve updated music"))
}

/// Fetch one page of music records ordered by ID, plus the total count
pub async fn find_all_with_genre(
    conn: &mut SqliteConnection,
    request: PageRequest,
) -> Result<Page<Music>> {
    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM musics")
        .fetch_one(&mut *conn)
        .await?;

    // SQLite reads a negative OFFSET as zero; saturate so far pages stay empty
    let offset = i64::try_from(request.offset()).unwrap_or(i64::MAX);

    let rows = sqlx::query_as::<_, MusicRow>(&format!(
        "{SELECT_WITH_GENRE}
         ORDER BY m.id
         LIMIT ? OFFSET ?"
    ))
    .bind(i64::from(request.page_size()))
    .bind(offset)
    .fetch_all(&mut *conn)
    .await?;

    let content = rows.into_iter().map(Music::from).collect();

    Ok(Page::new(content, request, total as u64))
}

pub async fn find_by_id_with_genre(
    conn: &mut SqliteConnection,
    id: MusicId,
) -> Result<Option<Music>> {
    let row = sqlx::query_as::<_, MusicRow>(&format!(
        "{SELECT_WITH_GENRE}
         WHERE m.id = ?"
    ))
    .bind(id)
    .fetch_optional(&mut *conn)
    .await?;

    Ok(row.map(Music::from))
}

/// All records referencing `genre_id`, ordered by ID
pub async fn find_by_genre_id_with_genre(
    conn: &mut SqliteConnection,
    genre_id: GenreId,
) -> Result<Vec<Music>> {
    let rows = sqlx::query_as::<_, MusicRow>(&format!(
        "{SELECT_WITH_GENRE}
         WHERE m.genre_id = ?
         ORDER BY m.id"
    ))
    .bind(genre_id)
    .fetch_all(&mut *conn)
    .await?;

    Ok(rows.into_iter().map(Music::from).collect())
}

pub async fn exists_by_id(conn: &mut SqliteConnection, id: MusicId) -> Result<bool> {
    let exists: i64 = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM musics WHERE id = ?)")
        .bind(id)
        .fetch_one(&mut *conn)
        .await?;

    Ok(exists != 0)
}

/// Delete a record; deleting a missing ID is a no-op
pub async fn delete_by_id(conn: &mut SqliteConnection, id: MusicId) -> Result<()> {
    sqlx::query("DELETE FROM musics WHERE id = ?")
        .bind(id)
        .execute(&mut *conn)
        .await?;

    Ok(())
}
