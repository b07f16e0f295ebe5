//! Repository for the `genre` table.

use moviedb_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::genre::{Genre, GenreInput};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name";

/// Provides CRUD operations for genres.
pub struct GenreRepo;

impl GenreRepo {
    /// Insert a new genre, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &GenreInput) -> Result<Genre, sqlx::Error> {
        let query = format!("INSERT INTO genre (name) VALUES (?1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Genre>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Find a genre by its ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Genre>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM genre WHERE id = ?1");
        sqlx::query_as::<_, Genre>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all genres ordered by ID.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Genre>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM genre ORDER BY id");
        sqlx::query_as::<_, Genre>(&query).fetch_all(pool).await
    }

    /// Overwrite the genre's name. An omitted name is stored as `NULL`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn replace(
        pool: &SqlitePool,
        id: DbId,
        input: &GenreInput,
    ) -> Result<Option<Genre>, sqlx::Error> {
        let query = format!("UPDATE genre SET name = ?2 WHERE id = ?1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Genre>(&query)
            .bind(id)
            .bind(&input.name)
            .fetch_optional(pool)
            .await
    }

    /// Delete a genre by ID. Returns `true` if a row was removed.
    ///
    /// Movies referencing the genre keep their now-dangling `genre_id`.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM genre WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
