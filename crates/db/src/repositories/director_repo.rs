//! Repository for the `director` table.

use moviedb_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::director::{Director, DirectorInput};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name";

/// Provides CRUD operations for directors.
pub struct DirectorRepo;

impl DirectorRepo {
    /// Insert a new director. The store assigns the ID.
    pub async fn create(pool: &SqlitePool, input: &DirectorInput) -> Result<Director, sqlx::Error> {
        let query = format!("INSERT INTO director (name) VALUES (?1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Director>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Director>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM director WHERE id = ?1");
        sqlx::query_as::<_, Director>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Every director, oldest first. Directors are never paginated.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Director>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM director ORDER BY id");
        sqlx::query_as::<_, Director>(&query).fetch_all(pool).await
    }

    /// Overwrite the director's name. An omitted name is stored as `NULL`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn replace(
        pool: &SqlitePool,
        id: DbId,
        input: &DirectorInput,
    ) -> Result<Option<Director>, sqlx::Error> {
        let query = format!("UPDATE director SET name = ?2 WHERE id = ?1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Director>(&query)
            .bind(id)
            .bind(&input.name)
            .fetch_optional(pool)
            .await
    }

    /// Returns `true` if a row was removed. Movies keep a dangling
    /// `director_id`; nothing cascades.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM director WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
