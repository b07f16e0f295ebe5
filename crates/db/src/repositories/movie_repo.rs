//! Repository for the `movie` table.

use moviedb_core::movie_query::MovieSelection;
use moviedb_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::movie::{Movie, MovieInput};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, trailer, year, rating, genre_id, director_id";

/// Provides CRUD and filtered listing for movies.
pub struct MovieRepo;

impl MovieRepo {
    /// Insert a new movie, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &MovieInput) -> Result<Movie, sqlx::Error> {
        let query = format!(
            "INSERT INTO movie (title, description, trailer, year, rating, genre_id, director_id)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.trailer)
            .bind(input.year)
            .bind(input.rating)
            .bind(input.genre_id)
            .bind(input.director_id)
            .fetch_one(pool)
            .await
    }

    /// Find a movie by its ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movie WHERE id = ?1");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Run the listing described by `selection`.
    pub async fn list(
        pool: &SqlitePool,
        selection: MovieSelection,
    ) -> Result<Vec<Movie>, sqlx::Error> {
        match selection {
            MovieSelection::Filtered {
                director_id,
                genre_id,
            } => Self::list_filtered(pool, director_id, genre_id).await,
            MovieSelection::Page { limit, offset } => Self::list_page(pool, limit, offset).await,
        }
    }

    /// List every movie matching all supplied references, ordered by ID.
    ///
    /// A `None` filter places no constraint on its column.
    pub async fn list_filtered(
        pool: &SqlitePool,
        director_id: Option<DbId>,
        genre_id: Option<DbId>,
    ) -> Result<Vec<Movie>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM movie
             WHERE (?1 IS NULL OR director_id = ?1)
               AND (?2 IS NULL OR genre_id = ?2)
             ORDER BY id"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(director_id)
            .bind(genre_id)
            .fetch_all(pool)
            .await
    }

    /// List one page of movies ordered by ID.
    ///
    /// A negative `limit` leaves the page unbounded.
    pub async fn list_page(
        pool: &SqlitePool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movie ORDER BY id LIMIT ?1 OFFSET ?2");
        sqlx::query_as::<_, Movie>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Overwrite every mutable column of a movie.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn replace(
        pool: &SqlitePool,
        id: DbId,
        input: &MovieInput,
    ) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!(
            "UPDATE movie SET
                title = ?2,
                description = ?3,
                trailer = ?4,
                year = ?5,
                rating = ?6,
                genre_id = ?7,
                director_id = ?8
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.trailer)
            .bind(input.year)
            .bind(input.rating)
            .bind(input.genre_id)
            .bind(input.director_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a movie by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movie WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
