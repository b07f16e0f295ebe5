//! Movie entity model and DTOs.

use moviedb_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A movie row from the `movie` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Movie {
    pub id: DbId,
    pub title: Option<String>,
    pub description: Option<String>,
    /// Trailer URL.
    pub trailer: Option<String>,
    pub year: Option<i32>,
    pub rating: Option<f64>,
    pub genre_id: Option<DbId>,
    pub director_id: Option<DbId>,
}

/// Client-supplied movie fields.
///
/// On replace, every field is written: an omitted field becomes `NULL`.
/// `genre_id` and `director_id` are stored as given, without checking that
/// the referenced rows exist.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MovieInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub trailer: Option<String>,
    pub year: Option<i32>,
    pub rating: Option<f64>,
    pub genre_id: Option<DbId>,
    pub director_id: Option<DbId>,
}
