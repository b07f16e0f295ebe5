//! Genre entity model and DTOs.

use moviedb_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A genre row from the `genre` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Genre {
    pub id: DbId,
    pub name: Option<String>,
}

/// Client-supplied genre fields, for create and full replace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GenreInput {
    pub name: Option<String>,
}
