//! Director entity model and DTOs.

use moviedb_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A director row from the `director` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Director {
    pub id: DbId,
    pub name: Option<String>,
}

/// Client-supplied director fields, for create and full replace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DirectorInput {
    pub name: Option<String>,
}
