pub mod director;
pub mod genre;
pub mod movie;

use moviedb_core::error::CoreError;

use crate::error::{AppError, AppResult};

/// Treat an empty listing as not-found, the way every collection route does.
pub(crate) fn require_rows<T>(entity: &'static str, rows: Vec<T>) -> AppResult<Vec<T>> {
    if rows.is_empty() {
        Err(AppError::Core(CoreError::EmptyResult { entity }))
    } else {
        Ok(rows)
    }
}
