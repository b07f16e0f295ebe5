//! Handlers for the `/genres` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use moviedb_core::error::CoreError;
use moviedb_core::types::DbId;
use moviedb_db::models::genre::{Genre, GenreInput};
use moviedb_db::repositories::GenreRepo;

use super::require_rows;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /genres/
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Genre>>> {
    let genres = GenreRepo::list(&state.pool).await?;
    Ok(Json(require_rows("Genre", genres)?))
}

/// POST /genres/
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<GenreInput>,
) -> AppResult<StatusCode> {
    let genre = GenreRepo::create(&state.pool, &input).await?;
    tracing::info!(genre_id = genre.id, "Genre created");
    Ok(StatusCode::CREATED)
}

/// GET /genres/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Genre>> {
    let genre = GenreRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Genre",
            id,
        }))?;
    Ok(Json(genre))
}

/// PUT /genres/{id}
pub async fn replace(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<GenreInput>,
) -> AppResult<StatusCode> {
    GenreRepo::replace(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Genre",
            id,
        }))?;
    tracing::info!(genre_id = id, "Genre replaced");
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /genres/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = GenreRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(genre_id = id, "Genre deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Genre",
            id,
        }))
    }
}
