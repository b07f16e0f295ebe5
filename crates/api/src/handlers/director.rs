//! Handlers for the `/directors` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use moviedb_core::error::CoreError;
use moviedb_core::types::DbId;
use moviedb_db::models::director::{Director, DirectorInput};
use moviedb_db::repositories::DirectorRepo;

use super::require_rows;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /directors/
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Director>>> {
    let directors = DirectorRepo::list(&state.pool).await?;
    Ok(Json(require_rows("Director", directors)?))
}

/// POST /directors/
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<DirectorInput>,
) -> AppResult<StatusCode> {
    let director = DirectorRepo::create(&state.pool, &input).await?;
    tracing::info!(director_id = director.id, "Director created");
    Ok(StatusCode::CREATED)
}

/// GET /directors/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Director>> {
    let director = DirectorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Director",
            id,
        }))?;
    Ok(Json(director))
}

/// PUT /directors/{id}
pub async fn replace(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<DirectorInput>,
) -> AppResult<StatusCode> {
    DirectorRepo::replace(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Director",
            id,
        }))?;
    tracing::info!(director_id = id, "Director replaced");
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /directors/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = DirectorRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(director_id = id, "Director deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Director",
            id,
        }))
    }
}
