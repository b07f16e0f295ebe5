//! Handlers for the `/movies` resource.
//!
//! The collection route either filters by `director_id` / `genre_id` or
//! pages through all movies with `limit` / `start`; see
//! [`MovieListQuery::resolve`].

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use moviedb_core::error::CoreError;
use moviedb_core::movie_query::MovieListQuery;
use moviedb_core::types::DbId;
use moviedb_db::models::movie::{Movie, MovieInput};
use moviedb_db::repositories::MovieRepo;

use super::require_rows;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /movies/
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<MovieListQuery>,
) -> AppResult<Json<Vec<Movie>>> {
    let selection = query.resolve();
    tracing::debug!(?selection, "Listing movies");
    let movies = MovieRepo::list(&state.pool, selection).await?;
    Ok(Json(require_rows("Movie", movies)?))
}

/// POST /movies/
///
/// Responds with a bare 201; the new ID is not echoed back.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<MovieInput>,
) -> AppResult<StatusCode> {
    let movie = MovieRepo::create(&state.pool, &input).await?;
    tracing::info!(movie_id = movie.id, "Movie created");
    Ok(StatusCode::CREATED)
}

/// GET /movies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Movie>> {
    let movie = MovieRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Movie",
            id,
        }))?;
    Ok(Json(movie))
}

/// PUT /movies/{id}
///
/// Full replace: fields missing from the body are cleared.
pub async fn replace(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<MovieInput>,
) -> AppResult<StatusCode> {
    MovieRepo::replace(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Movie",
            id,
        }))?;
    tracing::info!(movie_id = id, "Movie replaced");
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /movies/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = MovieRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(movie_id = id, "Movie deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Movie",
            id,
        }))
    }
}
