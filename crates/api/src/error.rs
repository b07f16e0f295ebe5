use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use moviedb_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`sqlx::Error`] for store failures.
/// Not-found conditions answer with a bare 404; everything else produces a
/// JSON `{ "error", "code" }` body.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `moviedb_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(CoreError::NotFound { entity, id }) => {
                tracing::debug!(entity, id, "Entity not found");
                return StatusCode::NOT_FOUND.into_response();
            }
            AppError::Core(CoreError::EmptyResult { entity }) => {
                tracing::debug!(entity, "List matched no rows");
                return StatusCode::NOT_FOUND.into_response();
            }
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                internal_error()
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Sanitized 500 triple; the underlying cause is only logged.
fn internal_error() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}
