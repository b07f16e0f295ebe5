use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Body of `GET /health`.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok`, or `degraded` when the store is unreachable.
    pub status: &'static str,
    /// Package version of the running binary.
    pub version: &'static str,
    /// Result of a `SELECT 1` against the pool.
    pub db_healthy: bool,
}

/// GET /health
///
/// Always answers 200 so load balancers can tell a live process with a
/// broken database apart from a dead one.
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = match moviedb_db::health_check(&state.pool).await {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(error = %err, "Database health check failed");
            false
        }
    };

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
