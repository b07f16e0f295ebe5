pub mod director;
pub mod genre;
pub mod health;
pub mod movie;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree, mounted at the server root.
///
/// ```text
/// /movies/                   list (filter or page), create
/// /movies/{id}               get, replace, delete
///
/// /directors/                list, create
/// /directors/{id}            get, replace, delete
///
/// /genres/                   list, create
/// /genres/{id}               get, replace, delete
/// ```
///
/// Collection routes answer with and without the trailing slash.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(movie::router())
        .merge(director::router())
        .merge(genre::router())
}
