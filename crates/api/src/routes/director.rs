//! Route definitions for the `/directors` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::director;
use crate::state::AppState;

/// Routes for `/directors`.
///
/// ```text
/// GET    /directors/          -> list
/// POST   /directors/          -> create
/// GET    /directors/{id}      -> get_by_id
/// PUT    /directors/{id}      -> replace
/// DELETE /directors/{id}      -> delete
/// ```
pub fn router() -> Router<AppState> {
    let collection = get(director::list).post(director::create);

    Router::new()
        .route("/directors", collection.clone())
        .route("/directors/", collection)
        .route(
            "/directors/{id}",
            get(director::get_by_id)
                .put(director::replace)
                .delete(director::delete),
        )
}
