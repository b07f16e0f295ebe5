//! Route definitions for the `/genres` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::genre;
use crate::state::AppState;

/// Routes for `/genres`.
///
/// ```text
/// GET    /genres/          -> list
/// POST   /genres/          -> create
/// GET    /genres/{id}      -> get_by_id
/// PUT    /genres/{id}      -> replace
/// DELETE /genres/{id}      -> delete
/// ```
pub fn router() -> Router<AppState> {
    let collection = get(genre::list).post(genre::create);

    Router::new()
        .route("/genres", collection.clone())
        .route("/genres/", collection)
        .route(
            "/genres/{id}",
            get(genre::get_by_id)
                .put(genre::replace)
                .delete(genre::delete),
        )
}
