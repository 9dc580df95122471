//! Route definitions for breeds.

use axum::routing::get;
use axum::Router;

use crate::handlers::{breed, dog};
use crate::state::AppState;

/// Breed routes, with their trailing slashes.
///
/// ```text
/// GET    /breeds/             -> list
/// POST   /breeds/             -> create
/// GET    /breeds/{id}/        -> get_by_id
/// PUT    /breeds/{id}/        -> update
/// DELETE /breeds/{id}/        -> delete
/// GET    /breeds/{id}/dogs/   -> dog::list_for_breed
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/breeds/", get(breed::list).post(breed::create))
        .route(
            "/breeds/{id}/",
            get(breed::get_by_id)
                .put(breed::update)
                .delete(breed::delete),
        )
        .route("/breeds/{id}/dogs/", get(dog::list_for_breed))
}
