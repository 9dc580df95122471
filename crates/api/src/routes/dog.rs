//! Route definitions for dogs.

use axum::routing::get;
use axum::Router;

use crate::handlers::dog;
use crate::state::AppState;

/// Dog routes, with their trailing slashes.
///
/// ```text
/// GET    /dogs/         -> list
/// POST   /dogs/         -> create
/// GET    /dogs/{id}/    -> get_by_id
/// PUT    /dogs/{id}/    -> update
/// DELETE /dogs/{id}/    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/dogs/", get(dog::list).post(dog::create))
        .route(
            "/dogs/{id}/",
            get(dog::get_by_id).put(dog::update).delete(dog::delete),
        )
}
