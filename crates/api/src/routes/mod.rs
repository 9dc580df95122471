pub mod breed;
pub mod dog;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /dogs/                     list (?search=), create
/// /dogs/{id}/                get, full update, delete
///
/// /breeds/                   list, create
/// /breeds/{id}/              get, full update, delete
/// /breeds/{id}/dogs/         dogs of a breed
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(dog::router()).merge(breed::router())
}
