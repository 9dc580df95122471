//! Handlers for the `/dogs` resource.
//!
//! Create and update resolve the submitted breed title to a breed row
//! (finding or creating it) in the same transaction that writes the dog.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use kennel_core::dog::DogPayload;
use kennel_core::error::CoreError;
use kennel_core::types::DbId;
use kennel_db::models::dog::{Dog, DogInput};
use kennel_db::repositories::DogRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{IdPath, ValidatedJson};
use crate::query::SearchParams;
use crate::response::DogResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Dog", id })
}

fn render(dogs: Vec<Dog>) -> Vec<DogResponse> {
    dogs.into_iter().map(DogResponse::from).collect()
}

/// GET /api/v1/dogs/?search=
///
/// List dogs newest first, optionally filtered by name.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<impl IntoResponse> {
    let dogs = DogRepo::list(&state.pool, params.search.as_deref()).await?;
    tracing::debug!(count = dogs.len(), search = ?params.search, "Listed dogs");
    Ok(Json(render(dogs)))
}

/// GET /api/v1/dogs/{id}/
pub async fn get_by_id(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<impl IntoResponse> {
    let dog = DogRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DogResponse::from(dog)))
}

/// POST /api/v1/dogs/
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<DogPayload>,
) -> AppResult<impl IntoResponse> {
    let input = DogInput::from(payload);
    let dog = DogRepo::create(&state.pool, &input).await?;
    tracing::info!(id = dog.id, name = %dog.name, breed_id = ?dog.breed_id, "Dog created");
    Ok((StatusCode::CREATED, Json(DogResponse::from(dog))))
}

/// PUT /api/v1/dogs/{id}/
///
/// Full replace: optional fields left out fall back to their defaults.
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(payload): ValidatedJson<DogPayload>,
) -> AppResult<impl IntoResponse> {
    let input = DogInput::from(payload);
    let dog = DogRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(id = dog.id, breed_id = ?dog.breed_id, "Dog updated");
    Ok(Json(DogResponse::from(dog)))
}

/// DELETE /api/v1/dogs/{id}/
pub async fn delete(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<impl IntoResponse> {
    if !DogRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(id, "Dog deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/breeds/{id}/dogs/
///
/// Dogs referencing a breed, newest first. 404 if the breed does not exist.
pub async fn list_for_breed(
    State(state): State<AppState>,
    IdPath(breed_id): IdPath,
) -> AppResult<impl IntoResponse> {
    super::breed::ensure_breed_exists(&state.pool, breed_id).await?;
    let dogs = DogRepo::list_by_breed(&state.pool, breed_id).await?;
    tracing::debug!(breed_id, count = dogs.len(), "Listed dogs for breed");
    Ok(Json(render(dogs)))
}
