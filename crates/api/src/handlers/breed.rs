//! Handlers for the `/breeds` resource.
//!
//! Titles are normalized by the repository; a title that collides with an
//! existing breed after normalization is reported as a `title` field error.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use kennel_core::breed::BreedPayload;
use kennel_core::error::CoreError;
use kennel_core::types::DbId;
use kennel_db::models::breed::{Breed, BreedInput};
use kennel_db::repositories::breed_repo::TITLE_UNIQUE_CONSTRAINT;
use kennel_db::repositories::BreedRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{IdPath, ValidatedJson};
use crate::state::AppState;

/// Verify that a breed exists, returning the full row.
pub(crate) async fn ensure_breed_exists(pool: &sqlx::PgPool, id: DbId) -> AppResult<Breed> {
    BreedRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Breed", id }))
}

/// Turn a duplicate-title violation into a field error; pass anything else through.
fn map_title_conflict(err: sqlx::Error) -> AppError {
    if kennel_db::is_unique_violation(&err, TITLE_UNIQUE_CONSTRAINT) {
        return AppError::Core(CoreError::field(
            "title",
            "breed with this title already exists.",
        ));
    }
    AppError::Database(err)
}

/// GET /api/v1/breeds/
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let breeds = BreedRepo::list(&state.pool).await?;
    tracing::debug!(count = breeds.len(), "Listed breeds");
    Ok(Json(breeds))
}

/// GET /api/v1/breeds/{id}/
pub async fn get_by_id(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<impl IntoResponse> {
    let breed = ensure_breed_exists(&state.pool, id).await?;
    Ok(Json(breed))
}

/// POST /api/v1/breeds/
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<BreedPayload>,
) -> AppResult<impl IntoResponse> {
    let input = BreedInput::from(payload);
    let breed = BreedRepo::create(&state.pool, &input)
        .await
        .map_err(map_title_conflict)?;
    tracing::info!(id = breed.id, title = %breed.title, "Breed created");
    Ok((StatusCode::CREATED, Json(breed)))
}

/// PUT /api/v1/breeds/{id}/
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(payload): ValidatedJson<BreedPayload>,
) -> AppResult<impl IntoResponse> {
    let input = BreedInput::from(payload);
    let breed = BreedRepo::update(&state.pool, id, &input)
        .await
        .map_err(map_title_conflict)?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Breed", id }))?;
    tracing::info!(id = breed.id, title = %breed.title, "Breed updated");
    Ok(Json(breed))
}

/// DELETE /api/v1/breeds/{id}/
///
/// Removes every dog referencing the breed as well.
pub async fn delete(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<impl IntoResponse> {
    if !BreedRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound { entity: "Breed", id }));
    }
    tracing::info!(id, "Breed deleted");
    Ok(StatusCode::NO_CONTENT)
}
