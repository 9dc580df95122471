//! Request extractors.

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use kennel_core::error::CoreError;
use kennel_core::types::DbId;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// JSON body extractor that runs [`Validate`] before the handler sees the value.
///
/// Malformed JSON (or a wrong JSON type for a field) becomes
/// [`AppError::BadRequest`]; field-level failures become
/// [`CoreError::InvalidFields`]. Either way the response is a 400 and no
/// write has happened yet.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        value.validate().map_err(CoreError::from)?;
        Ok(Self(value))
    }
}

/// Record id taken from the `{id}` path segment.
///
/// An id that does not parse as a [`DbId`] (`abc`, or a number too large)
/// cannot name any stored record, so it is answered like a missing one:
/// a JSON 404 rather than axum's plain-text 400.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdPath(pub DbId);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<DbId>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(error = %rejection.body_text(), "Unusable id in path");
                AppError::NotFound("Not found.".to_string())
            })?;
        Ok(Self(id))
    }
}
