//! Breed entity model and DTOs.

use kennel_core::breed::BreedPayload;
use kennel_core::types::{DbId, Timestamp};
use kennel_core::validation::trimmed;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `breeds` table.
///
/// Serializes directly as the wire representation; bookkeeping timestamps
/// are not exposed.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Breed {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    #[serde(skip)]
    pub created_at: Timestamp,
    #[serde(skip)]
    pub updated_at: Timestamp,
}

/// DTO for creating or fully replacing a breed.
///
/// `title` is stored normalized by the repository regardless of its casing here.
#[derive(Debug, Clone)]
pub struct BreedInput {
    pub title: String,
    pub description: Option<String>,
}

impl From<BreedPayload> for BreedInput {
    fn from(payload: BreedPayload) -> Self {
        Self {
            title: payload.title.unwrap_or_default().trim().to_string(),
            description: trimmed(payload.description),
        }
    }
}
