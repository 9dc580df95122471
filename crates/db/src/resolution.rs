//! Breed resolution for dog writes.
//!
//! A dog payload names its breed by title. Before the dog row is written the
//! title is normalized and mapped to a breed row, creating one when no breed
//! with that title exists yet. Resolution always hits the store, even when
//! the title equals the dog's current breed.

use kennel_core::breed::normalize_title;

use crate::models::breed::Breed;
use crate::repositories::BreedRepo;

/// Resolve a submitted breed title to a stored breed inside `tx`.
pub async fn resolve_breed(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    submitted_title: &str,
) -> Result<Breed, sqlx::Error> {
    let title = normalize_title(submitted_title);
    let breed = BreedRepo::find_or_create_in(tx, &title).await?;
    tracing::debug!(submitted = submitted_title, breed_id = breed.id, "Resolved breed");
    Ok(breed)
}
