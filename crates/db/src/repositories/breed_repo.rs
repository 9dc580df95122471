//! Repository for the `breeds` table.

use kennel_core::breed::normalize_title;
use kennel_core::types::DbId;
use sqlx::PgPool;

use crate::models::breed::{Breed, BreedInput};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, created_at, updated_at";

/// Name of the unique constraint on `breeds.title`.
pub const TITLE_UNIQUE_CONSTRAINT: &str = "uq_breeds_title";

/// How many insert-then-lookup rounds `find_or_create_in` makes before giving up.
///
/// A second round is only needed when a concurrent transaction deletes the
/// conflicting row between our insert and our lookup.
const FIND_OR_CREATE_ATTEMPTS: usize = 3;

/// Provides CRUD and find-or-create operations for breeds.
pub struct BreedRepo;

impl BreedRepo {
    /// Insert a new breed with a normalized title, returning the created row.
    ///
    /// A title that collides with an existing breed after normalization fails
    /// with a unique violation on [`TITLE_UNIQUE_CONSTRAINT`].
    pub async fn create(pool: &PgPool, input: &BreedInput) -> Result<Breed, sqlx::Error> {
        let query = format!(
            "INSERT INTO breeds (title, description) \
             VALUES ($1, $2) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Breed>(&query)
            .bind(normalize_title(&input.title))
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find a breed by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Breed>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM breeds WHERE id = $1");
        sqlx::query_as::<_, Breed>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a breed by exact (already normalized) title.
    pub async fn find_by_title(pool: &PgPool, title: &str) -> Result<Option<Breed>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM breeds WHERE title = $1");
        sqlx::query_as::<_, Breed>(&query)
            .bind(title)
            .fetch_optional(pool)
            .await
    }

    /// List all breeds in creation order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Breed>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM breeds ORDER BY id ASC");
        sqlx::query_as::<_, Breed>(&query).fetch_all(pool).await
    }

    /// Replace a breed's title (normalized) and description.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &BreedInput,
    ) -> Result<Option<Breed>, sqlx::Error> {
        let query = format!(
            "UPDATE breeds SET title = $2, description = $3 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Breed>(&query)
            .bind(id)
            .bind(normalize_title(&input.title))
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Delete a breed by ID, cascading to its dogs. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM breeds WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Find the breed with the normalized form of `title`, creating it with
    /// no description if absent.
    pub async fn find_or_create(pool: &PgPool, title: &str) -> Result<Breed, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let breed = Self::find_or_create_in(&mut tx, title).await?;
        tx.commit().await?;
        Ok(breed)
    }

    /// Find-or-create within an existing transaction.
    ///
    /// Uses `INSERT .. ON CONFLICT DO NOTHING` followed by a lookup, so two
    /// transactions resolving the same new title never fail on the unique
    /// constraint: the loser of the race waits for the winner and then reads
    /// the winner's row.
    pub async fn find_or_create_in(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        title: &str,
    ) -> Result<Breed, sqlx::Error> {
        let title = normalize_title(title);
        let insert = format!(
            "INSERT INTO breeds (title) VALUES ($1) \
             ON CONFLICT (title) DO NOTHING \
             RETURNING {COLUMNS}"
        );
        let select = format!("SELECT {COLUMNS} FROM breeds WHERE title = $1");

        for _ in 0..FIND_OR_CREATE_ATTEMPTS {
            let created = sqlx::query_as::<_, Breed>(&insert)
                .bind(&title)
                .fetch_optional(&mut **tx)
                .await?;
            if let Some(breed) = created {
                tracing::info!(id = breed.id, title = %breed.title, "Breed created on demand");
                return Ok(breed);
            }

            let existing = sqlx::query_as::<_, Breed>(&select)
                .bind(&title)
                .fetch_optional(&mut **tx)
                .await?;
            if let Some(breed) = existing {
                return Ok(breed);
            }
            tracing::debug!(%title, "Conflicting breed vanished before lookup, retrying");
        }

        Err(sqlx::Error::RowNotFound)
    }
}
