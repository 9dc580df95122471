//! Repository for the `dogs` table.

use kennel_core::choices::Choice;
use kennel_core::search::contains_pattern;
use kennel_core::types::DbId;
use sqlx::PgPool;

use crate::models::dog::{Dog, DogInput};
use crate::resolution::resolve_breed;

/// Select list and join shared by every read; yields [`Dog`] rows.
const SELECT_JOINED: &str = "\
    SELECT d.id, d.name, d.sex, d.coat_color, d.behavior, \
           d.breed_id, b.title AS breed_title, d.age, d.pub_date, d.updated_at \
    FROM dogs d \
    LEFT JOIN breeds b ON b.id = d.breed_id";

/// Default list ordering: most recently created first.
const ORDER_BY: &str = "ORDER BY d.pub_date DESC, d.id DESC";

/// Provides CRUD operations for dogs.
pub struct DogRepo;

impl DogRepo {
    /// Insert a new dog, resolving its breed in the same transaction.
    pub async fn create(pool: &PgPool, input: &DogInput) -> Result<Dog, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let breed_id = Self::resolve_breed_id(&mut tx, input).await?;

        let (id,): (DbId,) = sqlx::query_as(
            "INSERT INTO dogs (name, sex, coat_color, behavior, breed_id, age) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING id",
        )
        .bind(&input.name)
        .bind(input.sex.key())
        .bind(&input.coat_color)
        .bind(input.behavior.key())
        .bind(breed_id)
        .bind(input.age)
        .fetch_one(&mut *tx)
        .await?;

        let dog = Self::find_in(&mut tx, id).await?.ok_or(sqlx::Error::RowNotFound)?;
        tx.commit().await?;
        Ok(dog)
    }

    /// Find a dog by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Dog>, sqlx::Error> {
        let query = format!("{SELECT_JOINED} WHERE d.id = $1");
        sqlx::query_as::<_, Dog>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List dogs, newest first, optionally filtered to names containing
    /// `search` (case-insensitive).
    pub async fn list(pool: &PgPool, search: Option<&str>) -> Result<Vec<Dog>, sqlx::Error> {
        let pattern = search.and_then(contains_pattern);
        let query =
            format!("{SELECT_JOINED} WHERE ($1::TEXT IS NULL OR d.name ILIKE $1) {ORDER_BY}");
        sqlx::query_as::<_, Dog>(&query)
            .bind(pattern)
            .fetch_all(pool)
            .await
    }

    /// List the dogs referencing a breed, newest first.
    pub async fn list_by_breed(pool: &PgPool, breed_id: DbId) -> Result<Vec<Dog>, sqlx::Error> {
        let query = format!("{SELECT_JOINED} WHERE d.breed_id = $1 {ORDER_BY}");
        sqlx::query_as::<_, Dog>(&query)
            .bind(breed_id)
            .fetch_all(pool)
            .await
    }

    /// Replace every writable field of a dog. `pub_date` is left untouched.
    ///
    /// The breed is re-resolved even if it matches the current one. Returns
    /// `None` if no row with the given `id` exists; the transaction is then
    /// rolled back, so no breed is created either.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &DogInput,
    ) -> Result<Option<Dog>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let breed_id = Self::resolve_breed_id(&mut tx, input).await?;

        let updated = sqlx::query(
            "UPDATE dogs SET \
                name = $2, sex = $3, coat_color = $4, behavior = $5, breed_id = $6, age = $7 \
             WHERE id = $1",
        )
        .bind(id)
        .bind(&input.name)
        .bind(input.sex.key())
        .bind(&input.coat_color)
        .bind(input.behavior.key())
        .bind(breed_id)
        .bind(input.age)
        .execute(&mut *tx)
        .await?;

        if updated.rows_affected() == 0 {
            return Ok(None);
        }

        let dog = Self::find_in(&mut tx, id).await?;
        tx.commit().await?;
        Ok(dog)
    }

    /// Delete a dog by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM dogs WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    async fn resolve_breed_id(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        input: &DogInput,
    ) -> Result<Option<DbId>, sqlx::Error> {
        match input.breed.as_deref() {
            Some(title) => Ok(Some(resolve_breed(tx, title).await?.id)),
            None => Ok(None),
        }
    }

    async fn find_in(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        id: DbId,
    ) -> Result<Option<Dog>, sqlx::Error> {
        let query = format!("{SELECT_JOINED} WHERE d.id = $1");
        sqlx::query_as::<_, Dog>(&query)
            .bind(id)
            .fetch_optional(&mut **tx)
            .await
    }
}
