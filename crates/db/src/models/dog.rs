//! Dog entity model and DTOs.

use kennel_core::choices::{Behavior, Sex};
use kennel_core::dog::DogPayload;
use kennel_core::types::{DbId, Timestamp};
use kennel_core::validation::trimmed;
use sqlx::FromRow;

/// A row from the `dogs` table joined with its breed title.
///
/// `sex` and `behavior` hold stored keys (`"MALE"`), not wire labels.
#[derive(Debug, Clone, FromRow)]
pub struct Dog {
    pub id: DbId,
    pub name: String,
    pub sex: String,
    pub coat_color: Option<String>,
    pub behavior: String,
    pub breed_id: Option<DbId>,
    pub breed_title: Option<String>,
    pub age: i32,
    pub pub_date: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating or fully replacing a dog.
///
/// `breed` is the submitted title; it is resolved to a breed row (found or
/// created) inside the same transaction that writes the dog.
#[derive(Debug, Clone)]
pub struct DogInput {
    pub name: String,
    pub sex: Sex,
    pub coat_color: Option<String>,
    pub behavior: Behavior,
    pub breed: Option<String>,
    pub age: i32,
}

impl From<DogPayload> for DogInput {
    fn from(payload: DogPayload) -> Self {
        let sex = payload.sex();
        let behavior = payload.behavior();
        Self {
            name: payload.name.unwrap_or_default().trim().to_string(),
            sex,
            coat_color: trimmed(payload.coat_color),
            behavior,
            breed: trimmed(payload.breed),
            age: payload
                .age
                .and_then(|age| i32::try_from(age).ok())
                .unwrap_or_default(),
        }
    }
}
