//! Outbound wire representations.
//!
//! Breeds serialize straight from their row. Dogs need translating: stored
//! choice keys become labels and the breed is rendered as its title.

use kennel_core::choices::{to_representation, Behavior, Sex};
use kennel_core::types::{DbId, Timestamp};
use kennel_db::models::dog::Dog;
use serde::Serialize;

/// Wire representation of a dog.
#[derive(Debug, Serialize)]
pub struct DogResponse {
    pub id: DbId,
    pub name: String,
    /// Label, e.g. `"Male"`.
    pub sex: String,
    pub coat_color: Option<String>,
    /// Label, e.g. `"Playful"`.
    pub behavior: String,
    /// Breed title, or `null` when the dog has no breed.
    pub breed: Option<String>,
    pub age: i32,
    pub pub_date: Timestamp,
}

impl From<Dog> for DogResponse {
    fn from(dog: Dog) -> Self {
        Self {
            sex: to_representation::<Sex>(&dog.sex).to_string(),
            behavior: to_representation::<Behavior>(&dog.behavior).to_string(),
            id: dog.id,
            name: dog.name,
            coat_color: dog.coat_color,
            breed: dog.breed_title,
            age: dog.age,
            pub_date: dog.pub_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(sex: &str, behavior: &str, breed_title: Option<&str>) -> Dog {
        Dog {
            id: 1,
            name: "Jack".to_string(),
            sex: sex.to_string(),
            coat_color: Some("brown".to_string()),
            behavior: behavior.to_string(),
            breed_id: breed_title.map(|_| 3),
            breed_title: breed_title.map(str::to_string),
            age: 4,
            pub_date: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn keys_render_as_labels() {
        let response = DogResponse::from(row("FEMALE", "PLAYFUL", Some("Akita")));
        assert_eq!(response.sex, "Female");
        assert_eq!(response.behavior, "Playful");
        assert_eq!(response.breed.as_deref(), Some("Akita"));
    }

    #[test]
    fn serialized_fields_match_wire_shape() {
        let json = serde_json::to_value(DogResponse::from(row("MALE", "CALM", None))).unwrap();
        let mut keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(
            keys,
            vec!["age", "behavior", "breed", "coat_color", "id", "name", "pub_date", "sex"]
        );
        assert!(json["breed"].is_null());
    }
}
