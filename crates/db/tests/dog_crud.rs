//! Integration tests for dog persistence:
//! - Breed resolution on create and update
//! - Default ordering and name search
//! - `pub_date` immutability
//! - Delete never touching breeds

use kennel_core::choices::{Behavior, Sex};
use kennel_db::models::dog::DogInput;
use kennel_db::repositories::{BreedRepo, DogRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_dog(name: &str, breed: Option<&str>) -> DogInput {
    DogInput {
        name: name.to_string(),
        sex: Sex::Unknown,
        coat_color: None,
        behavior: Behavior::Unknown,
        breed: breed.map(str::to_string),
        age: 1,
    }
}

async fn breed_count(pool: &PgPool) -> i64 {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM breeds")
        .fetch_one(pool)
        .await
        .unwrap();
    count
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_stores_keys_and_resolves_breed(pool: PgPool) {
    let input = DogInput {
        name: "Jack".to_string(),
        sex: Sex::Male,
        coat_color: Some("brown".to_string()),
        behavior: Behavior::Calm,
        breed: Some("Labrador Retriever".to_string()),
        age: 1,
    };
    let dog = DogRepo::create(&pool, &input).await.unwrap();

    assert_eq!(dog.name, "Jack");
    assert_eq!(dog.sex, "MALE");
    assert_eq!(dog.behavior, "CALM");
    assert_eq!(dog.coat_color.as_deref(), Some("brown"));
    assert_eq!(dog.breed_title.as_deref(), Some("Labrador retriever"));
    assert_eq!(dog.age, 1);

    let breed = BreedRepo::find_by_title(&pool, "Labrador retriever")
        .await
        .unwrap()
        .expect("breed should have been created");
    assert_eq!(dog.breed_id, Some(breed.id));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_without_breed(pool: PgPool) {
    let dog = DogRepo::create(&pool, &new_dog("Stray", None)).await.unwrap();
    assert_eq!(dog.breed_id, None);
    assert_eq!(dog.breed_title, None);
    assert_eq!(dog.sex, "UNKNOWN");
    assert_eq!(dog.behavior, "UNKNOWN");
    assert_eq!(breed_count(&pool).await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_existing_breed_is_reused(pool: PgPool) {
    let a = DogRepo::create(&pool, &new_dog("Jack", Some("Labrador")))
        .await
        .unwrap();
    let b = DogRepo::create(&pool, &new_dog("Jessy", Some("LABRADOR")))
        .await
        .unwrap();
    assert_eq!(a.breed_id, b.breed_id);
    assert_eq!(breed_count(&pool).await, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_replaces_fields_and_keeps_pub_date(pool: PgPool) {
    let created = DogRepo::create(&pool, &new_dog("Jessy", Some("Labrador")))
        .await
        .unwrap();

    let input = DogInput {
        name: "Jessy".to_string(),
        sex: Sex::Female,
        coat_color: Some("black".to_string()),
        behavior: Behavior::Aggressive,
        breed: Some("sheepdog".to_string()),
        age: 5,
    };
    let updated = DogRepo::update(&pool, created.id, &input)
        .await
        .unwrap()
        .expect("dog should exist");

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.pub_date, created.pub_date);
    assert_eq!(updated.sex, "FEMALE");
    assert_eq!(updated.behavior, "AGGRESSIVE");
    assert_eq!(updated.age, 5);
    assert_eq!(updated.breed_title.as_deref(), Some("Sheepdog"));
    assert_eq!(breed_count(&pool).await, 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_without_breed_clears_it(pool: PgPool) {
    let created = DogRepo::create(&pool, &new_dog("Bobby", Some("Boxer")))
        .await
        .unwrap();
    let updated = DogRepo::update(&pool, created.id, &new_dog("Bobby", None))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.breed_id, None);
    // The breed itself is shared and stays.
    assert_eq!(breed_count(&pool).await, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_unknown_id_creates_nothing(pool: PgPool) {
    let result = DogRepo::update(&pool, 999_999, &new_dog("Ghost", Some("Phantom")))
        .await
        .unwrap();
    assert!(result.is_none());
    assert_eq!(breed_count(&pool).await, 0, "breed write must roll back");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_newest_first(pool: PgPool) {
    let first = DogRepo::create(&pool, &new_dog("First", None)).await.unwrap();
    let second = DogRepo::create(&pool, &new_dog("Second", None)).await.unwrap();
    let third = DogRepo::create(&pool, &new_dog("Third", None)).await.unwrap();

    let ids: Vec<_> = DogRepo::list(&pool, None)
        .await
        .unwrap()
        .into_iter()
        .map(|d| d.id)
        .collect();
    assert_eq!(ids, vec![third.id, second.id, first.id]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_is_case_insensitive_substring(pool: PgPool) {
    for name in ["Jack", "Jackie", "Blackjack", "Jessy", "Rex"] {
        DogRepo::create(&pool, &new_dog(name, None)).await.unwrap();
    }

    let mut names: Vec<_> = DogRepo::list(&pool, Some("JACK"))
        .await
        .unwrap()
        .into_iter()
        .map(|d| d.name)
        .collect();
    names.sort();
    assert_eq!(names, vec!["Blackjack", "Jack", "Jackie"]);

    let all = DogRepo::list(&pool, Some("  ")).await.unwrap();
    assert_eq!(all.len(), 5);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_treats_wildcards_literally(pool: PgPool) {
    DogRepo::create(&pool, &new_dog("100% Good Boy", None)).await.unwrap();
    DogRepo::create(&pool, &new_dog("Good Boy", None)).await.unwrap();

    let found = DogRepo::list(&pool, Some("%")).await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "100% Good Boy");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_by_breed(pool: PgPool) {
    let jack = DogRepo::create(&pool, &new_dog("Jack", Some("Labrador")))
        .await
        .unwrap();
    DogRepo::create(&pool, &new_dog("Bobby", Some("Boxer")))
        .await
        .unwrap();

    let breed_id = jack.breed_id.unwrap();
    let dogs = DogRepo::list_by_breed(&pool, breed_id).await.unwrap();
    assert_eq!(dogs.len(), 1);
    assert_eq!(dogs[0].id, jack.id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_dog_keeps_breed(pool: PgPool) {
    let dog = DogRepo::create(&pool, &new_dog("Jane", Some("Golden Retriever")))
        .await
        .unwrap();

    assert!(DogRepo::delete(&pool, dog.id).await.unwrap());
    assert!(DogRepo::find_by_id(&pool, dog.id).await.unwrap().is_none());
    assert!(!DogRepo::delete(&pool, dog.id).await.unwrap());
    assert_eq!(breed_count(&pool).await, 1);
}
