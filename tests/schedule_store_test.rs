// ABOUTME: Integration tests for the SQLite and in-memory schedule stores
// ABOUTME: Status-scoped deletes, calendar ordering, day clearing, and reopening a database file
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

mod common;

use chrono::{Days, NaiveDate, Utc};
use common::start_date;
use mealbox::database::{InMemoryScheduleStore, ScheduleStore, SqliteScheduleStore};
use mealbox::models::{MealCard, MealSlot, MealStatus, ScheduledMeal};
use tempfile::TempDir;
use uuid::Uuid;

fn meal(name: &str, date: NaiveDate, slot: MealSlot, status: MealStatus) -> ScheduledMeal {
    ScheduledMeal {
        date,
        slot,
        name: name.into(),
        calories: 420.0,
        cooking_time: "25 min".into(),
        image_url: format!("https://img.example/{name}.jpg"),
        recipe: None,
        status,
        created_at: Utc::now(),
    }
}

async fn exercise_store(store: &dyn ScheduleStore) {
    let user = Uuid::new_v4();
    let day_two = start_date() + Days::new(1);

    store
        .insert_scheduled_meal(user, &meal("Curry", day_two, MealSlot::Dinner, MealStatus::Planned))
        .await
        .unwrap();
    store
        .insert_scheduled_meal(user, &meal("Tartine", start_date(), MealSlot::Breakfast, MealStatus::Logged))
        .await
        .unwrap();
    store
        .insert_scheduled_meal(user, &meal("Quiche", start_date(), MealSlot::Lunch, MealStatus::Planned))
        .await
        .unwrap();

    let listed = store.list_meals(user, start_date(), day_two).await.unwrap();
    let names: Vec<&str> = listed.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, ["Tartine", "Quiche", "Curry"]);
    assert_eq!(listed[0].status, MealStatus::Logged);

    // status-scoped deletes leave the other status alone
    let removed = store
        .delete_scheduled_meal(user, start_date(), MealSlot::Breakfast)
        .await
        .unwrap();
    assert_eq!(removed, 0);
    let removed = store
        .delete_logged_meal(user, start_date(), MealSlot::Breakfast)
        .await
        .unwrap();
    assert_eq!(removed, 1);

    let only_first_day = store.list_meals(user, start_date(), start_date()).await.unwrap();
    assert_eq!(only_first_day.len(), 1);
    assert_eq!(only_first_day[0].name, "Quiche");

    assert_eq!(store.clear_day(user, day_two).await.unwrap(), 1);
    assert_eq!(store.list_meals(user, day_two, day_two).await.unwrap().len(), 0);

    let stranger = store.list_meals(Uuid::new_v4(), start_date(), day_two).await.unwrap();
    assert!(stranger.is_empty());
}

#[tokio::test]
async fn test_in_memory_store_contract() {
    exercise_store(&InMemoryScheduleStore::new()).await;
}

#[tokio::test]
async fn test_sqlite_store_contract() {
    let dir = TempDir::new().unwrap();
    let url = format!("sqlite:{}", dir.path().join("mealbox.db").display());
    let store = SqliteScheduleStore::connect(&url).await.unwrap();
    exercise_store(&store).await;
}

#[tokio::test]
async fn test_sqlite_memory_url() {
    let store = SqliteScheduleStore::connect("sqlite::memory:").await.unwrap();
    exercise_store(&store).await;
}

#[tokio::test]
async fn test_sqlite_url_with_query_and_missing_directory() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data").join("nested").join("mealbox.db");
    let url = format!("sqlite:{}?cache=shared", path.display());

    let store = SqliteScheduleStore::connect(&url).await.unwrap();
    assert!(path.exists());
    exercise_store(&store).await;
}

#[tokio::test]
async fn test_sqlite_reopen_keeps_records() {
    let dir = TempDir::new().unwrap();
    let url = format!("sqlite:{}", dir.path().join("mealbox.db").display());
    let user = Uuid::new_v4();

    let mut stored = meal("Couscous", start_date(), MealSlot::Lunch, MealStatus::Planned);
    stored.recipe = Some("Cuire la semoule à la vapeur.".into());
    {
        let store = SqliteScheduleStore::connect(&url).await.unwrap();
        store.insert_scheduled_meal(user, &stored).await.unwrap();
        store.pool().close().await;
    }

    let store = SqliteScheduleStore::connect(&url).await.unwrap();
    let listed = store.list_meals(user, start_date(), start_date()).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].recipe, stored.recipe);
    assert_eq!(listed[0].name, "Couscous");
    assert_eq!(listed[0].created_at.timestamp(), stored.created_at.timestamp());
}

#[test]
fn test_meal_card_tags_its_kind() {
    let card = MealCard::from(meal("Curry", start_date(), MealSlot::Dinner, MealStatus::Planned));
    let json = serde_json::to_value(&card).unwrap();
    assert_eq!(json["kind"], "scheduled");
    assert_eq!(json["payload"]["name"], "Curry");
    assert_eq!(card.name(), "Curry");
    assert_eq!(card.slot(), Some(MealSlot::Dinner));
    assert_eq!(card.image(), Some("https://img.example/Curry.jpg"));
}
