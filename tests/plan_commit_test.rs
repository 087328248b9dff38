// ABOUTME: Integration tests for committing plan entries into the schedule store
// ABOUTME: One meal per slot, partial failure reporting, date targeting, and SQLite parity
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

mod common;

use chrono::{Days, NaiveDate, Utc};
use common::{dish, start_date, FailingStore};
use mealbox::database::{InMemoryScheduleStore, ScheduleStore, SqliteScheduleStore};
use mealbox::models::{MealSlot, MealStatus, PlanEntry, ScheduledMeal};
use mealbox::services::PlanCommitEngine;
use mealbox_intelligence::{day_label, BoxAssembler, GENERIC_REASON};
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tempfile::TempDir;
use uuid::Uuid;

fn entry(name: &str, day_index: u8, slot: MealSlot) -> PlanEntry {
    let meal = BoxAssembler::default().materialize(
        format!("w1-d{day_index}-{slot}"),
        &dish(name, name, "Plat", "Française", 480.0),
        slot,
        GENERIC_REASON.into(),
    );
    PlanEntry {
        meal,
        day_index,
        day_label: day_label(day_index),
        enabled: true,
    }
}

fn week_end() -> NaiveDate {
    start_date() + Days::new(6)
}

async fn sqlite_store(dir: &TempDir) -> SqliteScheduleStore {
    let path = dir.path().join("schedule.db");
    SqliteScheduleStore::connect(&format!("sqlite:{}", path.display()))
        .await
        .unwrap()
}

// ============================================================================
// One meal per slot
// ============================================================================

#[tokio::test]
async fn test_recommit_replaces_slot_occupant() {
    common::init_test_logging();
    let store = Arc::new(InMemoryScheduleStore::new());
    let engine = PlanCommitEngine::new(store.clone(), 4);
    let user = Uuid::new_v4();

    let first = engine
        .commit(user, &[entry("Quiche", 1, MealSlot::Lunch)], start_date())
        .await;
    let second = engine
        .commit(user, &[entry("Ratatouille", 1, MealSlot::Lunch)], start_date())
        .await;
    assert!(first.is_complete() && second.is_complete());

    let stored = store.list_meals(user, start_date(), start_date()).await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].name, "Ratatouille");
    assert_eq!(stored[0].slot, MealSlot::Lunch);
}

#[tokio::test]
async fn test_logged_occupant_is_replaced_too() {
    let store = Arc::new(InMemoryScheduleStore::new());
    let user = Uuid::new_v4();
    let logged = ScheduledMeal {
        status: MealStatus::Logged,
        ..ScheduledMeal::planned(&entry("Pizza", 1, MealSlot::Dinner).meal, start_date(), Utc::now())
    };
    store.insert_scheduled_meal(user, &logged).await.unwrap();

    let engine = PlanCommitEngine::new(store.clone(), 2);
    engine
        .commit(user, &[entry("Soupe", 1, MealSlot::Dinner)], start_date())
        .await;

    let stored = store.list_meals(user, start_date(), start_date()).await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].name, "Soupe");
    assert_eq!(stored[0].status, MealStatus::Planned);
}

#[tokio::test]
async fn test_other_users_are_untouched() {
    let store = Arc::new(InMemoryScheduleStore::new());
    let engine = PlanCommitEngine::new(store.clone(), 4);
    let (alice, bob) = (Uuid::new_v4(), Uuid::new_v4());

    engine
        .commit(alice, &[entry("Quiche", 1, MealSlot::Lunch)], start_date())
        .await;
    engine
        .commit(bob, &[entry("Paella", 1, MealSlot::Lunch)], start_date())
        .await;

    let alice_meals = store.list_meals(alice, start_date(), week_end()).await.unwrap();
    assert_eq!(alice_meals.len(), 1);
    assert_eq!(alice_meals[0].name, "Quiche");
}

// ============================================================================
// Targeting and filtering
// ============================================================================

#[tokio::test]
async fn test_day_index_offsets_start_date() {
    let store = Arc::new(InMemoryScheduleStore::new());
    let engine = PlanCommitEngine::new(store.clone(), 4);
    let user = Uuid::new_v4();

    let mut skipped = entry("Gratin", 2, MealSlot::Dinner);
    skipped.enabled = false;
    let entries = vec![
        entry("Porridge", 1, MealSlot::Breakfast),
        entry("Curry", 3, MealSlot::Dinner),
        skipped,
    ];
    let report = engine.commit(user, &entries, start_date()).await;
    assert_eq!(report.total(), 2);

    let stored = store.list_meals(user, start_date(), week_end()).await.unwrap();
    let placed: Vec<(NaiveDate, &str)> = stored.iter().map(|m| (m.date, m.name.as_str())).collect();
    assert_eq!(
        placed,
        [
            (start_date(), "Porridge"),
            (start_date() + Days::new(2), "Curry")
        ]
    );
}

#[tokio::test]
async fn test_day_index_zero_is_reported_not_written() {
    let store = Arc::new(InMemoryScheduleStore::new());
    let engine = PlanCommitEngine::new(store.clone(), 4);

    let report = engine
        .commit(Uuid::new_v4(), &[entry("Quiche", 0, MealSlot::Lunch)], start_date())
        .await;
    assert_eq!(report.failed, 1);
    assert_eq!(report.failures[0].date, None);
    assert!(store.is_empty());
}

// ============================================================================
// Partial failure
// ============================================================================

#[tokio::test]
async fn test_one_failed_write_does_not_abort_siblings() {
    let failing_day = start_date() + Days::new(1);
    let store = Arc::new(FailingStore::failing_on(vec![(failing_day, MealSlot::Lunch)]));
    let engine = PlanCommitEngine::new(store.clone(), 3);
    let user = Uuid::new_v4();

    let entries = vec![
        entry("Porridge", 1, MealSlot::Breakfast),
        entry("Quiche", 1, MealSlot::Lunch),
        entry("Salade", 2, MealSlot::Lunch),
        entry("Yaourt", 2, MealSlot::Snack),
        entry("Curry", 3, MealSlot::Dinner),
    ];
    let report = engine.commit(user, &entries, start_date()).await;

    assert_eq!(report.succeeded, 4);
    assert_eq!(report.failed, 1);
    assert_eq!(report.summary(), "4 sur 5 repas planifiés");
    assert_eq!(report.failures[0].entry_id, "w1-d2-lunch");
    assert_eq!(report.failures[0].date, Some(failing_day));
    assert_eq!(store.insert_attempts.load(Ordering::SeqCst), 5);

    let stored = store.list_meals(user, start_date(), week_end()).await.unwrap();
    let names: Vec<&str> = stored.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, ["Porridge", "Quiche", "Yaourt", "Curry"]);
}

#[tokio::test]
async fn test_concurrency_bound_does_not_change_outcome() {
    let entries: Vec<PlanEntry> = (1..=7)
        .flat_map(|day| MealSlot::ALL.map(|slot| entry(&format!("Plat {day}"), day, slot)))
        .collect();

    for concurrency in [0, 1, 8, 64] {
        let store = Arc::new(InMemoryScheduleStore::new());
        let engine = PlanCommitEngine::new(store.clone(), concurrency);
        let user = Uuid::new_v4();
        let report = engine.commit(user, &entries, start_date()).await;
        assert_eq!(report.succeeded, 28);
        assert_eq!(store.list_meals(user, start_date(), week_end()).await.unwrap().len(), 28);
    }
}

// ============================================================================
// SQLite backend
// ============================================================================

#[tokio::test]
async fn test_sqlite_commit_keeps_one_meal_per_slot() {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(sqlite_store(&dir).await);
    let engine = PlanCommitEngine::new(store.clone(), 4);
    let user = Uuid::new_v4();

    engine
        .commit(user, &[entry("Quiche", 1, MealSlot::Lunch)], start_date())
        .await;
    let report = engine
        .commit(
            user,
            &[
                entry("Ratatouille", 1, MealSlot::Lunch),
                entry("Crêpes", 1, MealSlot::Snack),
            ],
            start_date(),
        )
        .await;
    assert_eq!(report.succeeded, 2);

    let stored = store.list_meals(user, start_date(), start_date()).await.unwrap();
    let names: Vec<&str> = stored.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, ["Ratatouille", "Crêpes"]);
}
