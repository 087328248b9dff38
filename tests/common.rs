// ABOUTME: Shared test utilities for the meal planner integration tests
// ABOUTME: Catalog and profile fixtures, quiet logging, and a store that fails on chosen slots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `mealbox`

use async_trait::async_trait;
use chrono::NaiveDate;
use mealbox::database::{InMemoryScheduleStore, ScheduleStore};
use mealbox::errors::{AppError, AppResult};
use mealbox::models::{Dish, MealSlot, ScheduledMeal, UserProfile};
use std::env;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Once;
use tracing::Level;
use uuid::Uuid;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

// ============================================================================
// Fixtures
// ============================================================================

const CATEGORIES: [&str; 4] = ["Petit-déjeuner", "Plat", "Dessert", "Soupe"];
const ORIGINS: [&str; 5] = ["Marocaine", "Française", "Italienne", "Libanaise", "Japonaise"];

/// A dish with calories set
pub fn dish(id: &str, name: &str, category: &str, origin: &str, calories: f64) -> Dish {
    Dish::new(id, name, category, origin).with_calories(calories)
}

/// `size` distinct dishes spread over a few categories and origins
pub fn catalog(size: usize) -> Vec<Dish> {
    (0..size)
        .map(|i| {
            dish(
                &format!("dish-{i}"),
                &format!("Recette {i}"),
                CATEGORIES[i % CATEGORIES.len()],
                ORIGINS[i % ORIGINS.len()],
                250.0 + (i % 9) as f64 * 75.0,
            )
        })
        .collect()
}

/// Profile with only an origin
pub fn profile_with_origin(origin: &str) -> UserProfile {
    UserProfile {
        origin: origin.into(),
        ..UserProfile::default()
    }
}

/// Monday 2 June 2025
pub fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
}

// ============================================================================
// Store doubles
// ============================================================================

/// In-memory store whose inserts fail for chosen (date, slot) keys
#[derive(Debug, Default)]
pub struct FailingStore {
    pub inner: InMemoryScheduleStore,
    fail_on: Vec<(NaiveDate, MealSlot)>,
    pub insert_attempts: AtomicUsize,
}

impl FailingStore {
    pub fn failing_on(fail_on: Vec<(NaiveDate, MealSlot)>) -> Self {
        Self {
            fail_on,
            ..Self::default()
        }
    }
}

#[async_trait]
impl ScheduleStore for FailingStore {
    async fn delete_scheduled_meal(
        &self,
        user_id: Uuid,
        date: NaiveDate,
        slot: MealSlot,
    ) -> AppResult<u64> {
        self.inner.delete_scheduled_meal(user_id, date, slot).await
    }

    async fn delete_logged_meal(
        &self,
        user_id: Uuid,
        date: NaiveDate,
        slot: MealSlot,
    ) -> AppResult<u64> {
        self.inner.delete_logged_meal(user_id, date, slot).await
    }

    async fn insert_scheduled_meal(&self, user_id: Uuid, meal: &ScheduledMeal) -> AppResult<()> {
        self.insert_attempts.fetch_add(1, Ordering::SeqCst);
        if self.fail_on.contains(&(meal.date, meal.slot)) {
            return Err(AppError::external_service(
                "schedule",
                "connection reset while inserting",
            ));
        }
        self.inner.insert_scheduled_meal(user_id, meal).await
    }

    async fn list_meals(
        &self,
        user_id: Uuid,
        from: NaiveDate,
        to: NaiveDate,
    ) -> AppResult<Vec<ScheduledMeal>> {
        self.inner.list_meals(user_id, from, to).await
    }

    async fn clear_day(&self, user_id: Uuid, date: NaiveDate) -> AppResult<u64> {
        self.inner.clear_day(user_id, date).await
    }
}
