// ABOUTME: Schedule store abstraction for committed and logged meals
// ABOUTME: Async trait with SQLite and in-memory backends addressing (user, date, slot) keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Schedule store
//!
//! A user's schedule is a ledger of [`ScheduledMeal`] records keyed by
//! `(date, slot)`. Planned and logged meals share one table distinguished by
//! [`MealStatus`](crate::models::MealStatus). The store itself does not
//! enforce one meal per slot; the commit engine does, by deleting occupants
//! before inserting.

/// In-memory backend
pub mod memory;
/// SQLite backend
pub mod sqlite;

pub use memory::InMemoryScheduleStore;
pub use sqlite::SqliteScheduleStore;

use crate::errors::AppResult;
use crate::models::{MealSlot, ScheduledMeal};
use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

/// Persistent per-user schedule of meals
#[async_trait]
pub trait ScheduleStore: Send + Sync {
    /// Delete planned meals occupying a slot, returning how many were removed
    async fn delete_scheduled_meal(
        &self,
        user_id: Uuid,
        date: NaiveDate,
        slot: MealSlot,
    ) -> AppResult<u64>;

    /// Delete logged meals occupying a slot, returning how many were removed
    async fn delete_logged_meal(
        &self,
        user_id: Uuid,
        date: NaiveDate,
        slot: MealSlot,
    ) -> AppResult<u64>;

    /// Insert a meal record
    async fn insert_scheduled_meal(&self, user_id: Uuid, meal: &ScheduledMeal) -> AppResult<()>;

    /// Meals between two dates inclusive, ordered by date then slot
    async fn list_meals(
        &self,
        user_id: Uuid,
        from: NaiveDate,
        to: NaiveDate,
    ) -> AppResult<Vec<ScheduledMeal>>;

    /// Remove every meal of a day, planned or logged
    async fn clear_day(&self, user_id: Uuid, date: NaiveDate) -> AppResult<u64>;
}

/// Order meals the way calendars show them
pub(crate) fn sort_for_calendar(meals: &mut [ScheduledMeal]) {
    meals.sort_by(|a, b| {
        a.date
            .cmp(&b.date)
            .then(a.slot.index().cmp(&b.slot.index()))
            .then(a.created_at.cmp(&b.created_at))
    });
}
