// ABOUTME: Concurrent in-memory schedule store for tests and dry runs
// ABOUTME: DashMap keyed by user holding that user's schedule records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{sort_for_calendar, ScheduleStore};
use crate::errors::AppResult;
use crate::models::{MealSlot, MealStatus, ScheduledMeal};
use async_trait::async_trait;
use chrono::NaiveDate;
use dashmap::DashMap;
use uuid::Uuid;

/// Schedule store living in process memory
#[derive(Debug, Default)]
pub struct InMemoryScheduleStore {
    meals: DashMap<Uuid, Vec<ScheduledMeal>>,
}

impl InMemoryScheduleStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total records across users
    #[must_use]
    pub fn len(&self) -> usize {
        self.meals.iter().map(|entry| entry.value().len()).sum()
    }

    /// Whether no user has any record
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn remove_where<F>(&self, user_id: Uuid, predicate: F) -> u64
    where
        F: Fn(&ScheduledMeal) -> bool,
    {
        let Some(mut meals) = self.meals.get_mut(&user_id) else {
            return 0;
        };
        let before = meals.len();
        meals.retain(|meal| !predicate(meal));
        (before - meals.len()) as u64
    }
}

#[async_trait]
impl ScheduleStore for InMemoryScheduleStore {
    async fn delete_scheduled_meal(
        &self,
        user_id: Uuid,
        date: NaiveDate,
        slot: MealSlot,
    ) -> AppResult<u64> {
        Ok(self.remove_where(user_id, |meal| {
            meal.date == date && meal.slot == slot && meal.status == MealStatus::Planned
        }))
    }

    async fn delete_logged_meal(
        &self,
        user_id: Uuid,
        date: NaiveDate,
        slot: MealSlot,
    ) -> AppResult<u64> {
        Ok(self.remove_where(user_id, |meal| {
            meal.date == date && meal.slot == slot && meal.status == MealStatus::Logged
        }))
    }

    async fn insert_scheduled_meal(&self, user_id: Uuid, meal: &ScheduledMeal) -> AppResult<()> {
        self.meals.entry(user_id).or_default().push(meal.clone());
        Ok(())
    }

    async fn list_meals(
        &self,
        user_id: Uuid,
        from: NaiveDate,
        to: NaiveDate,
    ) -> AppResult<Vec<ScheduledMeal>> {
        let mut meals: Vec<ScheduledMeal> = self
            .meals
            .get(&user_id)
            .map(|meals| {
                meals
                    .iter()
                    .filter(|meal| meal.date >= from && meal.date <= to)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        sort_for_calendar(&mut meals);
        Ok(meals)
    }

    async fn clear_day(&self, user_id: Uuid, date: NaiveDate) -> AppResult<u64> {
        Ok(self.remove_where(user_id, |meal| meal.date == date))
    }
}
