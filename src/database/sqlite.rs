// ABOUTME: SQLite schedule store built on a sqlx connection pool
// ABOUTME: One scheduled_meals table with a status column and a slot lookup index
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{sort_for_calendar, ScheduleStore};
use crate::errors::{AppError, AppResult};
use crate::models::{MealSlot, MealStatus, ScheduledMeal};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use std::str::FromStr;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Row, SqlitePool};
use tokio::fs;
use tracing::debug;
use uuid::Uuid;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Schedule store backed by SQLite
#[derive(Clone)]
pub struct SqliteScheduleStore {
    pool: SqlitePool,
}

impl SqliteScheduleStore {
    /// Wrap an existing pool
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (creating if needed) the database and run migrations
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or schema creation fails
    pub async fn connect(database_url: &str) -> AppResult<Self> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| AppError::database(format!("Invalid database URL {database_url}: {e}")))?
            .create_if_missing(true);

        let in_memory = database_url.contains(":memory:");
        if !in_memory {
            if let Some(parent) = options
                .get_filename()
                .parent()
                .filter(|parent| !parent.as_os_str().is_empty())
            {
                fs::create_dir_all(parent).await.map_err(|e| {
                    AppError::database(format!(
                        "Failed to create database directory {}: {e}",
                        parent.display()
                    ))
                })?;
            }
        }

        // every pooled connection to :memory: would see its own database
        let max_connections = if in_memory { 1 } else { 5 };
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await
            .map_err(|e| AppError::database(format!("Failed to open {database_url}: {e}")))?;
        debug!(database_url, in_memory, "opened schedule store");

        let store = Self::new(pool);
        store.migrate().await?;
        Ok(store)
    }

    /// Underlying pool
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create the schedule table and its index
    ///
    /// # Errors
    ///
    /// Returns an error if a DDL statement fails
    pub async fn migrate(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS scheduled_meals (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                meal_date TEXT NOT NULL,
                slot TEXT NOT NULL,
                name TEXT NOT NULL,
                calories REAL NOT NULL,
                cooking_time TEXT NOT NULL,
                image_url TEXT NOT NULL,
                recipe TEXT,
                status TEXT NOT NULL DEFAULT 'planned' CHECK (status IN ('planned', 'logged')),
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create scheduled_meals: {e}")))?;

        sqlx::query(
            r"
            CREATE INDEX IF NOT EXISTS idx_scheduled_meals_slot
            ON scheduled_meals(user_id, meal_date, slot, status)
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create schedule index: {e}")))?;

        debug!("schedule schema ready");
        Ok(())
    }

    async fn delete_with_status(
        &self,
        user_id: Uuid,
        date: NaiveDate,
        slot: MealSlot,
        status: MealStatus,
    ) -> AppResult<u64> {
        let result = sqlx::query(
            r"
            DELETE FROM scheduled_meals
            WHERE user_id = $1 AND meal_date = $2 AND slot = $3 AND status = $4
            ",
        )
        .bind(user_id.to_string())
        .bind(date.format(DATE_FORMAT).to_string())
        .bind(slot.as_str())
        .bind(status.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::database(format!("Failed to delete {} meal: {e}", status.as_str()))
        })?;

        Ok(result.rows_affected())
    }
}

#[async_trait]
impl ScheduleStore for SqliteScheduleStore {
    async fn delete_scheduled_meal(
        &self,
        user_id: Uuid,
        date: NaiveDate,
        slot: MealSlot,
    ) -> AppResult<u64> {
        self.delete_with_status(user_id, date, slot, MealStatus::Planned)
            .await
    }

    async fn delete_logged_meal(
        &self,
        user_id: Uuid,
        date: NaiveDate,
        slot: MealSlot,
    ) -> AppResult<u64> {
        self.delete_with_status(user_id, date, slot, MealStatus::Logged)
            .await
    }

    async fn insert_scheduled_meal(&self, user_id: Uuid, meal: &ScheduledMeal) -> AppResult<()> {
        sqlx::query(
            r"
            INSERT INTO scheduled_meals (
                id, user_id, meal_date, slot, name, calories,
                cooking_time, image_url, recipe, status, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ",
        )
        .bind(Uuid::new_v4().to_string())
        .bind(user_id.to_string())
        .bind(meal.date.format(DATE_FORMAT).to_string())
        .bind(meal.slot.as_str())
        .bind(&meal.name)
        .bind(meal.calories)
        .bind(&meal.cooking_time)
        .bind(&meal.image_url)
        .bind(meal.recipe.as_deref())
        .bind(meal.status.as_str())
        .bind(meal.created_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to insert scheduled meal: {e}")))?;

        Ok(())
    }

    async fn list_meals(
        &self,
        user_id: Uuid,
        from: NaiveDate,
        to: NaiveDate,
    ) -> AppResult<Vec<ScheduledMeal>> {
        let rows = sqlx::query(
            r"
            SELECT meal_date, slot, name, calories, cooking_time, image_url,
                   recipe, status, created_at
            FROM scheduled_meals
            WHERE user_id = $1 AND meal_date >= $2 AND meal_date <= $3
            ",
        )
        .bind(user_id.to_string())
        .bind(from.format(DATE_FORMAT).to_string())
        .bind(to.format(DATE_FORMAT).to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list scheduled meals: {e}")))?;

        let mut meals = rows
            .iter()
            .map(row_to_scheduled_meal)
            .collect::<AppResult<Vec<_>>>()?;
        sort_for_calendar(&mut meals);
        Ok(meals)
    }

    async fn clear_day(&self, user_id: Uuid, date: NaiveDate) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM scheduled_meals WHERE user_id = $1 AND meal_date = $2")
            .bind(user_id.to_string())
            .bind(date.format(DATE_FORMAT).to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to clear day: {e}")))?;

        Ok(result.rows_affected())
    }
}

fn row_to_scheduled_meal(row: &SqliteRow) -> AppResult<ScheduledMeal> {
    let date_str: String = row.get("meal_date");
    let slot_str: String = row.get("slot");
    let status_str: String = row.get("status");
    let created_at_str: String = row.get("created_at");

    let date = NaiveDate::parse_from_str(&date_str, DATE_FORMAT)
        .map_err(|e| AppError::database(format!("Invalid meal_date '{date_str}': {e}")))?;
    let slot = MealSlot::parse(&slot_str)
        .ok_or_else(|| AppError::database(format!("Invalid slot '{slot_str}'")))?;
    let created_at = DateTime::parse_from_rfc3339(&created_at_str)
        .map_err(|e| AppError::database(format!("Invalid created_at '{created_at_str}': {e}")))?
        .with_timezone(&Utc);

    Ok(ScheduledMeal {
        date,
        slot,
        name: row.get("name"),
        calories: row.get("calories"),
        cooking_time: row.get("cooking_time"),
        image_url: row.get("image_url"),
        recipe: row.get("recipe"),
        status: MealStatus::parse(&status_str),
        created_at,
    })
}
