// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Calendar commands for mealbox-cli
// ABOUTME: Lists stored meals as tagged cards and clears whole days

use crate::helpers::display::print_json;
use chrono::NaiveDate;
use mealbox::config::ServerConfig;
use mealbox::database::{ScheduleStore, SqliteScheduleStore};
use mealbox::errors::{AppError, AppResult};
use mealbox::models::MealCard;
use tracing::info;
use uuid::Uuid;

/// Print stored meals between two dates
pub async fn list(
    config: &ServerConfig,
    user_id: Uuid,
    from: NaiveDate,
    to: NaiveDate,
) -> AppResult<()> {
    if from > to {
        return Err(AppError::invalid_input(format!("{from} is after {to}")));
    }
    let store = SqliteScheduleStore::connect(&config.database_url).await?;
    let cards: Vec<MealCard> = store
        .list_meals(user_id, from, to)
        .await?
        .into_iter()
        .map(MealCard::from)
        .collect();
    print_json(&cards)
}

/// Remove every meal stored for one day
pub async fn clear_day(config: &ServerConfig, user_id: Uuid, date: NaiveDate) -> AppResult<()> {
    let store = SqliteScheduleStore::connect(&config.database_url).await?;
    let removed = store.clear_day(user_id, date).await?;
    info!(user_id = %user_id, date = %date, removed, "day cleared");
    println!("{removed} repas supprimés le {date}");
    Ok(())
}
