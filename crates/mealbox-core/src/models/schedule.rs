// ABOUTME: Persistent schedule records and the tagged card type shared by all meal views
// ABOUTME: One ScheduledMeal abstraction covers planned and logged meals via a status tag
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::plan::{BoxMeal, MealSlot};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Whether a stored meal is planned ahead or was logged as eaten
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MealStatus {
    /// Committed from a plan
    #[default]
    Planned,
    /// Recorded as eaten
    Logged,
}

impl MealStatus {
    /// Storage representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Planned => "planned",
            Self::Logged => "logged",
        }
    }

    /// Parse from storage, defaulting to `Planned`
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "logged" => Self::Logged,
            _ => Self::Planned,
        }
    }
}

/// A meal in the user's persistent schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledMeal {
    /// Calendar date
    pub date: NaiveDate,
    /// Slot within the day
    pub slot: MealSlot,
    /// Dish name
    pub name: String,
    /// Calories
    pub calories: f64,
    /// Cooking time
    pub cooking_time: String,
    /// Image URL
    pub image_url: String,
    /// Recipe text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe: Option<String>,
    /// Planned or logged
    #[serde(default)]
    pub status: MealStatus,
    /// Insertion time
    pub created_at: DateTime<Utc>,
}

impl ScheduledMeal {
    /// Planned record for a box meal on a date
    #[must_use]
    pub fn planned(meal: &BoxMeal, date: NaiveDate, created_at: DateTime<Utc>) -> Self {
        Self {
            date,
            slot: meal.slot,
            name: meal.name.clone(),
            calories: meal.calories,
            cooking_time: meal.cooking_time.clone(),
            image_url: meal.image.clone(),
            recipe: meal.recipe.clone(),
            status: MealStatus::Planned,
            created_at,
        }
    }
}

/// Output of the generative suggestion service, treated as opaque
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealSuggestion {
    /// Suggested dish name
    pub name: String,
    /// Estimated calories, if the service gave any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    /// Free-text description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Any meal a view can display, tagged by where it came from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "payload", rename_all = "snake_case")]
pub enum MealCard {
    /// A cell of an assembled box
    Box(BoxMeal),
    /// A stored schedule record
    Scheduled(ScheduledMeal),
    /// A generative suggestion
    Suggestion(MealSuggestion),
}

impl MealCard {
    /// Dish name
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Box(meal) => &meal.name,
            Self::Scheduled(meal) => &meal.name,
            Self::Suggestion(suggestion) => &suggestion.name,
        }
    }

    /// Calories, when known
    #[must_use]
    pub const fn calories(&self) -> Option<f64> {
        match self {
            Self::Box(meal) => Some(meal.calories),
            Self::Scheduled(meal) => Some(meal.calories),
            Self::Suggestion(suggestion) => suggestion.calories,
        }
    }

    /// Image URL, suggestions carry none
    #[must_use]
    pub fn image(&self) -> Option<&str> {
        match self {
            Self::Box(meal) => Some(&meal.image),
            Self::Scheduled(meal) => Some(&meal.image_url),
            Self::Suggestion(_) => None,
        }
    }

    /// Slot, when the card is bound to one
    #[must_use]
    pub const fn slot(&self) -> Option<MealSlot> {
        match self {
            Self::Box(meal) => Some(meal.slot),
            Self::Scheduled(meal) => Some(meal.slot),
            Self::Suggestion(_) => None,
        }
    }
}

impl From<BoxMeal> for MealCard {
    fn from(meal: BoxMeal) -> Self {
        Self::Box(meal)
    }
}

impl From<ScheduledMeal> for MealCard {
    fn from(meal: ScheduledMeal) -> Self {
        Self::Scheduled(meal)
    }
}

impl From<MealSuggestion> for MealCard {
    fn from(suggestion: MealSuggestion) -> Self {
        Self::Suggestion(suggestion)
    }
}
