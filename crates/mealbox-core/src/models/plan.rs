// ABOUTME: Box meal grid types and the editable plan entries projected from a week
// ABOUTME: Defines MealSlot, BoxMeal, DayPlan, WeeklyBox, PlanEntry, and PlanDuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four fixed daily meal occasions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    /// Morning meal
    Breakfast,
    /// Midday meal
    Lunch,
    /// Afternoon snack or dessert
    Snack,
    /// Evening meal
    Dinner,
}

impl MealSlot {
    /// Slots in the order a day is laid out
    pub const ALL: [Self; 4] = [Self::Breakfast, Self::Lunch, Self::Snack, Self::Dinner];

    /// Position of this slot within a day (0..4)
    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Self::Breakfast => 0,
            Self::Lunch => 1,
            Self::Snack => 2,
            Self::Dinner => 3,
        }
    }

    /// Storage representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Snack => "snack",
            Self::Dinner => "dinner",
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Breakfast => "Petit-déjeuner",
            Self::Lunch => "Déjeuner",
            Self::Snack => "Collation",
            Self::Dinner => "Dîner",
        }
    }

    /// Parse from storage or loose user input
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" | "petit-dejeuner" | "petit-déjeuner" => Some(Self::Breakfast),
            "lunch" | "dejeuner" | "déjeuner" => Some(Self::Lunch),
            "snack" | "dessert" | "collation" | "gouter" | "goûter" => Some(Self::Snack),
            "dinner" | "diner" | "dîner" => Some(Self::Dinner),
            _ => None,
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A dish placed in the box grid
///
/// A swap never mutates a `BoxMeal`; it builds a new one under the same `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxMeal {
    /// Grid identity, derived from week, day and slot
    pub id: String,
    /// Identity of the catalog dish occupying this cell
    pub dish_id: String,
    /// Dish name
    pub name: String,
    /// Cooking time, defaulted when the dish has none
    pub cooking_time: String,
    /// Calories, defaulted when the dish has none
    pub calories: f64,
    /// Image URL or deterministic placeholder
    pub image: String,
    /// Dish category
    pub category: String,
    /// Slot within the day
    pub slot: MealSlot,
    /// Short reason this dish was picked for the user
    pub match_reason: String,
    /// Recipe text, carried through to the schedule
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe: Option<String>,
}

impl BoxMeal {
    /// Grid identity for a week/day/slot cell
    #[must_use]
    pub fn grid_id(week: u8, day: u8, slot: MealSlot) -> String {
        format!("w{week}-d{day}-{slot}")
    }
}

/// The four meals of one day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayPlan {
    /// Day label within the week (1..=7)
    pub day: u8,
    /// One meal per slot, in `MealSlot::ALL` order
    pub meals: Vec<BoxMeal>,
}

impl DayPlan {
    /// Meal occupying a slot
    #[must_use]
    pub fn meal(&self, slot: MealSlot) -> Option<&BoxMeal> {
        self.meals.iter().find(|meal| meal.slot == slot)
    }
}

/// One week of the box
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyBox {
    /// Week index (1..=4)
    pub week: u8,
    /// Presentation title
    pub title: String,
    /// Presentation theme
    pub theme: String,
    /// Seven days in order
    pub days: Vec<DayPlan>,
}

impl WeeklyBox {
    /// Day by its 1-based label, `None` when out of range
    #[must_use]
    pub fn day(&self, day: u8) -> Option<&DayPlan> {
        self.days.iter().find(|plan| plan.day == day)
    }

    /// All meals of the week in day then slot order
    pub fn meals(&self) -> impl Iterator<Item = &BoxMeal> {
        self.days.iter().flat_map(|plan| plan.meals.iter())
    }

    /// Number of meals in the week
    #[must_use]
    pub fn meal_count(&self) -> usize {
        self.days.iter().map(|plan| plan.meals.len()).sum()
    }
}

/// How many days of a week the user plans
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PlanDuration {
    /// First three days
    ThreeDays,
    /// Full week
    #[default]
    SevenDays,
}

impl PlanDuration {
    /// Accept only the supported durations
    #[must_use]
    pub const fn from_days(days: u32) -> Option<Self> {
        match days {
            3 => Some(Self::ThreeDays),
            7 => Some(Self::SevenDays),
            _ => None,
        }
    }

    /// Number of days covered
    #[must_use]
    pub const fn days(&self) -> u8 {
        match self {
            Self::ThreeDays => 3,
            Self::SevenDays => 7,
        }
    }
}

/// An editable meal of the current planning session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanEntry {
    /// The box meal this entry shows
    #[serde(flatten)]
    pub meal: BoxMeal,
    /// Day index within the plan (1-based)
    pub day_index: u8,
    /// Display label of the day
    pub day_label: String,
    /// Whether the entry will be committed
    pub enabled: bool,
}

impl PlanEntry {
    /// Entry identity (the box meal's grid id)
    #[must_use]
    pub fn id(&self) -> &str {
        &self.meal.id
    }

    /// Slot of this entry
    #[must_use]
    pub const fn slot(&self) -> MealSlot {
        self.meal.slot
    }
}
