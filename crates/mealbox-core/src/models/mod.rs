// ABOUTME: Data model for the meal box engine, from catalog dishes to scheduled meals
// ABOUTME: Re-exports catalog, profile, plan, and schedule types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Read-only catalog dish records
pub mod catalog;
/// Box meals, weekly boxes and editable plan entries
pub mod plan;
/// User nutrition profile and learned affinities
pub mod profile;
/// Persistent schedule records and display cards
pub mod schedule;

pub use catalog::Dish;
pub use plan::{BoxMeal, DayPlan, MealSlot, PlanDuration, PlanEntry, WeeklyBox};
pub use profile::{Objectives, UserProfile, VirtualProfile};
pub use schedule::{MealCard, MealStatus, MealSuggestion, ScheduledMeal};
