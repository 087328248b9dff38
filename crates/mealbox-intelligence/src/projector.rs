// ABOUTME: Flattens the chosen week of a box into an editable list of plan entries
// ABOUTME: Changing the duration re-projects from scratch, prior edits are discarded
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use mealbox_core::models::{PlanDuration, PlanEntry, WeeklyBox};

/// Display label for a day index
#[must_use]
pub fn day_label(day_index: u8) -> String {
    format!("Jour {day_index}")
}

/// Project the first `duration` days of a week into enabled plan entries
///
/// Entries come out in day then slot order, unique per `(day_index, slot)`.
#[must_use]
pub fn project(weekly_box: &WeeklyBox, duration: PlanDuration) -> Vec<PlanEntry> {
    weekly_box
        .days
        .iter()
        .filter(|plan| plan.day >= 1 && plan.day <= duration.days())
        .flat_map(|plan| {
            plan.meals.iter().map(move |meal| PlanEntry {
                meal: meal.clone(),
                day_index: plan.day,
                day_label: day_label(plan.day),
                enabled: true,
            })
        })
        .collect()
}
