// ABOUTME: Replaces one plan entry with another well-ranked dish, preferring its category
// ABOUTME: Picks uniformly among the top candidates so repeated swaps keep varying
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::assembler::BoxAssembler;
use crate::random::RandomSource;
use crate::scoring::ScoredDish;
use mealbox_core::models::{Dish, PlanEntry, UserProfile};
use tracing::debug;

/// Substitutes the dish of a single plan entry
#[derive(Debug, Clone, Default)]
pub struct SwapEngine {
    assembler: BoxAssembler,
}

impl SwapEngine {
    /// Create a swap engine sharing the assembler's scoring and display defaults
    #[must_use]
    pub const fn new(assembler: BoxAssembler) -> Self {
        Self { assembler }
    }

    /// Return a new entry with the same identity and a different dish
    ///
    /// Candidates exclude the current dish and hard-excluded dishes. Same
    /// category candidates are preferred, then the whole ranked pool. With no
    /// candidate at all the entry comes back unchanged.
    pub fn swap<R>(
        &self,
        entry: &PlanEntry,
        catalog: &[Dish],
        profile: Option<&UserProfile>,
        rng: &mut R,
    ) -> PlanEntry
    where
        R: RandomSource + ?Sized,
    {
        let ranked: Vec<ScoredDish<'_>> = self
            .assembler
            .scoring()
            .rank_eligible(catalog, profile, 0.0, &mut *rng)
            .into_iter()
            .filter(|scored| !is_current_dish(entry, scored.dish))
            .collect();

        let category = entry.meal.category.to_lowercase();
        let same_category: Vec<ScoredDish<'_>> = ranked
            .iter()
            .copied()
            .filter(|scored| scored.dish.category.to_lowercase() == category)
            .collect();

        let pool = if same_category.is_empty() {
            &ranked
        } else {
            &same_category
        };
        if pool.is_empty() {
            debug!(entry_id = %entry.id(), "no swap candidate, entry kept");
            return entry.clone();
        }

        let top_k = self.assembler.layout().swap_top_k.min(pool.len()).max(1);
        let chosen = pool[rng.next_index(top_k)].dish;
        debug!(
            entry_id = %entry.id(),
            from = %entry.meal.name,
            to = %chosen.name,
            candidates = pool.len(),
            "swapped plan entry"
        );

        let reason = self.assembler.explainer().explain(chosen, profile);
        let meal = self
            .assembler
            .materialize(entry.meal.id.clone(), chosen, entry.slot(), reason);

        PlanEntry {
            meal,
            day_index: entry.day_index,
            day_label: entry.day_label.clone(),
            enabled: entry.enabled,
        }
    }
}

fn is_current_dish(entry: &PlanEntry, dish: &Dish) -> bool {
    dish.identity() == entry.meal.dish_id || dish.name == entry.meal.name
}
