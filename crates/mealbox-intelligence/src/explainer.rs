// ABOUTME: Short human-readable reason explaining why a dish was picked for a user
// ABOUTME: Deterministic first-match rules sharing the scoring keyword families
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::ScoringConfig;
use mealbox_core::constants::defaults;
use mealbox_core::models::{Dish, UserProfile};

/// Reason shown when no personal rule applies
pub const GENERIC_REASON: &str = "Sélectionné pour équilibrer votre semaine";

/// Derives a match reason from the same inputs the scorer uses
///
/// Calorie thresholds come from the scoring weights so a displayed reason
/// never contradicts the ranking.
#[derive(Debug, Clone, Default)]
pub struct MatchExplainer {
    config: ScoringConfig,
}

impl MatchExplainer {
    /// Create an explainer sharing the scorer's thresholds
    #[must_use]
    pub const fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// First matching rule wins: origin, country, weight loss, mass gain,
    /// liked category, then the generic fallback
    #[must_use]
    pub fn explain(&self, dish: &Dish, profile: Option<&UserProfile>) -> String {
        let Some(profile) = profile else {
            return GENERIC_REASON.to_owned();
        };

        if profile.matches_origin(&dish.origin) {
            return format!("Un goût de vos origines : cuisine {}", dish.origin);
        }
        if profile.matches_country(&dish.origin) {
            return format!("Une spécialité de votre pays : {}", profile.country.trim());
        }

        let objectives = profile.objectives();
        let calories = dish.calories.unwrap_or(defaults::SCORING_CALORIES);
        if objectives.weight_loss && calories < self.config.moderate_calories {
            return format!("Léger ({calories:.0} kcal), adapté à votre objectif minceur");
        }
        if objectives.mass_gain && calories > self.config.energy_dense_calories {
            return format!("Riche en énergie ({calories:.0} kcal) pour votre prise de masse");
        }

        let liked_category = profile
            .virtual_profile
            .as_ref()
            .is_some_and(|learned| learned.category_score(&dish.category) > 0.0);
        if liked_category {
            return format!("Vous appréciez souvent les plats « {} »", dish.category);
        }

        GENERIC_REASON.to_owned()
    }
}
