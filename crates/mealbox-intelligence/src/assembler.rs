// ABOUTME: Assembles the personalized 4-week x 7-day x 4-slot meal box from a ranked catalog
// ABOUTME: Per-week re-ranking with bias and cyclic offsets spread repeats across the grid
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Box Assembly
//!
//! Every dish is scored once to build the global ranking, then each week is
//! re-ranked (the scorer's jitter reshuffles close scores) with a small
//! per-week bias. Cells are filled cyclically:
//!
//! ```text
//! idx = ((day - 1) * 4 + slot_index + (week - 1) * week_offset) mod pool_len
//! ```
//!
//! For a pool of `n` dishes a week covers `min(n, 28)` distinct positions and
//! the weekly offsets extend coverage, so growing the catalog never reduces
//! the number of distinct dishes across the box.

use crate::config::{BoxConfig, IntelligenceConfig};
use crate::explainer::MatchExplainer;
use crate::random::RandomSource;
use crate::scoring::ScoringEngine;
use mealbox_core::models::{BoxMeal, DayPlan, Dish, MealSlot, UserProfile, WeeklyBox};
use tracing::{debug, warn};

const WEEK_THEMES: [&str; 4] = [
    "Mise en route",
    "Variété au quotidien",
    "Voyage culinaire",
    "Bilan gourmand",
];

/// Lays out the meal box for one profile
#[derive(Debug, Clone, Default)]
pub struct BoxAssembler {
    scoring: ScoringEngine,
    explainer: MatchExplainer,
    layout: BoxConfig,
}

impl BoxAssembler {
    /// Create an assembler from the intelligence configuration
    #[must_use]
    pub fn new(config: &IntelligenceConfig) -> Self {
        Self {
            scoring: ScoringEngine::new(config.scoring.clone()),
            explainer: MatchExplainer::new(config.scoring.clone()),
            layout: config.layout.clone(),
        }
    }

    /// Scoring engine used for rankings
    #[must_use]
    pub const fn scoring(&self) -> &ScoringEngine {
        &self.scoring
    }

    /// Explainer used for match reasons
    #[must_use]
    pub const fn explainer(&self) -> &MatchExplainer {
        &self.explainer
    }

    /// Layout constants
    #[must_use]
    pub const fn layout(&self) -> &BoxConfig {
        &self.layout
    }

    /// Assemble the weekly boxes
    ///
    /// Returns an empty list for an empty catalog. Hard-excluded dishes never
    /// appear unless every dish is excluded and the unfiltered fallback is
    /// enabled, in which case the box is built from the raw catalog.
    pub fn assemble<R>(
        &self,
        catalog: &[Dish],
        profile: Option<&UserProfile>,
        rng: &mut R,
    ) -> Vec<WeeklyBox>
    where
        R: RandomSource + ?Sized,
    {
        if catalog.is_empty() {
            debug!("empty catalog, no box assembled");
            return Vec::new();
        }

        let ranked: Vec<&Dish> = self
            .scoring
            .rank_eligible(catalog, profile, 0.0, &mut *rng)
            .into_iter()
            .map(|scored| scored.dish)
            .collect();

        let fallback: Vec<&Dish> = if ranked.is_empty() {
            if !self.layout.fallback_to_unfiltered {
                warn!(
                    catalog_size = catalog.len(),
                    "every dish is hard-excluded, no box assembled"
                );
                return Vec::new();
            }
            warn!(
                catalog_size = catalog.len(),
                "every dish is hard-excluded, falling back to the unfiltered catalog"
            );
            catalog.iter().collect()
        } else {
            ranked
        };

        debug!(
            catalog_size = catalog.len(),
            eligible = fallback.len(),
            "ranked catalog for box assembly"
        );

        (1..=self.layout.weeks)
            .map(|week| {
                let bias = f64::from(week - 1) * self.layout.week_bias;
                let mut pool: Vec<&Dish> = self
                    .scoring
                    .rank_eligible(catalog, profile, bias, &mut *rng)
                    .into_iter()
                    .map(|scored| scored.dish)
                    .collect();
                if pool.is_empty() {
                    pool.clone_from(&fallback);
                }
                self.assemble_week(week, &pool, profile)
            })
            .collect()
    }

    fn assemble_week(&self, week: u8, pool: &[&Dish], profile: Option<&UserProfile>) -> WeeklyBox {
        let (title, theme) = week_presentation(week, profile);
        let week_shift = usize::from(week - 1) * self.layout.week_offset;

        let days = (1..=self.layout.days_per_week)
            .map(|day| {
                let meals = MealSlot::ALL
                    .iter()
                    .map(|&slot| {
                        let idx = (usize::from(day - 1) * MealSlot::ALL.len()
                            + slot.index()
                            + week_shift)
                            % pool.len();
                        let reason = self.explainer.explain(pool[idx], profile);
                        let id = BoxMeal::grid_id(week, day, slot);
                        self.materialize(id, pool[idx], slot, reason)
                    })
                    .collect();
                DayPlan { day, meals }
            })
            .collect();

        WeeklyBox {
            week,
            title,
            theme,
            days,
        }
    }

    /// Build a box meal for a dish, filling display defaults
    #[must_use]
    pub fn materialize(
        &self,
        id: String,
        dish: &Dish,
        slot: MealSlot,
        match_reason: String,
    ) -> BoxMeal {
        let cooking_time = dish
            .cooking_time
            .as_deref()
            .map(str::trim)
            .filter(|time| !time.is_empty())
            .map_or_else(|| self.layout.default_cooking_time.clone(), str::to_owned);
        let image = dish
            .image_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map_or_else(|| self.placeholder_image(dish), str::to_owned);

        BoxMeal {
            id,
            dish_id: dish.identity().to_owned(),
            name: dish.name.clone(),
            cooking_time,
            calories: dish.calories.unwrap_or(self.layout.default_calories),
            image,
            category: dish.category.clone(),
            slot,
            match_reason,
            recipe: dish.recipe.clone(),
        }
    }

    fn placeholder_image(&self, dish: &Dish) -> String {
        let label = if dish.name.trim().is_empty() {
            "Repas"
        } else {
            dish.name.trim()
        };
        format!(
            "{}{}",
            self.layout.placeholder_image_base,
            urlencoding::encode(label)
        )
    }
}

/// Title and theme of a week, derived only from profile attributes
fn week_presentation(week: u8, profile: Option<&UserProfile>) -> (String, String) {
    let theme = WEEK_THEMES[usize::from(week.saturating_sub(1)) % WEEK_THEMES.len()];

    let Some(profile) = profile else {
        return (format!("Semaine {week} · Découverte"), theme.to_owned());
    };

    let objectives = profile.objectives();
    let focus = if objectives.weight_loss {
        "Légèreté".to_owned()
    } else if objectives.mass_gain {
        "Énergie".to_owned()
    } else if objectives.vegetarian {
        "Végétal".to_owned()
    } else if !profile.origin.trim().is_empty() {
        format!("Saveurs {}", profile.origin.trim())
    } else {
        "Découverte".to_owned()
    };

    let theme = if profile.country.trim().is_empty() {
        theme.to_owned()
    } else {
        format!("{theme} · inspirations {}", profile.country.trim())
    };

    (format!("Semaine {week} · {focus}"), theme)
}
