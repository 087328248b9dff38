// ABOUTME: Multi-criteria dish scoring against a user profile with allergy hard exclusion
// ABOUTME: Adds cultural, learned, objective and preference terms plus a variety jitter
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Dish scoring.
//!
//! `score` is impure: every call adds a uniform jitter so that
//! repeated rankings vary. Callers that need a stable result for one render
//! must score once and reuse the ranking.

use crate::config::ScoringConfig;
use crate::random::RandomSource;
use mealbox_core::constants::{defaults, keywords, scores, tokenize};
use mealbox_core::models::{Dish, UserProfile};

/// A catalog dish with the score it received in one ranking pass
#[derive(Debug, Clone, Copy)]
pub struct ScoredDish<'a> {
    /// The dish
    pub dish: &'a Dish,
    /// Score, higher is better
    pub score: f64,
}

/// Scores one dish against one profile
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    /// Create an engine with explicit weights
    #[must_use]
    pub const fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Weights in use
    #[must_use]
    pub const fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score a dish, higher is better
    ///
    /// Without a profile the score is uniform in `[0, cold_start_span)`. An
    /// allergy token found in the dish name or category short-circuits to
    /// [`scores::HARD_EXCLUSION`].
    pub fn score<R>(&self, dish: &Dish, profile: Option<&UserProfile>, rng: &mut R) -> f64
    where
        R: RandomSource + ?Sized,
    {
        let Some(profile) = profile else {
            return rng.next_float() * self.config.cold_start_span;
        };

        let name = dish.name.to_lowercase();
        let category = dish.category.to_lowercase();
        let origin = dish.origin.to_lowercase();

        if is_allergen(&profile.allergies, &name, &category) {
            return scores::HARD_EXCLUSION;
        }

        let cfg = &self.config;
        let mut score = 0.0;

        if profile.matches_origin(&dish.origin) {
            score += cfg.origin_bonus;
        }
        if profile.matches_country(&dish.origin) {
            score += cfg.country_bonus;
        }

        if let Some(learned) = &profile.virtual_profile {
            score += learned.origin_score(&dish.origin) * cfg.learned_origin_weight;
            score += learned.category_score(&dish.category) * cfg.learned_category_weight;
        }

        score += self.objective_alignment(profile, dish, &name, &category);

        let liked = tokenize(&profile.preferences).iter().any(|token| {
            name.contains(token.as_str())
                || category.contains(token.as_str())
                || origin.contains(token.as_str())
        });
        if liked {
            score += cfg.preference_bonus;
        }

        score + rng.next_float() * cfg.jitter_span
    }

    fn objective_alignment(
        &self,
        profile: &UserProfile,
        dish: &Dish,
        name: &str,
        category: &str,
    ) -> f64 {
        let cfg = &self.config;
        let objectives = profile.objectives();
        let calories = dish.calories.unwrap_or(defaults::SCORING_CALORIES);
        let mut adjustment = 0.0;

        if objectives.weight_loss {
            if calories < cfg.light_calories {
                adjustment += cfg.light_bonus;
            } else if calories < cfg.moderate_calories {
                adjustment += cfg.moderate_bonus;
            } else if calories > cfg.heavy_calories {
                adjustment -= cfg.heavy_penalty;
            }
        }

        if objectives.mass_gain && calories > cfg.energy_dense_calories {
            adjustment += cfg.energy_dense_bonus;
            if keywords::contains_any(name, keywords::HIGH_PROTEIN)
                || keywords::contains_any(category, keywords::HIGH_PROTEIN)
            {
                adjustment += cfg.protein_bonus;
            }
        }

        if objectives.vegetarian && keywords::contains_any(name, keywords::MEAT) {
            adjustment -= cfg.meat_penalty;
        }

        adjustment
    }

    /// Score every dish once and sort best first
    ///
    /// Hard-excluded dishes are kept with their sentinel score; callers filter
    /// them with [`scores::is_hard_excluded`] or use [`Self::rank_eligible`].
    pub fn rank<'a, R>(
        &self,
        catalog: &'a [Dish],
        profile: Option<&UserProfile>,
        bias: f64,
        rng: &mut R,
    ) -> Vec<ScoredDish<'a>>
    where
        R: RandomSource + ?Sized,
    {
        let mut ranked: Vec<ScoredDish<'a>> = catalog
            .iter()
            .map(|dish| {
                let score = self.score(dish, profile, &mut *rng);
                // the sentinel stays a sentinel whatever the bias
                let score = if scores::is_hard_excluded(score) {
                    score
                } else {
                    score + bias
                };
                ScoredDish { dish, score }
            })
            .collect();
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked
    }

    /// Ranked dishes with hard-excluded ones removed
    pub fn rank_eligible<'a, R>(
        &self,
        catalog: &'a [Dish],
        profile: Option<&UserProfile>,
        bias: f64,
        rng: &mut R,
    ) -> Vec<ScoredDish<'a>>
    where
        R: RandomSource + ?Sized,
    {
        let mut ranked = self.rank(catalog, profile, bias, rng);
        ranked.retain(|scored| !scores::is_hard_excluded(scored.score));
        ranked
    }
}

/// Whether any allergy token occurs in the (lowercase) name or category
fn is_allergen(allergies: &str, name: &str, category: &str) -> bool {
    tokenize(allergies)
        .iter()
        .any(|token| name.contains(token.as_str()) || category.contains(token.as_str()))
}
