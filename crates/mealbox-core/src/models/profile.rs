// ABOUTME: User nutrition profile and externally learned per-origin/category affinities
// ABOUTME: Classifies the free-text objective into the keyword families used for scoring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::keywords;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Learned affinity weights maintained by the interaction-tracking service
///
/// This crate never trains these numbers. They are read as-is and weighted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualProfile {
    /// Affinity per dish origin
    #[serde(default)]
    pub origin_scores: HashMap<String, f64>,
    /// Affinity per dish category
    #[serde(default)]
    pub category_scores: HashMap<String, f64>,
    /// Number of interactions the weights were learned from
    #[serde(default)]
    pub total_interactions: u64,
}

impl VirtualProfile {
    /// Affinity for an origin, zero when unknown
    #[must_use]
    pub fn origin_score(&self, origin: &str) -> f64 {
        self.origin_scores.get(origin).copied().unwrap_or(0.0)
    }

    /// Affinity for a category, zero when unknown
    #[must_use]
    pub fn category_score(&self, category: &str) -> f64 {
        self.category_scores.get(category).copied().unwrap_or(0.0)
    }
}

/// A user's nutrition profile as supplied by the profile store
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Cultural origin ("Marocaine")
    #[serde(default)]
    pub origin: String,
    /// Country of residence or heritage
    #[serde(default)]
    pub country: String,
    /// Free-text main objective, keyword-matched
    #[serde(default)]
    pub main_objective: String,
    /// Free-text allergies, tokenized on separators
    #[serde(default)]
    pub allergies: String,
    /// Free-text preferences, tokenized on separators
    #[serde(default)]
    pub preferences: String,
    /// Learned affinities, when the tracking service has any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub virtual_profile: Option<VirtualProfile>,
}

/// Objective families detected in `main_objective`
///
/// Families are independent: an objective may hit several.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct Objectives {
    /// "poids", "minceur", "perte"
    pub weight_loss: bool,
    /// "masse", "muscle", "prise"
    pub mass_gain: bool,
    /// vegetarian or vegan wording
    pub vegetarian: bool,
}

impl UserProfile {
    /// Classify the main objective into keyword families
    #[must_use]
    pub fn objectives(&self) -> Objectives {
        let objective = self.main_objective.to_lowercase();
        Objectives {
            weight_loss: keywords::contains_any(&objective, keywords::WEIGHT_LOSS),
            mass_gain: keywords::contains_any(&objective, keywords::MASS_GAIN),
            vegetarian: keywords::contains_any(&objective, keywords::VEGETARIAN),
        }
    }

    /// Whether the profile origin occurs in a dish origin (case-insensitive)
    #[must_use]
    pub fn matches_origin(&self, dish_origin: &str) -> bool {
        contains_ignore_case(dish_origin, &self.origin)
    }

    /// Whether the profile country occurs in a dish origin (case-insensitive)
    #[must_use]
    pub fn matches_country(&self, dish_origin: &str) -> bool {
        contains_ignore_case(dish_origin, &self.country)
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    let needle = needle.trim();
    !needle.is_empty()
        && !haystack.is_empty()
        && haystack.to_lowercase().contains(&needle.to_lowercase())
}
