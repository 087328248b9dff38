// ABOUTME: Tunable weights for dish scoring and constants for the box grid layout
// ABOUTME: Defaults carry the documented constants; environment overrides are validated
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Intelligence configuration.
//!
//! The week bias and cross-week offset were chosen empirically to spread
//! repeats across the grid. The contract callers rely on is the
//! anti-repetition property of the assembler, not these exact values, so they
//! are overridable for retuning against real catalog sizes.

use mealbox_core::constants::defaults;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Value outside acceptable range
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Failed to parse an environment override
    #[error("Parse error for {variable}: {value}")]
    Parse {
        /// Variable name
        variable: &'static str,
        /// Raw value that failed to parse
        value: String,
    },
}

/// Weights and thresholds of the additive dish score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Span of the uniform cold-start score when no profile exists
    pub cold_start_span: f64,
    /// Bonus when the profile origin matches the dish origin
    pub origin_bonus: f64,
    /// Bonus when the profile country matches the dish origin
    pub country_bonus: f64,
    /// Multiplier for learned origin affinity
    pub learned_origin_weight: f64,
    /// Multiplier for learned category affinity
    pub learned_category_weight: f64,
    /// Weight loss: calories below this get the strong bonus
    pub light_calories: f64,
    /// Weight loss: strong bonus
    pub light_bonus: f64,
    /// Weight loss: calories below this get the moderate bonus
    pub moderate_calories: f64,
    /// Weight loss: moderate bonus
    pub moderate_bonus: f64,
    /// Weight loss: calories above this are penalized
    pub heavy_calories: f64,
    /// Weight loss: penalty (subtracted)
    pub heavy_penalty: f64,
    /// Mass gain: calories above this get the bonus
    pub energy_dense_calories: f64,
    /// Mass gain: bonus for energy dense dishes
    pub energy_dense_bonus: f64,
    /// Mass gain: extra bonus for high-protein dishes
    pub protein_bonus: f64,
    /// Vegetarian: penalty (subtracted) for meat dishes
    pub meat_penalty: f64,
    /// Bonus when any preference token matches
    pub preference_bonus: f64,
    /// Span of the per-call variety jitter
    pub jitter_span: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            cold_start_span: 10.0,
            origin_bonus: 35.0,
            country_bonus: 20.0,
            learned_origin_weight: 6.0,
            learned_category_weight: 5.0,
            light_calories: 350.0,
            light_bonus: 18.0,
            moderate_calories: 500.0,
            moderate_bonus: 10.0,
            heavy_calories: 700.0,
            heavy_penalty: 15.0,
            energy_dense_calories: 600.0,
            energy_dense_bonus: 18.0,
            protein_bonus: 12.0,
            meat_penalty: 25.0,
            preference_bonus: 12.0,
            jitter_span: 6.0,
        }
    }
}

/// Layout constants of the 4-week box and of swaps
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoxConfig {
    /// Number of weeks in a box
    pub weeks: u8,
    /// Days per week
    pub days_per_week: u8,
    /// Score bias added per week after the first
    pub week_bias: f64,
    /// Index offset applied per week after the first
    pub week_offset: usize,
    /// Swap picks uniformly among this many top candidates
    pub swap_top_k: usize,
    /// Calories shown when a dish has none
    pub default_calories: f64,
    /// Cooking time shown when a dish has none
    pub default_cooking_time: String,
    /// Base URL for placeholder images
    pub placeholder_image_base: String,
    /// Use the unfiltered catalog when every dish is hard-excluded
    pub fallback_to_unfiltered: bool,
}

impl Default for BoxConfig {
    fn default() -> Self {
        Self {
            weeks: 4,
            days_per_week: 7,
            week_bias: 0.5,
            week_offset: 11,
            swap_top_k: 5,
            default_calories: defaults::BOX_CALORIES,
            default_cooking_time: defaults::COOKING_TIME.to_owned(),
            placeholder_image_base: defaults::PLACEHOLDER_IMAGE_BASE.to_owned(),
            fallback_to_unfiltered: true,
        }
    }
}

/// Configuration of the whole intelligence crate
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// Scoring weights
    pub scoring: ScoringConfig,
    /// Box layout
    pub layout: BoxConfig,
}

impl IntelligenceConfig {
    /// Defaults plus environment overrides, validated
    ///
    /// # Errors
    ///
    /// Returns an error if an override does not parse or the result is invalid
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Some(bias) = env_override("MEALBOX_WEEK_BIAS")? {
            self.layout.week_bias = bias;
        }
        if let Some(offset) = env_override("MEALBOX_WEEK_OFFSET")? {
            self.layout.week_offset = offset;
        }
        if let Some(top_k) = env_override("MEALBOX_SWAP_TOP_K")? {
            self.layout.swap_top_k = top_k;
        }
        if let Some(span) = env_override("MEALBOX_JITTER_SPAN")? {
            self.scoring.jitter_span = span;
        }
        Ok(self)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error when a weight or layout constant is out of range
    pub fn validate(&self) -> Result<(), ConfigError> {
        let scoring = &self.scoring;
        if scoring.jitter_span < 0.0 || scoring.cold_start_span < 0.0 {
            return Err(ConfigError::InvalidRange(
                "jitter and cold-start spans must be non-negative",
            ));
        }
        if scoring.light_calories >= scoring.moderate_calories
            || scoring.moderate_calories >= scoring.heavy_calories
        {
            return Err(ConfigError::InvalidRange(
                "calorie thresholds must satisfy light < moderate < heavy",
            ));
        }
        let layout = &self.layout;
        if layout.weeks == 0 || layout.days_per_week == 0 {
            return Err(ConfigError::InvalidRange(
                "weeks and days_per_week must be positive",
            ));
        }
        if layout.swap_top_k == 0 {
            return Err(ConfigError::InvalidRange("swap_top_k must be positive"));
        }
        if layout.week_bias < 0.0 {
            return Err(ConfigError::InvalidRange("week_bias must be non-negative"));
        }
        Ok(())
    }
}

fn env_override<T: FromStr>(variable: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(variable) {
        Ok(value) => {
            let parsed = value.trim().parse::<T>();
            parsed
                .map(Some)
                .map_err(|_| ConfigError::Parse { variable, value })
        }
        Err(_) => Ok(None),
    }
}
