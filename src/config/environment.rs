// ABOUTME: Environment configuration for the schedule store connection and planning defaults
// ABOUTME: Parses MEALBOX_* variables into typed settings with documented fallbacks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration

use crate::errors::{AppError, AppResult};
use mealbox_core::models::PlanDuration;
use serde::{Deserialize, Serialize};
use std::env;
use tracing::warn;

/// Default SQLite location for the schedule store
pub const DEFAULT_DATABASE_URL: &str = "sqlite:./data/mealbox.db";

/// Default number of (date, slot) writes in flight during a commit
pub const DEFAULT_COMMIT_CONCURRENCY: usize = 4;

/// Planning session defaults
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlanningConfig {
    /// Bound on concurrent per-slot writes during a commit
    pub commit_concurrency: usize,
    /// Duration projected when a session starts
    pub default_duration: PlanDuration,
    /// Seed for reproducible boxes, random when unset
    pub rng_seed: Option<u64>,
}

impl Default for PlanningConfig {
    fn default() -> Self {
        Self {
            commit_concurrency: DEFAULT_COMMIT_CONCURRENCY,
            default_duration: PlanDuration::SevenDays,
            rng_seed: None,
        }
    }
}

/// Top-level runtime configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerConfig {
    /// Schedule store connection string
    pub database_url: String,
    /// Planning defaults
    pub planning: PlanningConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_owned(),
            planning: PlanningConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is present but malformed
    pub fn from_env() -> AppResult<Self> {
        let database_url = env_var_or("MEALBOX_DATABASE_URL", DEFAULT_DATABASE_URL);

        let commit_concurrency = match env::var("MEALBOX_COMMIT_CONCURRENCY") {
            Ok(raw) => raw.trim().parse::<usize>().map_err(|e| {
                AppError::config(format!("MEALBOX_COMMIT_CONCURRENCY '{raw}': {e}"))
            })?,
            Err(_) => DEFAULT_COMMIT_CONCURRENCY,
        };
        if commit_concurrency == 0 {
            return Err(AppError::config(
                "MEALBOX_COMMIT_CONCURRENCY must be at least 1",
            ));
        }

        let default_duration = match env::var("MEALBOX_DEFAULT_DURATION") {
            Ok(raw) => raw
                .trim()
                .parse::<u32>()
                .ok()
                .and_then(PlanDuration::from_days)
                .ok_or_else(|| {
                    AppError::config(format!("MEALBOX_DEFAULT_DURATION must be 3 or 7, got '{raw}'"))
                })?,
            Err(_) => PlanDuration::SevenDays,
        };

        let rng_seed = match env::var("MEALBOX_RNG_SEED") {
            Ok(raw) => match raw.trim().parse::<u64>() {
                Ok(seed) => Some(seed),
                Err(e) => {
                    warn!(value = %raw, error = %e, "ignoring invalid MEALBOX_RNG_SEED");
                    None
                }
            },
            Err(_) => None,
        };

        Ok(Self {
            database_url,
            planning: PlanningConfig {
                commit_concurrency,
                default_duration,
                rng_seed,
            },
        })
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
