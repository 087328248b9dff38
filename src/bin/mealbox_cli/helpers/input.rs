// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Loads catalog and profile JSON files and picks the random source
// ABOUTME: Seeded ChaCha when a seed is configured, thread randomness otherwise

use crate::SourceArgs;
use mealbox::config::ServerConfig;
use mealbox::errors::{AppError, AppResult};
use mealbox::models::{Dish, UserProfile};
use mealbox_intelligence::{RandomSource, SeededRandom, ThreadRandom};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use tracing::info;

/// Catalog and optional profile named by the arguments
pub fn load_inputs(source: &SourceArgs) -> AppResult<(Vec<Dish>, Option<UserProfile>)> {
    let catalog: Vec<Dish> = read_json(&source.catalog)?;
    let profile = source
        .profile
        .as_deref()
        .map(read_json::<UserProfile>)
        .transpose()?;
    info!(
        dishes = catalog.len(),
        has_profile = profile.is_some(),
        "inputs loaded"
    );
    Ok((catalog, profile))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let raw = fs::read_to_string(path).map_err(|e| {
        AppError::invalid_input(format!("Cannot read {}: {e}", path.display())).with_source(e)
    })?;
    Ok(serde_json::from_str(&raw)?)
}

/// Seed from the command line, then from the environment
pub fn random_source(seed: Option<u64>, config: &ServerConfig) -> Box<dyn RandomSource> {
    match seed.or(config.planning.rng_seed) {
        Some(seed) => Box::new(SeededRandom::new(seed)),
        None => Box::new(ThreadRandom),
    }
}
