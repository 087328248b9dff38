// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Box and plan commands for mealbox-cli
// ABOUTME: Assemble once, project a week, apply toggles and swaps, then commit

use crate::helpers::display::{display_commit_report, print_json};
use crate::helpers::input::{load_inputs, random_source};
use crate::{PlanArgs, SourceArgs};
use mealbox::config::ServerConfig;
use mealbox::database::SqliteScheduleStore;
use mealbox::errors::{AppError, AppResult};
use mealbox::models::PlanDuration;
use mealbox::services::{PlanCommitEngine, PlanSession};
use mealbox_intelligence::{BoxAssembler, IntelligenceConfig, SwapEngine};
use std::sync::Arc;
use tracing::{info, warn};

fn assembler() -> AppResult<BoxAssembler> {
    let config = IntelligenceConfig::load().map_err(|e| AppError::config(e.to_string()))?;
    Ok(BoxAssembler::new(&config))
}

/// Print the box, or one week of it
pub fn print_box(source: &SourceArgs, week: Option<u8>, config: &ServerConfig) -> AppResult<()> {
    let (catalog, profile) = load_inputs(source)?;
    let mut rng = random_source(source.seed, config);
    let boxes = assembler()?.assemble(&catalog, profile.as_ref(), rng.as_mut());

    match week {
        Some(week) => {
            let selected: Vec<_> = boxes.iter().filter(|b| b.week == week).collect();
            print_json(&selected)
        }
        None => print_json(&boxes),
    }
}

/// Run a planning session and optionally commit it
pub async fn run(args: &PlanArgs, config: &ServerConfig) -> AppResult<()> {
    let duration = match args.days {
        Some(days) => PlanDuration::from_days(days)
            .ok_or_else(|| AppError::invalid_input(format!("--days must be 3 or 7, got {days}")))?,
        None => config.planning.default_duration,
    };

    let (catalog, profile) = load_inputs(&args.source)?;
    let mut rng = random_source(args.source.seed, config);
    let assembler = assembler()?;
    let boxes = assembler.assemble(&catalog, profile.as_ref(), rng.as_mut());

    let mut session = PlanSession::new(boxes, args.week, duration, SwapEngine::new(assembler));

    for entry_id in &args.swaps {
        match session.swap(entry_id, &catalog, profile.as_ref(), rng.as_mut()) {
            Some(entry) => info!(entry_id = %entry_id, dish = %entry.meal.name, "entry swapped"),
            None => warn!(entry_id = %entry_id, "no such entry to swap"),
        }
    }
    for entry_id in &args.disabled {
        if !session.set_enabled(entry_id, false) {
            warn!(entry_id = %entry_id, "no such entry to disable");
        }
    }

    print_json(session.entries())?;

    if !args.commit {
        return Ok(());
    }
    let (Some(user_id), Some(start_date)) = (args.user, args.start) else {
        return Err(AppError::invalid_input("--commit needs --user and --start"));
    };

    let store = SqliteScheduleStore::connect(&config.database_url).await?;
    let engine = PlanCommitEngine::new(Arc::new(store), config.planning.commit_concurrency);
    let report = session.commit(&engine, user_id, start_date).await;
    display_commit_report(&report);
    Ok(())
}
