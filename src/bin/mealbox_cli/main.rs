// ABOUTME: mealbox-cli - command-line front end of the meal planner
// ABOUTME: Assembles boxes, projects and commits plans, and inspects the stored schedule
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Print the 4-week box for a catalog and profile
//! mealbox-cli box --catalog dishes.json --profile profile.json --seed 42
//!
//! # Project week 2 over 3 days, swap one meal, and commit from a start date
//! mealbox-cli plan --catalog dishes.json --profile profile.json --week 2 --days 3 \
//!     --swap w2-d1-lunch --commit --user 6f1c... --start 2025-06-02
//!
//! # Show stored meals for a date range
//! mealbox-cli calendar --user 6f1c... --from 2025-06-02 --to 2025-06-08
//!
//! # Remove every meal of one day
//! mealbox-cli clear-day --user 6f1c... --date 2025-06-03
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use mealbox::config::ServerConfig;
use mealbox::logging::LoggingConfig;
use std::path::PathBuf;
use tracing::debug;
use uuid::Uuid;

#[derive(Parser)]
#[command(
    name = "mealbox-cli",
    about = "Personalized meal box planner",
    long_about = "Builds a 4-week personalized meal box, customizes a week of it, and commits it to a schedule."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Database URL override
    #[arg(long, global = true)]
    database_url: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Print the assembled 4-week box as JSON
    #[command(name = "box")]
    Assemble {
        #[command(flatten)]
        source: SourceArgs,

        /// Only print this week (1-4)
        #[arg(long)]
        week: Option<u8>,
    },

    /// Project a week into plan entries, edit them, and optionally commit
    Plan(PlanArgs),

    /// List stored meals between two dates
    Calendar {
        /// User id
        #[arg(long)]
        user: Uuid,

        /// First date (YYYY-MM-DD)
        #[arg(long)]
        from: NaiveDate,

        /// Last date, inclusive (YYYY-MM-DD)
        #[arg(long)]
        to: NaiveDate,
    },

    /// Remove every meal of one day
    ClearDay {
        /// User id
        #[arg(long)]
        user: Uuid,

        /// Day to clear (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,
    },
}

/// Catalog, profile and randomness inputs
#[derive(Args)]
struct SourceArgs {
    /// JSON array of dishes
    #[arg(long)]
    catalog: PathBuf,

    /// JSON user profile, cold start when omitted
    #[arg(long)]
    profile: Option<PathBuf>,

    /// Seed for a reproducible box
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Args)]
struct PlanArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Week of the box to plan (1-4)
    #[arg(long, default_value = "1")]
    week: u8,

    /// Plan length in days (3 or 7)
    #[arg(long)]
    days: Option<u32>,

    /// Entry ids to leave out of the commit
    #[arg(long = "disable")]
    disabled: Vec<String>,

    /// Entry ids to swap for another dish
    #[arg(long = "swap")]
    swaps: Vec<String>,

    /// Write the enabled entries to the schedule
    #[arg(long, requires_all = ["user", "start"])]
    commit: bool,

    /// User id for the commit
    #[arg(long)]
    user: Option<Uuid>,

    /// Date of day 1 (YYYY-MM-DD)
    #[arg(long)]
    start: Option<NaiveDate>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging.level = "debug".to_owned();
    }
    logging.init()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(database_url) = cli.database_url {
        config.database_url = database_url;
    }
    debug!(database_url = %config.database_url, "configuration loaded");

    match cli.command {
        Command::Assemble { source, week } => {
            commands::plan::print_box(&source, week, &config)?;
        }
        Command::Plan(args) => {
            commands::plan::run(&args, &config).await?;
        }
        Command::Calendar { user, from, to } => {
            commands::calendar::list(&config, user, from, to).await?;
        }
        Command::ClearDay { user, date } => {
            commands::calendar::clear_day(&config, user, date).await?;
        }
    }

    Ok(())
}
