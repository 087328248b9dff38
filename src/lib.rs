// ABOUTME: Main library entry point for the mealbox personalized meal planner
// ABOUTME: Wires the intelligence crate to schedule storage, configuration, and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Mealbox
//!
//! Builds a personalized 4-week meal box from a dish catalog and a nutrition
//! profile, lets the user customize a week of it, and commits the result into
//! a per-user schedule where each day holds at most one meal per slot.
//!
//! ## Architecture
//!
//! - **`mealbox-core`**: data model, errors, keyword families
//! - **`mealbox-intelligence`**: scoring, explanations, assembly, swaps
//! - **database**: the [`ScheduleStore`](database::ScheduleStore) collaborator
//! - **services**: [`PlanSession`](services::PlanSession) and
//!   [`PlanCommitEngine`](services::PlanCommitEngine)
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use chrono::NaiveDate;
//! use mealbox::database::InMemoryScheduleStore;
//! use mealbox::models::{Dish, PlanDuration};
//! use mealbox::services::{PlanCommitEngine, PlanSession};
//! use mealbox_intelligence::{BoxAssembler, SeededRandom, SwapEngine};
//! use uuid::Uuid;
//!
//! # async fn demo() {
//! let catalog = vec![Dish::new("1", "Couscous", "Plat", "Marocaine")];
//! let mut rng = SeededRandom::new(7);
//! let assembler = BoxAssembler::default();
//! let boxes = assembler.assemble(&catalog, None, &mut rng);
//!
//! let session = PlanSession::new(boxes, 1, PlanDuration::ThreeDays, SwapEngine::new(assembler));
//! let engine = PlanCommitEngine::new(Arc::new(InMemoryScheduleStore::new()), 4);
//! let Some(start) = NaiveDate::from_ymd_opt(2025, 6, 2) else { return };
//! let report = session.commit(&engine, Uuid::new_v4(), start).await;
//! println!("{}", report.summary());
//! # }
//! ```

/// Runtime configuration
pub mod config;

/// Schedule store trait and backends
pub mod database;

/// Error types
pub mod errors;

/// Structured logging setup
pub mod logging;

/// Data model
pub mod models;

/// Plan sessions and commits
pub mod services;
