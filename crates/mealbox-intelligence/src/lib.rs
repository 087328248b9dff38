// ABOUTME: Meal personalization engine: scoring, explanations, box assembly, projection, swaps
// ABOUTME: Pure computation over read-only catalog and profile snapshots with injectable randomness
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Mealbox Intelligence
//!
//! Turns a dish catalog and a nutrition profile into a 4-week meal box and
//! supports editing it before it is committed to a schedule.
//!
//! ```text
//! catalog + profile -> BoxAssembler -> [WeeklyBox; 4]
//!   -> project(week, duration) -> Vec<PlanEntry>
//!   -> SwapEngine::swap (0..n times) -> commit (outside this crate)
//! ```
//!
//! Nothing here suspends or holds state between calls. Catalog and profile
//! are passed explicitly to every operation.

/// Box assembly over a ranked catalog
pub mod assembler;
/// Weights and layout constants
pub mod config;
/// Match reasons
pub mod explainer;
/// Week to plan-entry projection
pub mod projector;
/// Injectable random sources
pub mod random;
/// Dish scoring and ranking
pub mod scoring;
/// Single-entry substitution
pub mod swap;

pub use assembler::BoxAssembler;
pub use config::{BoxConfig, ConfigError, IntelligenceConfig, ScoringConfig};
pub use explainer::{MatchExplainer, GENERIC_REASON};
pub use projector::{day_label, project};
pub use random::{ConstantRandom, RandomSource, SeededRandom, ThreadRandom};
pub use scoring::{ScoredDish, ScoringEngine};
pub use swap::SwapEngine;
