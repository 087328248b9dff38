// ABOUTME: Core types and constants for the Mealbox personalization engine
// ABOUTME: Foundation crate with the meal data model, error handling, and keyword constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Mealbox Core
//!
//! Foundation crate shared by the scoring engine and the schedule side of the
//! workspace. It carries no behavior beyond small accessors so that it changes
//! rarely and keeps incremental builds cheap.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode` and the `AppResult` alias
//! - **constants**: score sentinels, display defaults and keyword families
//! - **models**: catalog, profile, box, plan and schedule types

/// Unified error handling with stable error codes
pub mod errors;

/// Score sentinels, defaults and keyword families
pub mod constants;

/// Catalog, profile, box, plan and schedule data model
pub mod models;
