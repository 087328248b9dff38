// ABOUTME: Suspending services of the meal planner: plan sessions and schedule commits
// ABOUTME: Glue between the pure intelligence crate and the schedule store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Commit of plan entries into the schedule store
pub mod plan_commit;
/// Interactive plan customization
pub mod plan_session;

pub use plan_commit::{CommitFailure, CommitReport, PlanCommitEngine};
pub use plan_session::PlanSession;
