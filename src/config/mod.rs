// ABOUTME: Configuration module for runtime settings of the meal planning service
// ABOUTME: Re-exports environment configuration and the intelligence tuning config
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Environment-driven runtime configuration
pub mod environment;

pub use environment::{PlanningConfig, ServerConfig};
pub use mealbox_intelligence::config::IntelligenceConfig;
