// ABOUTME: Data model for the meal planning service re-exported from mealbox-core
// ABOUTME: Catalog, profile, box, plan entry, and schedule types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use mealbox_core::models::*;
