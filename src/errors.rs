// ABOUTME: Error types for the meal planning service re-exported from mealbox-core
// ABOUTME: Keeps a single AppError across computation, commit, and store layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use mealbox_core::errors::*;
