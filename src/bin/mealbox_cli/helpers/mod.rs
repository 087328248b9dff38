// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports helper modules for mealbox-cli
// ABOUTME: Input loading and output formatting

pub mod display;
pub mod input;
