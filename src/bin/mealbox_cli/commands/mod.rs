// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for mealbox-cli
// ABOUTME: Box and plan commands, calendar inspection commands

pub mod calendar;
pub mod plan;
