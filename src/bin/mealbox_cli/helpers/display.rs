// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for mealbox-cli
// ABOUTME: Pretty JSON on stdout and a short commit summary

use mealbox::errors::AppResult;
use mealbox::services::CommitReport;
use serde::Serialize;

/// Print a value as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print the "N of M planned" line and each failure
pub fn display_commit_report(report: &CommitReport) {
    println!("{}", report.summary());
    for failure in &report.failures {
        let date = failure
            .date
            .map_or_else(|| "?".to_owned(), |date| date.to_string());
        println!(
            "   {} ({date}, {}): {}",
            failure.entry_id,
            failure.slot.label(),
            failure.error
        );
    }
}
