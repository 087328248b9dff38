// ABOUTME: Commits enabled plan entries into the user's schedule from a start date
// ABOUTME: Clears each (date, slot) before inserting and collects per-entry failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Plan commit
//!
//! Each enabled entry targets `start_date + (day_index - 1)` and its slot.
//! Writes for different `(date, slot)` keys run concurrently up to the
//! configured bound. Within one key the planned occupant, the logged
//! occupant and the insert are awaited strictly in that order, so a slot
//! never holds two meals at once. A failed entry is recorded in the
//! [`CommitReport`] and never stops its siblings. There is no rollback:
//! entries written before a cancellation stay written.

use crate::database::ScheduleStore;
use crate::errors::{AppError, AppResult};
use crate::models::{MealSlot, PlanEntry, ScheduledMeal};
use chrono::{DateTime, Days, NaiveDate, Utc};
use futures_util::{stream, StreamExt};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// One entry that could not be written
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitFailure {
    /// Plan entry identity
    pub entry_id: String,
    /// Target date, absent when it could not be computed
    pub date: Option<NaiveDate>,
    /// Target slot
    pub slot: MealSlot,
    /// Error message
    pub error: String,
}

/// Outcome of one commit
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CommitReport {
    /// Entries written
    pub succeeded: usize,
    /// Entries not written
    pub failed: usize,
    /// Details of each failed entry
    pub failures: Vec<CommitFailure>,
}

impl CommitReport {
    /// Enabled entries attempted
    #[must_use]
    pub const fn total(&self) -> usize {
        self.succeeded + self.failed
    }

    /// Whether every attempted entry was written
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.failed == 0
    }

    /// User-facing "N of M planned" line
    #[must_use]
    pub fn summary(&self) -> String {
        format!("{} sur {} repas planifiés", self.succeeded, self.total())
    }
}

/// Writes plan entries into a [`ScheduleStore`]
#[derive(Clone)]
pub struct PlanCommitEngine {
    store: Arc<dyn ScheduleStore>,
    concurrency: usize,
}

impl PlanCommitEngine {
    /// Create an engine; a zero concurrency bound is raised to one
    #[must_use]
    pub fn new(store: Arc<dyn ScheduleStore>, concurrency: usize) -> Self {
        Self {
            store,
            concurrency: concurrency.max(1),
        }
    }

    /// Commit the enabled entries starting at `start_date`
    pub async fn commit(
        &self,
        user_id: Uuid,
        entries: &[PlanEntry],
        start_date: NaiveDate,
    ) -> CommitReport {
        let created_at = Utc::now();
        let mut report = CommitReport::default();

        // entries sharing a key are written one after the other
        let mut by_key: BTreeMap<(NaiveDate, usize), Vec<(&PlanEntry, NaiveDate)>> =
            BTreeMap::new();
        for entry in entries.iter().filter(|entry| entry.enabled) {
            match target_date(start_date, entry.day_index) {
                Ok(date) => by_key
                    .entry((date, entry.slot().index()))
                    .or_default()
                    .push((entry, date)),
                Err(e) => record_failure(&mut report, entry, None, &e),
            }
        }

        debug!(
            user_id = %user_id,
            keys = by_key.len(),
            concurrency = self.concurrency,
            "committing plan entries"
        );

        let outcomes: Vec<Vec<(&PlanEntry, NaiveDate, AppResult<()>)>> =
            stream::iter(by_key.into_values())
                .map(|group| self.write_group(user_id, group, created_at))
                .buffer_unordered(self.concurrency)
                .collect()
                .await;

        for (entry, date, outcome) in outcomes.into_iter().flatten() {
            match outcome {
                Ok(()) => report.succeeded += 1,
                Err(e) => record_failure(&mut report, entry, Some(date), &e),
            }
        }

        info!(
            user_id = %user_id,
            start_date = %start_date,
            succeeded = report.succeeded,
            failed = report.failed,
            "{}",
            report.summary()
        );
        report
    }

    async fn write_group<'a>(
        &self,
        user_id: Uuid,
        group: Vec<(&'a PlanEntry, NaiveDate)>,
        created_at: DateTime<Utc>,
    ) -> Vec<(&'a PlanEntry, NaiveDate, AppResult<()>)> {
        let mut outcomes = Vec::with_capacity(group.len());
        for (entry, date) in group {
            let outcome = self.write_entry(user_id, entry, date, created_at).await;
            outcomes.push((entry, date, outcome));
        }
        outcomes
    }

    async fn write_entry(
        &self,
        user_id: Uuid,
        entry: &PlanEntry,
        date: NaiveDate,
        created_at: DateTime<Utc>,
    ) -> AppResult<()> {
        let slot = entry.slot();
        let planned = self.store.delete_scheduled_meal(user_id, date, slot).await?;
        let logged = self.store.delete_logged_meal(user_id, date, slot).await?;
        if planned + logged > 0 {
            debug!(
                date = %date,
                slot = %slot,
                replaced = planned + logged,
                "cleared occupied slot"
            );
        }

        let meal = ScheduledMeal::planned(&entry.meal, date, created_at);
        self.store.insert_scheduled_meal(user_id, &meal).await
    }
}

/// `start_date + (day_index - 1)` days
fn target_date(start_date: NaiveDate, day_index: u8) -> AppResult<NaiveDate> {
    let offset = day_index
        .checked_sub(1)
        .ok_or_else(|| AppError::invalid_input("day index starts at 1"))?;
    start_date
        .checked_add_days(Days::new(u64::from(offset)))
        .ok_or_else(|| AppError::out_of_range(format!("{start_date} + {offset} days")))
}

fn record_failure(
    report: &mut CommitReport,
    entry: &PlanEntry,
    date: Option<NaiveDate>,
    error: &AppError,
) {
    warn!(
        entry_id = %entry.id(),
        date = ?date,
        slot = %entry.slot(),
        error = %error,
        "plan entry not committed"
    );
    report.failed += 1;
    report.failures.push(CommitFailure {
        entry_id: entry.id().to_owned(),
        date,
        slot: entry.slot(),
        error: error.to_string(),
    });
}
