// ABOUTME: Interactive customization of one assembled box before it is committed
// ABOUTME: Week and duration selection, per-entry enable toggles and swaps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::plan_commit::{CommitReport, PlanCommitEngine};
use crate::models::{Dish, PlanDuration, PlanEntry, UserProfile, WeeklyBox};
use chrono::NaiveDate;
use mealbox_intelligence::{project, RandomSource, SwapEngine};
use tracing::debug;
use uuid::Uuid;

/// Editable plan over a box assembled once
///
/// The boxes are kept as computed; only the projected entries change. A week
/// outside the box projects to no entries.
#[derive(Debug, Clone)]
pub struct PlanSession {
    boxes: Vec<WeeklyBox>,
    week: u8,
    duration: PlanDuration,
    entries: Vec<PlanEntry>,
    swapper: SwapEngine,
}

impl PlanSession {
    /// Start a session on `week` projected over `duration`
    ///
    /// `swapper` should share the assembler configuration that built `boxes`.
    #[must_use]
    pub fn new(
        boxes: Vec<WeeklyBox>,
        week: u8,
        duration: PlanDuration,
        swapper: SwapEngine,
    ) -> Self {
        let mut session = Self {
            boxes,
            week,
            duration,
            entries: Vec::new(),
            swapper,
        };
        session.reproject();
        session
    }

    /// Selected week
    #[must_use]
    pub const fn week(&self) -> u8 {
        self.week
    }

    /// Selected duration
    #[must_use]
    pub const fn duration(&self) -> PlanDuration {
        self.duration
    }

    /// The assembled boxes
    #[must_use]
    pub fn boxes(&self) -> &[WeeklyBox] {
        &self.boxes
    }

    /// Switch week, discarding edits
    pub fn select_week(&mut self, week: u8) {
        self.week = week;
        self.reproject();
    }

    /// Switch duration, discarding edits
    pub fn set_duration(&mut self, duration: PlanDuration) {
        self.duration = duration;
        self.reproject();
    }

    fn reproject(&mut self) {
        self.entries = self
            .boxes
            .iter()
            .find(|weekly_box| weekly_box.week == self.week)
            .map(|weekly_box| project(weekly_box, self.duration))
            .unwrap_or_default();
        debug!(
            week = self.week,
            days = self.duration.days(),
            entries = self.entries.len(),
            "projected plan entries"
        );
    }

    /// Toggle an entry; returns false when no entry has this id
    pub fn set_enabled(&mut self, entry_id: &str, enabled: bool) -> bool {
        let Some(entry) = self.entries.iter_mut().find(|entry| entry.id() == entry_id) else {
            return false;
        };
        entry.enabled = enabled;
        true
    }

    /// Replace one entry's dish, leaving every other entry untouched
    ///
    /// Returns the new entry, or `None` when no entry has this id.
    pub fn swap<R>(
        &mut self,
        entry_id: &str,
        catalog: &[Dish],
        profile: Option<&UserProfile>,
        rng: &mut R,
    ) -> Option<&PlanEntry>
    where
        R: RandomSource + ?Sized,
    {
        let position = self.entries.iter().position(|entry| entry.id() == entry_id)?;
        let swapped = self
            .swapper
            .swap(&self.entries[position], catalog, profile, rng);
        self.entries[position] = swapped;
        self.entries.get(position)
    }

    /// Current entries in day then slot order
    #[must_use]
    pub fn entries(&self) -> &[PlanEntry] {
        &self.entries
    }

    /// Entries that a commit would write
    #[must_use]
    pub fn enabled_count(&self) -> usize {
        self.entries.iter().filter(|entry| entry.enabled).count()
    }

    /// Entries of one day, empty for a day outside the projection
    pub fn day(&self, day_index: u8) -> impl Iterator<Item = &PlanEntry> {
        self.entries
            .iter()
            .filter(move |entry| entry.day_index == day_index)
    }

    /// Commit the enabled entries from `start_date`
    pub async fn commit(
        &self,
        engine: &PlanCommitEngine,
        user_id: Uuid,
        start_date: NaiveDate,
    ) -> CommitReport {
        engine.commit(user_id, &self.entries, start_date).await
    }
}
