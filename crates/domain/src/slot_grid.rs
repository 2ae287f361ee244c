// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Slot grid generation for a working day.
//!
//! This module turns a working window, a slot interval, and a break
//! list into the maximal ordered sequence of equal-length, pairwise
//! disjoint candidate slots. It is a pure function of its inputs and
//! carries no hidden state: the same [`SlotGrid`] always produces the
//! same boundaries.
//!
//! ## Invariants
//!
//! - Every produced slot has length exactly `interval_minutes`
//! - Every produced slot lies within `[start, end)`; no partial
//!   trailing slot is emitted
//! - Slots are half-open `[start, end)` intervals; adjacent slots may
//!   share a boundary
//! - A candidate that overlaps a break in any part is discarded whole;
//!   slots are never split around breaks
//!
//! ## Usage
//!
//! The persistence layer materializes these boundaries as slot rows;
//! regeneration re-runs the same grid against surviving booked slots.

use crate::breaks::BreakWindow;
use crate::error::DomainError;
use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// One generated slot boundary pair, half-open `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotBounds {
    /// Slot start time (inclusive).
    pub start: NaiveTime,
    /// Slot end time (exclusive).
    pub end: NaiveTime,
}

/// A validated slot grid specification for one working day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotGrid {
    start: NaiveTime,
    end: NaiveTime,
    interval_minutes: u32,
    breaks: Vec<BreakWindow>,
}

impl SlotGrid {
    /// Creates a grid specification.
    ///
    /// A window with `start >= end` is accepted and simply generates
    /// nothing; an interval of zero is rejected because the cursor
    /// could never advance.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidInterval`] if `interval_minutes`
    /// is zero.
    pub fn new(
        start: NaiveTime,
        end: NaiveTime,
        interval_minutes: u32,
        breaks: Vec<BreakWindow>,
    ) -> Result<Self, DomainError> {
        if interval_minutes == 0 {
            return Err(DomainError::InvalidInterval { minutes: 0 });
        }
        Ok(Self {
            start,
            end,
            interval_minutes,
            breaks,
        })
    }

    /// The working window start time.
    #[must_use]
    pub const fn start(&self) -> NaiveTime {
        self.start
    }

    /// The working window end time.
    #[must_use]
    pub const fn end(&self) -> NaiveTime {
        self.end
    }

    /// The slot length in minutes.
    #[must_use]
    pub const fn interval_minutes(&self) -> u32 {
        self.interval_minutes
    }

    /// The break windows this grid avoids.
    #[must_use]
    pub fn breaks(&self) -> &[BreakWindow] {
        &self.breaks
    }

    /// Generates the ordered slot boundaries for this grid.
    ///
    /// The cursor slides from `start` in `interval_minutes` steps. A
    /// candidate is emitted only if its end does not exceed `end` and
    /// it does not touch any break window under the rule: excluded
    /// when `break.start <= slot.start < break.end` or
    /// `break.start < slot.end <= break.end`.
    #[must_use]
    pub fn generate(&self) -> Vec<SlotBounds> {
        let start_min = minutes_from_midnight(self.start);
        let end_min = minutes_from_midnight(self.end);
        let interval = self.interval_minutes;

        let break_minutes: Vec<(u32, u32)> = self
            .breaks
            .iter()
            .map(|b| (minutes_from_midnight(b.start()), minutes_from_midnight(b.end())))
            .collect();

        let mut slots: Vec<SlotBounds> = Vec::new();
        let mut cursor = start_min;

        while cursor + interval <= end_min {
            let slot_start = cursor;
            let slot_end = cursor + interval;
            cursor = slot_end;

            if overlaps_any_break(slot_start, slot_end, &break_minutes) {
                continue;
            }

            // Both bounds are < 24h here: slot_end <= end_min and the
            // end time itself fits in a NaiveTime.
            if let (Some(start), Some(end)) =
                (time_from_minutes(slot_start), time_from_minutes(slot_end))
            {
                slots.push(SlotBounds { start, end });
            }
        }

        slots
    }
}

/// Whether a candidate `[slot_start, slot_end)` touches any break.
///
/// A candidate is excluded on any partial overlap: starting inside a
/// break, or ending inside one (endpoints per the half-open rule).
fn overlaps_any_break(slot_start: u32, slot_end: u32, breaks: &[(u32, u32)]) -> bool {
    breaks.iter().any(|&(b_start, b_end)| {
        (b_start <= slot_start && slot_start < b_end) || (b_start < slot_end && slot_end <= b_end)
    })
}

fn minutes_from_midnight(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}

fn time_from_minutes(minutes: u32) -> Option<NaiveTime> {
    NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0)
}
