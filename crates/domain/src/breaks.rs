// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Break windows within a working day.
//!
//! Breaks arrive from request handlers in the textual form
//! `"HH:MM-HH:MM,HH:MM-HH:MM"` and are validated into half-open
//! `[start, end)` windows at parse time. Overlapping breaks are
//! tolerated: the grid builder checks each candidate slot against
//! every break, which gives union semantics without merging.

use crate::error::DomainError;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// A half-open `[start, end)` break window within a working day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakWindow {
    start: NaiveTime,
    end: NaiveTime,
}

impl BreakWindow {
    /// Creates a break window, enforcing `start < end`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidBreakWindow`] if `start >= end`.
    pub fn new(start: NaiveTime, end: NaiveTime) -> Result<Self, DomainError> {
        if start >= end {
            return Err(DomainError::InvalidBreakWindow { start, end });
        }
        Ok(Self { start, end })
    }

    /// The break's start time (inclusive).
    #[must_use]
    pub const fn start(&self) -> NaiveTime {
        self.start
    }

    /// The break's end time (exclusive).
    #[must_use]
    pub const fn end(&self) -> NaiveTime {
        self.end
    }
}

impl std::fmt::Display for BreakWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}-{}",
            self.start.format("%H:%M"),
            self.end.format("%H:%M")
        )
    }
}

/// Parses a `HH:MM` clock time.
///
/// # Errors
///
/// Returns [`DomainError::TimeParseError`] if the string is not a
/// valid 24-hour `HH:MM` time.
pub fn parse_clock_time(value: &str) -> Result<NaiveTime, DomainError> {
    NaiveTime::parse_from_str(value, "%H:%M").map_err(|_| DomainError::TimeParseError {
        value: value.to_string(),
    })
}

/// Parses a comma-separated break list of the form
/// `"HH:MM-HH:MM,HH:MM-HH:MM"`.
///
/// An empty or whitespace-only input yields no breaks. Each entry must
/// contain exactly one `-` separating two valid clock times with
/// `start < end`.
///
/// # Errors
///
/// Returns a [`DomainError`] for a malformed entry, an unparseable
/// time, or an inverted window.
pub fn parse_break_list(input: &str) -> Result<Vec<BreakWindow>, DomainError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    let mut breaks: Vec<BreakWindow> = Vec::new();
    for entry in trimmed.split(',') {
        let entry = entry.trim();
        let Some((start_str, end_str)) = entry.split_once('-') else {
            return Err(DomainError::BreakParseError {
                entry: entry.to_string(),
                reason: String::from("expected 'HH:MM-HH:MM'"),
            });
        };
        let start = parse_clock_time(start_str.trim())?;
        let end = parse_clock_time(end_str.trim())?;
        breaks.push(BreakWindow::new(start, end)?);
    }
    Ok(breaks)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_parse_single_break() {
        let breaks = parse_break_list("12:00-13:00").unwrap();
        assert_eq!(breaks.len(), 1);
        assert_eq!(breaks[0].start(), t(12, 0));
        assert_eq!(breaks[0].end(), t(13, 0));
    }

    #[test]
    fn test_parse_multiple_breaks_with_whitespace() {
        let breaks = parse_break_list(" 10:15-10:30 , 12:00-13:00 ").unwrap();
        assert_eq!(breaks.len(), 2);
        assert_eq!(breaks[1].start(), t(12, 0));
    }

    #[test]
    fn test_parse_empty_input_yields_no_breaks() {
        assert_eq!(parse_break_list("").unwrap(), Vec::new());
        assert_eq!(parse_break_list("   ").unwrap(), Vec::new());
    }

    #[test]
    fn test_parse_rejects_missing_separator() {
        let err = parse_break_list("12:00 13:00").unwrap_err();
        assert!(matches!(err, DomainError::BreakParseError { .. }));
    }

    #[test]
    fn test_parse_rejects_bad_time() {
        let err = parse_break_list("12:00-25:00").unwrap_err();
        assert!(matches!(err, DomainError::TimeParseError { .. }));
    }

    #[test]
    fn test_parse_rejects_inverted_window() {
        let err = parse_break_list("13:00-12:00").unwrap_err();
        assert!(matches!(err, DomainError::InvalidBreakWindow { .. }));
    }

    #[test]
    fn test_display_round_trips() {
        let window = BreakWindow::new(t(9, 30), t(9, 45)).unwrap();
        assert_eq!(window.to_string(), "09:30-09:45");
    }
}
