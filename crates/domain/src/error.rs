// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::{NaiveDate, NaiveTime};

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Slot interval must be a positive number of minutes.
    InvalidInterval {
        /// The rejected interval value.
        minutes: i64,
    },
    /// Working window start is not before its end.
    InvalidWorkingWindow {
        /// Window start time.
        start: NaiveTime,
        /// Window end time.
        end: NaiveTime,
    },
    /// Break window start is not before its end.
    InvalidBreakWindow {
        /// Break start time.
        start: NaiveTime,
        /// Break end time.
        end: NaiveTime,
    },
    /// A clock time string could not be parsed as `HH:MM`.
    TimeParseError {
        /// The invalid time string.
        value: String,
    },
    /// A break list entry is malformed.
    BreakParseError {
        /// The malformed entry.
        entry: String,
        /// Why it was rejected.
        reason: String,
    },
    /// Month value is outside 1-12 or the year/month pair is invalid.
    InvalidMonth {
        /// The year.
        year: i32,
        /// The invalid month value.
        month: u32,
    },
    /// A business day may not be created or materialized in the past.
    DayInPast {
        /// The requested date.
        date: NaiveDate,
        /// The current date at the time of the call.
        today: NaiveDate,
    },
    /// User role string is not a recognized role.
    InvalidRole(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInterval { minutes } => {
                write!(
                    f,
                    "Invalid slot interval: {minutes} minutes. Must be greater than 0"
                )
            }
            Self::InvalidWorkingWindow { start, end } => {
                write!(
                    f,
                    "Working window start {start} must be before end {end}"
                )
            }
            Self::InvalidBreakWindow { start, end } => {
                write!(f, "Break start {start} must be before break end {end}")
            }
            Self::TimeParseError { value } => {
                write!(f, "Failed to parse '{value}' as a HH:MM clock time")
            }
            Self::BreakParseError { entry, reason } => {
                write!(f, "Invalid break entry '{entry}': {reason}")
            }
            Self::InvalidMonth { year, month } => {
                write!(f, "Invalid month {month} for year {year}")
            }
            Self::DayInPast { date, today } => {
                write!(f, "Cannot schedule {date}: it is before today ({today})")
            }
            Self::InvalidRole(value) => write!(f, "Invalid role: {value}"),
        }
    }
}

impl std::error::Error for DomainError {}
