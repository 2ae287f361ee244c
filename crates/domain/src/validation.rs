// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request-level validation shared by the engine and persistence.

use crate::error::DomainError;
use chrono::{NaiveDate, NaiveTime};

/// Validates that a slot interval is positive.
///
/// # Errors
///
/// Returns [`DomainError::InvalidInterval`] if `minutes <= 0`.
pub fn validate_interval(minutes: i64) -> Result<u32, DomainError> {
    u32::try_from(minutes)
        .ok()
        .filter(|m| *m > 0)
        .ok_or(DomainError::InvalidInterval { minutes })
}

/// Validates that a working window runs forward.
///
/// # Errors
///
/// Returns [`DomainError::InvalidWorkingWindow`] if `start >= end`.
pub fn validate_working_window(start: NaiveTime, end: NaiveTime) -> Result<(), DomainError> {
    if start >= end {
        return Err(DomainError::InvalidWorkingWindow { start, end });
    }
    Ok(())
}

/// Validates that a business day is not dated before today.
///
/// Direct single-day operations fail on past dates; ranged generation
/// clamps instead and never reaches this check for skipped dates.
///
/// # Errors
///
/// Returns [`DomainError::DayInPast`] if `date < today`.
pub fn validate_day_not_past(date: NaiveDate, today: NaiveDate) -> Result<(), DomainError> {
    if date < today {
        return Err(DomainError::DayInPast { date, today });
    }
    Ok(())
}
