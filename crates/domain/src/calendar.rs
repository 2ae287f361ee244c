// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Date-range helpers for batch slot generation.
//!
//! Week and month generation walk an inclusive date range and keep
//! only business days (Monday through Friday). Saturdays and Sundays
//! never receive slots.

use crate::error::DomainError;
use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Whether the date falls on a business day (Monday-Friday).
#[must_use]
pub fn is_business_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// All business days in the inclusive range `[from, to]`, in order.
///
/// An inverted range yields no dates.
#[must_use]
pub fn business_days_between(from: NaiveDate, to: NaiveDate) -> Vec<NaiveDate> {
    let mut days: Vec<NaiveDate> = Vec::new();
    let mut current = from;
    while current <= to {
        if is_business_day(current) {
            days.push(current);
        }
        current += Duration::days(1);
    }
    days
}

/// Returns the first and last day of the given month.
///
/// # Errors
///
/// Returns [`DomainError::InvalidMonth`] if the month is outside 1-12
/// or the year/month pair does not form valid dates.
pub fn month_bounds(year: i32, month: u32) -> Result<(NaiveDate, NaiveDate), DomainError> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or(DomainError::InvalidMonth { year, month })?;
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or(DomainError::InvalidMonth { year, month })?;
    Ok((first, next_first - Duration::days(1)))
}
