// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Business-day and time-slot queries.

use diesel::prelude::*;
use diesel::SqliteConnection;
use chrono::NaiveDate;

use crate::data_models::{DayRecord, DayRow, SlotRecord, SlotRow, format_date};
use crate::diesel_schema::{days, time_slots};
use crate::error::PersistenceError;

/// Fetches a business day by ID.
///
/// # Errors
///
/// Returns [`PersistenceError::DayNotFound`] if no such day exists.
pub fn get_day(conn: &mut SqliteConnection, day_id: i64) -> Result<DayRecord, PersistenceError> {
    let result = days::table
        .filter(days::day_id.eq(day_id))
        .first::<DayRow>(conn);

    match result {
        Ok(row) => row.try_into(),
        Err(diesel::result::Error::NotFound) => Err(PersistenceError::DayNotFound(day_id)),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Looks up a business day by business and date, if present.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn find_day(
    conn: &mut SqliteConnection,
    business_id: i64,
    date: NaiveDate,
) -> Result<Option<DayRecord>, PersistenceError> {
    let result = days::table
        .filter(days::business_id.eq(business_id))
        .filter(days::date.eq(format_date(date)))
        .first::<DayRow>(conn);

    match result {
        Ok(row) => Ok(Some(row.try_into()?)),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Lists a business's days ordered by date.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_days(
    conn: &mut SqliteConnection,
    business_id: i64,
) -> Result<Vec<DayRecord>, PersistenceError> {
    let rows: Vec<DayRow> = days::table
        .filter(days::business_id.eq(business_id))
        .order(days::date.asc())
        .load::<DayRow>(conn)?;

    rows.into_iter().map(TryInto::try_into).collect()
}

/// Fetches a time slot by ID.
///
/// # Errors
///
/// Returns [`PersistenceError::SlotNotFound`] if no such slot exists.
pub fn get_slot(conn: &mut SqliteConnection, slot_id: i64) -> Result<SlotRecord, PersistenceError> {
    let result = time_slots::table
        .filter(time_slots::slot_id.eq(slot_id))
        .first::<SlotRow>(conn);

    match result {
        Ok(row) => row.try_into(),
        Err(diesel::result::Error::NotFound) => Err(PersistenceError::SlotNotFound(slot_id)),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Lists a day's slots ordered by start time.
///
/// Text-stored `HH:MM:SS` times sort correctly, so the database
/// ordering is the display ordering.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_slots(
    conn: &mut SqliteConnection,
    day_id: i64,
) -> Result<Vec<SlotRecord>, PersistenceError> {
    let rows: Vec<SlotRow> = time_slots::table
        .filter(time_slots::day_id.eq(day_id))
        .order(time_slots::start_time.asc())
        .load::<SlotRow>(conn)?;

    rows.into_iter().map(TryInto::try_into).collect()
}
