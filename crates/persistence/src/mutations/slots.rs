// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Slot materialization: persisting generated grid boundaries as slot
//! rows.
//!
//! Materialization is idempotent. Each grid pair not already present
//! for the day is inserted unbooked; pairs that exist are skipped, so
//! re-invocation with identical arguments creates nothing and fails
//! nothing. Regeneration deletes only unbooked slots before
//! rematerializing, which is how working hours or breaks change
//! without disturbing existing bookings.
//!
//! Past-date handling is asymmetric: materializing a
//! single past-dated day is a validation error, while ranged
//! generation clamps its start to today and silently skips what fell
//! away.

use chrono::NaiveDate;
use diesel::prelude::*;
use diesel::SqliteConnection;
use num_traits::ToPrimitive;
use slotbook_domain::{SlotGrid, business_days_between, validate_day_not_past};
use tracing::{debug, info};

use crate::data_models::{NewSlot, format_time};
use crate::diesel_schema::time_slots;
use crate::error::PersistenceError;
use crate::mutations::catalog::get_or_create_day;
use crate::queries;

/// Materializes a grid for one business day inside a write
/// transaction.
///
/// # Errors
///
/// Returns a validation error if the day is dated before `today`, or
/// an error if the day does not exist or the inserts fail.
pub fn materialize_day(
    conn: &mut SqliteConnection,
    day_id: i64,
    grid: &SlotGrid,
    today: NaiveDate,
) -> Result<usize, PersistenceError> {
    conn.immediate_transaction(|conn| {
        let day = queries::slots::get_day(conn, day_id)?;
        validate_day_not_past(day.date, today)?;
        materialize_day_locked(conn, day_id, grid)
    })
}

/// Materializes grids for every business day (Mon-Fri) in
/// `[max(from, today), to]`, creating missing day rows along the way.
///
/// Returns `(days_created, slots_created)`. The whole range is one
/// write transaction: a batch either lands completely or not at all.
///
/// # Errors
///
/// Returns an error if the business does not exist or any insert
/// fails.
pub fn materialize_range(
    conn: &mut SqliteConnection,
    business_id: i64,
    from: NaiveDate,
    to: NaiveDate,
    grid: &SlotGrid,
    today: NaiveDate,
) -> Result<(usize, usize), PersistenceError> {
    conn.immediate_transaction(|conn| {
        // Existence check up front so a bad ID fails loudly instead of
        // generating nothing.
        queries::catalog::get_business(conn, business_id)?;

        let clamped_from = from.max(today);
        let mut days_created: usize = 0;
        let mut slots_created: usize = 0;

        for date in business_days_between(clamped_from, to) {
            let (day_id, created) = get_or_create_day(conn, business_id, date)?;
            if created {
                days_created += 1;
            }
            slots_created += materialize_day_locked(conn, day_id, grid)?;
        }

        info!(
            business_id,
            %from,
            %to,
            days_created,
            slots_created,
            "Materialized slot range"
        );
        Ok((days_created, slots_created))
    })
}

/// Regenerates a day's slots from a fresh grid, preserving booked
/// slots and their appointments.
///
/// All unbooked slots are deleted, then the grid is materialized; a
/// grid pair colliding with a surviving booked slot is skipped by the
/// idempotence check.
///
/// # Errors
///
/// Returns a validation error if the day is dated before `today`, or
/// an error if the day does not exist or the writes fail.
pub fn regenerate_day(
    conn: &mut SqliteConnection,
    day_id: i64,
    grid: &SlotGrid,
    today: NaiveDate,
) -> Result<usize, PersistenceError> {
    conn.immediate_transaction(|conn| {
        let day = queries::slots::get_day(conn, day_id)?;
        validate_day_not_past(day.date, today)?;

        let removed = diesel::delete(
            time_slots::table
                .filter(time_slots::day_id.eq(day_id))
                .filter(time_slots::is_booked.eq(0)),
        )
        .execute(conn)?;

        let created = materialize_day_locked(conn, day_id, grid)?;
        info!(day_id, removed, created, "Regenerated day slots");
        Ok(created)
    })
}

/// Inserts each grid pair not already present for the day. Assumes the
/// caller holds the write transaction.
fn materialize_day_locked(
    conn: &mut SqliteConnection,
    day_id: i64,
    grid: &SlotGrid,
) -> Result<usize, PersistenceError> {
    let mut created: usize = 0;

    for bounds in grid.generate() {
        let start_time = format_time(bounds.start);
        let end_time = format_time(bounds.end);

        let existing: i64 = time_slots::table
            .filter(time_slots::day_id.eq(day_id))
            .filter(time_slots::start_time.eq(&start_time))
            .filter(time_slots::end_time.eq(&end_time))
            .count()
            .get_result(conn)?;

        if existing.to_u64().is_some_and(|c| c > 0) {
            continue;
        }

        let record = NewSlot {
            day_id,
            start_time,
            end_time,
            is_booked: 0,
        };
        diesel::insert_into(time_slots::table)
            .values(&record)
            .execute(conn)?;
        created += 1;
    }

    debug!(day_id, created, "Materialized day slots");
    Ok(created)
}
