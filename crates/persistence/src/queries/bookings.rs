// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Appointment queries.

use diesel::prelude::*;
use diesel::SqliteConnection;
use num_traits::ToPrimitive;

use crate::data_models::{AppointmentRecord, AppointmentRow};
use crate::diesel_schema::{appointments, time_slots};
use crate::error::PersistenceError;

/// Fetches the appointment holding the given slot, if any.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn appointment_for_slot(
    conn: &mut SqliteConnection,
    slot_id: i64,
) -> Result<Option<AppointmentRecord>, PersistenceError> {
    let result = appointments::table
        .filter(appointments::slot_id.eq(slot_id))
        .first::<AppointmentRow>(conn);

    match result {
        Ok(row) => Ok(Some(row.into())),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Whether the client already holds an appointment on any slot of the
/// given business day.
///
/// This backs the one-booking-per-client-per-business-day rule; the
/// allocator evaluates it inside the booking guard scope.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn client_has_booking_on_day(
    conn: &mut SqliteConnection,
    client_user_id: i64,
    day_id: i64,
) -> Result<bool, PersistenceError> {
    let count: i64 = appointments::table
        .inner_join(time_slots::table)
        .filter(appointments::client_user_id.eq(client_user_id))
        .filter(time_slots::day_id.eq(day_id))
        .count()
        .get_result(conn)?;

    Ok(count
        .to_u64()
        .is_some_and(|c| c > 0))
}

/// Lists a client's appointments ordered by creation time.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_client_appointments(
    conn: &mut SqliteConnection,
    client_user_id: i64,
) -> Result<Vec<AppointmentRecord>, PersistenceError> {
    let rows: Vec<AppointmentRow> = appointments::table
        .filter(appointments::client_user_id.eq(client_user_id))
        .order(appointments::created_at.asc())
        .load::<AppointmentRow>(conn)?;

    Ok(rows.into_iter().map(Into::into).collect())
}
