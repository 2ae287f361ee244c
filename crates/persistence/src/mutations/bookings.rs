// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The booking allocator: atomic claim and release of time slots.
//!
//! Each slot moves between exactly two states, `Open` and `Booked`.
//! Claiming runs inside `BEGIN IMMEDIATE`, which takes the database
//! write lock before the slot is re-read, the SQLite equivalent of a
//! `SELECT ... FOR UPDATE` row guard. Under concurrent booking of the
//! same open slot exactly one transaction commits; every other caller
//! re-reads a booked slot and fails with `AlreadyBooked`.
//!
//! The one-booking-per-client-per-business-day check runs inside the
//! same guard, so two clients' racing bookings for different slots of
//! one day cannot both pass it: SQLite admits a single writer, and the
//! lock is held from before the check until commit.
//!
//! Every exit path releases the guard: the transaction closure commits
//! on `Ok` and rolls back on `Err`, so no partial state (flag flipped
//! without appointment, or vice versa) can persist.

use chrono::{NaiveDate, Utc};
use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::info;

use crate::data_models::{AppointmentRecord, NewAppointment, format_date};
use crate::diesel_schema::{appointments, time_slots};
use crate::error::PersistenceError;
use crate::queries;
use crate::sqlite::get_last_insert_rowid;

/// Books a slot for a client.
///
/// Inside the write guard: the slot is re-read (`AlreadyBooked` if its
/// flag is set), its day checked against `today` (`SlotInPast`), and
/// the client's other appointments on the same day checked
/// (`DuplicateDailyBooking`). The flag flip and the appointment insert
/// commit together or not at all.
///
/// # Errors
///
/// Returns the conflict and validation errors above,
/// [`PersistenceError::SlotNotFound`] for an unknown slot, or
/// [`PersistenceError::Contention`] if the write lock could not be
/// acquired before the busy timeout.
pub fn book_slot(
    conn: &mut SqliteConnection,
    client_user_id: i64,
    slot_id: i64,
    today: NaiveDate,
) -> Result<AppointmentRecord, PersistenceError> {
    conn.immediate_transaction(|conn| {
        let slot = queries::slots::get_slot(conn, slot_id)?;

        if slot.is_booked {
            return Err(PersistenceError::AlreadyBooked { slot_id });
        }

        let day = queries::slots::get_day(conn, slot.day_id)?;
        if day.date < today {
            return Err(PersistenceError::SlotInPast { slot_id });
        }

        if queries::bookings::client_has_booking_on_day(conn, client_user_id, slot.day_id)? {
            return Err(PersistenceError::DuplicateDailyBooking {
                client_user_id,
                date: format_date(day.date),
            });
        }

        diesel::update(time_slots::table.filter(time_slots::slot_id.eq(slot_id)))
            .set(time_slots::is_booked.eq(1))
            .execute(conn)?;

        let created_at = Utc::now().to_rfc3339();
        let record = NewAppointment {
            slot_id,
            client_user_id,
            created_at: created_at.clone(),
        };
        diesel::insert_into(appointments::table)
            .values(&record)
            .execute(conn)?;
        let appointment_id = get_last_insert_rowid(conn)?;

        info!(appointment_id, slot_id, client_user_id, "Booked slot");
        Ok(AppointmentRecord {
            appointment_id,
            slot_id,
            client_user_id,
            created_at,
        })
    })
}

/// Cancels the booking on a slot, returning it to `Open`.
///
/// The appointment delete and the flag reset commit together. The slot
/// becomes immediately rebookable by any client.
///
/// # Errors
///
/// Returns [`PersistenceError::NotBooked`] if the slot has no
/// appointment, [`PersistenceError::SlotNotFound`] for an unknown
/// slot, or [`PersistenceError::Contention`] on lock timeout.
pub fn cancel_booking(
    conn: &mut SqliteConnection,
    slot_id: i64,
) -> Result<(), PersistenceError> {
    conn.immediate_transaction(|conn| {
        // Surface a missing slot as its own error rather than NotBooked.
        queries::slots::get_slot(conn, slot_id)?;

        let Some(appointment) = queries::bookings::appointment_for_slot(conn, slot_id)? else {
            return Err(PersistenceError::NotBooked { slot_id });
        };

        diesel::delete(
            appointments::table
                .filter(appointments::appointment_id.eq(appointment.appointment_id)),
        )
        .execute(conn)?;

        diesel::update(time_slots::table.filter(time_slots::slot_id.eq(slot_id)))
            .set(time_slots::is_booked.eq(0))
            .execute(conn)?;

        info!(
            appointment_id = appointment.appointment_id,
            slot_id,
            client_user_id = appointment.client_user_id,
            "Cancelled booking"
        );
        Ok(())
    })
}
