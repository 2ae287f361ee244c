// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The scheduling operations exposed to collaborators.
//!
//! Each operation authorizes the actor, validates request-level input
//! into domain values, delegates to the persistence layer, and maps
//! failures into [`EngineError`]. Generation and booking take the
//! caller's current date explicitly so that past-date rules are
//! deterministic.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use slotbook_domain::{
    BreakWindow, SlotGrid, month_bounds, parse_break_list, validate_interval,
    validate_working_window,
};
use slotbook_persistence::{AppointmentRecord, Persistence};
use tracing::info;

use crate::authorization::{Actor, require_client, require_manage};
use crate::error::EngineError;

/// A request-level slot grid: working hours, interval, and breaks as
/// they arrive from a handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridRequest {
    /// Working window start.
    pub start_time: NaiveTime,
    /// Working window end (exclusive).
    pub end_time: NaiveTime,
    /// Slot length in minutes.
    pub interval_minutes: i64,
    /// Break windows to avoid.
    pub breaks: Vec<BreakWindow>,
}

impl GridRequest {
    /// Builds a request from raw parts with a textual break list of
    /// the form `"HH:MM-HH:MM,HH:MM-HH:MM"`.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a malformed break list.
    pub fn with_break_list(
        start_time: NaiveTime,
        end_time: NaiveTime,
        interval_minutes: i64,
        break_list: &str,
    ) -> Result<Self, EngineError> {
        let breaks = parse_break_list(break_list)?;
        Ok(Self {
            start_time,
            end_time,
            interval_minutes,
            breaks,
        })
    }

    /// Validates the request into a domain grid.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an inverted window or a
    /// non-positive interval.
    fn to_grid(&self) -> Result<SlotGrid, EngineError> {
        validate_working_window(self.start_time, self.end_time)?;
        let interval = validate_interval(self.interval_minutes)?;
        let grid = SlotGrid::new(self.start_time, self.end_time, interval, self.breaks.clone())?;
        Ok(grid)
    }
}

/// Generates slots for one business day. Idempotent; returns the
/// number of slots created.
///
/// # Errors
///
/// Returns `Unauthorized` if the actor cannot manage the day's
/// business, a validation error for bad input or a past day, or a
/// storage error.
pub fn generate_slots(
    persistence: &mut Persistence,
    actor: &Actor,
    day_id: i64,
    grid: &GridRequest,
    today: NaiveDate,
) -> Result<usize, EngineError> {
    let day = persistence.get_day(day_id)?;
    require_manage(persistence, actor, day.business_id, "generate slots")?;
    let grid = grid.to_grid()?;

    let created = persistence.materialize_day(day_id, &grid, today)?;
    info!(
        actor = %actor.username,
        day_id,
        created,
        "Generated day slots"
    );
    Ok(created)
}

/// Generates days and slots for every weekday in `[from, to]`,
/// clamping dates before `today`. Returns
/// `(days_created, slots_created)`.
///
/// # Errors
///
/// Returns `Unauthorized` if the actor cannot manage the business, a
/// validation error for bad grid input, or a storage error.
pub fn generate_week(
    persistence: &mut Persistence,
    actor: &Actor,
    business_id: i64,
    from: NaiveDate,
    to: NaiveDate,
    grid: &GridRequest,
    today: NaiveDate,
) -> Result<(usize, usize), EngineError> {
    require_manage(persistence, actor, business_id, "generate a week of slots")?;
    let grid = grid.to_grid()?;

    let (days_created, slots_created) =
        persistence.materialize_range(business_id, from, to, &grid, today)?;
    info!(
        actor = %actor.username,
        business_id,
        %from,
        %to,
        days_created,
        slots_created,
        "Generated week slots"
    );
    Ok((days_created, slots_created))
}

/// Generates days and slots for every weekday of a calendar month.
/// Returns `(days_created, slots_created)`.
///
/// # Errors
///
/// Returns `Unauthorized` if the actor cannot manage the business, a
/// validation error for a bad month or grid input, or a storage error.
pub fn generate_month(
    persistence: &mut Persistence,
    actor: &Actor,
    business_id: i64,
    year: i32,
    month: u32,
    grid: &GridRequest,
    today: NaiveDate,
) -> Result<(usize, usize), EngineError> {
    require_manage(persistence, actor, business_id, "generate a month of slots")?;
    let (first, last) = month_bounds(year, month)?;
    let grid = grid.to_grid()?;

    let (days_created, slots_created) =
        persistence.materialize_range(business_id, first, last, &grid, today)?;
    info!(
        actor = %actor.username,
        business_id,
        year,
        month,
        days_created,
        slots_created,
        "Generated month slots"
    );
    Ok((days_created, slots_created))
}

/// Regenerates a day's slots from fresh working hours and breaks,
/// preserving booked slots. Returns the number of slots created.
///
/// # Errors
///
/// Returns `Unauthorized` if the actor cannot manage the day's
/// business, a validation error for bad input or a past day, or a
/// storage error.
pub fn regenerate_slots(
    persistence: &mut Persistence,
    actor: &Actor,
    day_id: i64,
    grid: &GridRequest,
    today: NaiveDate,
) -> Result<usize, EngineError> {
    let day = persistence.get_day(day_id)?;
    require_manage(persistence, actor, day.business_id, "regenerate slots")?;
    let grid = grid.to_grid()?;

    let created = persistence.regenerate_day(day_id, &grid, today)?;
    info!(
        actor = %actor.username,
        day_id,
        created,
        "Regenerated day slots"
    );
    Ok(created)
}

/// Books a slot for the acting client.
///
/// # Errors
///
/// Returns `NotAClient` for non-client actors, `AlreadyBooked`,
/// `DuplicateDailyBooking`, `SlotInPast`, `NotFound` for an unknown
/// slot, or `Contention` (retryable) under lock timeout.
pub fn book_slot(
    persistence: &mut Persistence,
    actor: &Actor,
    slot_id: i64,
    today: NaiveDate,
) -> Result<AppointmentRecord, EngineError> {
    require_client(actor)?;

    let appointment = persistence.book_slot(actor.user_id, slot_id, today)?;
    info!(
        actor = %actor.username,
        slot_id,
        appointment_id = appointment.appointment_id,
        "Booked slot"
    );
    Ok(appointment)
}

/// Cancels the booking on a slot.
///
/// Permitted for the client holding the appointment, or for anyone who
/// manages the slot's business.
///
/// # Errors
///
/// Returns `NotBooked` if the slot has no appointment, `Unauthorized`
/// for other actors, `NotFound` for an unknown slot, or `Contention`
/// (retryable) under lock timeout.
pub fn cancel_booking(
    persistence: &mut Persistence,
    actor: &Actor,
    slot_id: i64,
) -> Result<(), EngineError> {
    let slot = persistence.get_slot(slot_id)?;
    let Some(appointment) = persistence.appointment_for_slot(slot_id)? else {
        return Err(EngineError::NotBooked { slot_id });
    };

    if appointment.client_user_id != actor.user_id {
        let day = persistence.get_day(slot.day_id)?;
        require_manage(persistence, actor, day.business_id, "cancel this booking")?;
    }

    persistence.cancel_booking(slot_id)?;
    info!(actor = %actor.username, slot_id, "Cancelled booking");
    Ok(())
}

/// Adds a user to a business's staff roster. Owner-only.
///
/// # Errors
///
/// Returns `Unauthorized` if the actor is not the owner, `NotFound`
/// for unknown identities, or a storage error.
pub fn add_staff(
    persistence: &mut Persistence,
    actor: &Actor,
    business_id: i64,
    user_id: i64,
) -> Result<(), EngineError> {
    let business = persistence.get_business(business_id)?;
    if business.owner_user_id != actor.user_id {
        return Err(EngineError::Unauthorized {
            action: String::from("add staff to this business"),
        });
    }
    persistence.get_user(user_id)?;

    persistence.add_staff(business_id, user_id)?;
    info!(actor = %actor.username, business_id, user_id, "Added staff member");
    Ok(())
}

/// Deactivates a staff membership. Owner-only.
///
/// # Errors
///
/// Returns `Unauthorized` if the actor is not the owner, `NotFound` if
/// the membership does not exist, or a storage error.
pub fn remove_staff(
    persistence: &mut Persistence,
    actor: &Actor,
    business_id: i64,
    user_id: i64,
) -> Result<(), EngineError> {
    let business = persistence.get_business(business_id)?;
    if business.owner_user_id != actor.user_id {
        return Err(EngineError::Unauthorized {
            action: String::from("remove staff from this business"),
        });
    }

    persistence.deactivate_staff(business_id, user_id)?;
    info!(actor = %actor.username, business_id, user_id, "Removed staff member");
    Ok(())
}
