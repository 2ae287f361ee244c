// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the Slotbook scheduling engine.
//!
//! This crate stores users, businesses, staff rosters, business days,
//! time slots, and appointments in `SQLite` via Diesel, and hosts the
//! two write-side cores of the system:
//!
//! - the **materializer** (`mutations::slots`) — idempotent persistence
//!   of generated slot grids, ranged generation, and regeneration that
//!   preserves booked slots
//! - the **allocator** (`mutations::bookings`) — atomic booking and
//!   cancellation under a `BEGIN IMMEDIATE` write guard
//!
//! The slot inventory and the appointment table are the only shared
//! mutable state in the system; every write goes through the
//! [`Persistence`] adapter.
//!
//! ## Testing
//!
//! In-memory databases get unique shared-cache names from an atomic
//! counter, so tests are isolated without time-based collisions.
//! File-backed databases enable WAL and a busy timeout; concurrency
//! tests open one connection per thread against one file.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use chrono::NaiveDate;
use diesel::SqliteConnection;
use slotbook_domain::{Role, SlotGrid, StaffRoster};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;
mod sqlite;

#[cfg(test)]
mod tests;

pub use data_models::{
    AppointmentRecord, BusinessRecord, DayRecord, SlotRecord, UserRecord,
};
pub use error::PersistenceError;

/// Atomic counter for generating unique in-memory database names.
///
/// This ensures deterministic test isolation by eliminating time-based
/// collisions. Each call to `new_in_memory()` receives a unique
/// sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Default busy timeout for file-backed databases, in milliseconds.
///
/// Bounds how long a booking transaction waits for the write lock
/// before surfacing a retryable contention error.
const DEFAULT_BUSY_TIMEOUT_MS: u32 = 5_000;

/// Persistence adapter for the scheduling tables.
///
/// Owns one `SQLite` connection. All engine operations and tests go
/// through these methods; the queries/mutations modules are not
/// public.
pub struct Persistence {
    conn: SqliteConnection,
}

impl Persistence {
    /// Creates a persistence adapter with an in-memory `SQLite`
    /// database.
    ///
    /// Each call receives a unique database instance via an atomic
    /// counter, ensuring deterministic test isolation.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let db_name = format!("memdb_slotbook_{db_id}");
        let shared_memory_url = format!("file:{db_name}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = sqlite::initialize_database(&shared_memory_url)?;
        sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Creates a persistence adapter with a file-based `SQLite`
    /// database.
    ///
    /// Enables WAL mode and the default busy timeout. Multiple
    /// adapters may open the same file concurrently; the allocator's
    /// write guard arbitrates between them.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or
    /// initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = sqlite::initialize_database(path_str)?;
        sqlite::enable_wal_mode(&mut conn)?;
        sqlite::set_busy_timeout(&mut conn, DEFAULT_BUSY_TIMEOUT_MS)?;
        sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    // ========================================================================
    // Users, businesses, staff
    // ========================================================================

    /// Creates a user and returns its ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the username is taken or the insert fails.
    pub fn create_user(
        &mut self,
        username: &str,
        display_name: &str,
        role: Role,
    ) -> Result<i64, PersistenceError> {
        mutations::catalog::create_user(&mut self.conn, username, display_name, role)
    }

    /// Fetches a user by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if no such user exists.
    pub fn get_user(&mut self, user_id: i64) -> Result<UserRecord, PersistenceError> {
        queries::catalog::get_user(&mut self.conn, user_id)
    }

    /// Fetches a user by username.
    ///
    /// # Errors
    ///
    /// Returns an error if no such user exists.
    pub fn find_user_by_username(
        &mut self,
        username: &str,
    ) -> Result<UserRecord, PersistenceError> {
        queries::catalog::find_user_by_username(&mut self.conn, username)
    }

    /// Creates a business owned by the given user and returns its ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is taken or the insert fails.
    pub fn create_business(
        &mut self,
        name: &str,
        owner_user_id: i64,
        description: Option<&str>,
    ) -> Result<i64, PersistenceError> {
        mutations::catalog::create_business(&mut self.conn, name, owner_user_id, description)
    }

    /// Fetches a business by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if no such business exists.
    pub fn get_business(&mut self, business_id: i64) -> Result<BusinessRecord, PersistenceError> {
        queries::catalog::get_business(&mut self.conn, business_id)
    }

    /// Deletes a business; its days, slots, and appointments cascade.
    ///
    /// # Errors
    ///
    /// Returns an error if no such business exists.
    pub fn delete_business(&mut self, business_id: i64) -> Result<(), PersistenceError> {
        mutations::catalog::delete_business(&mut self.conn, business_id)
    }

    /// Adds a user to a business's staff roster, reactivating a
    /// removed membership if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub fn add_staff(&mut self, business_id: i64, user_id: i64) -> Result<(), PersistenceError> {
        mutations::catalog::add_staff(&mut self.conn, business_id, user_id)
    }

    /// Deactivates a staff membership.
    ///
    /// # Errors
    ///
    /// Returns an error if the user is not an active staff member.
    pub fn deactivate_staff(
        &mut self,
        business_id: i64,
        user_id: i64,
    ) -> Result<(), PersistenceError> {
        mutations::catalog::deactivate_staff(&mut self.conn, business_id, user_id)
    }

    /// Assembles the management roster for a business.
    ///
    /// # Errors
    ///
    /// Returns an error if the business does not exist.
    pub fn staff_roster(&mut self, business_id: i64) -> Result<StaffRoster, PersistenceError> {
        queries::catalog::staff_roster(&mut self.conn, business_id)
    }

    // ========================================================================
    // Business days
    // ========================================================================

    /// Creates a business day, rejecting past dates.
    ///
    /// # Errors
    ///
    /// Returns a validation error for past dates or an error if the
    /// day already exists.
    pub fn create_day(
        &mut self,
        business_id: i64,
        date: NaiveDate,
        today: NaiveDate,
    ) -> Result<i64, PersistenceError> {
        mutations::catalog::create_day(&mut self.conn, business_id, date, today)
    }

    /// Fetches a business day by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if no such day exists.
    pub fn get_day(&mut self, day_id: i64) -> Result<DayRecord, PersistenceError> {
        queries::slots::get_day(&mut self.conn, day_id)
    }

    /// Looks up a business day by business and date.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn find_day(
        &mut self,
        business_id: i64,
        date: NaiveDate,
    ) -> Result<Option<DayRecord>, PersistenceError> {
        queries::slots::find_day(&mut self.conn, business_id, date)
    }

    /// Lists a business's days ordered by date.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_days(&mut self, business_id: i64) -> Result<Vec<DayRecord>, PersistenceError> {
        queries::slots::list_days(&mut self.conn, business_id)
    }

    // ========================================================================
    // Materializer
    // ========================================================================

    /// Materializes a grid for one business day. Idempotent: pairs
    /// already present are skipped. Returns the number of slots
    /// created.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the day is dated before `today`,
    /// or an error if the writes fail.
    pub fn materialize_day(
        &mut self,
        day_id: i64,
        grid: &SlotGrid,
        today: NaiveDate,
    ) -> Result<usize, PersistenceError> {
        mutations::slots::materialize_day(&mut self.conn, day_id, grid, today)
    }

    /// Materializes grids for every weekday in `[max(from, today), to]`,
    /// creating missing days. Returns `(days_created, slots_created)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the business does not exist or the writes
    /// fail.
    pub fn materialize_range(
        &mut self,
        business_id: i64,
        from: NaiveDate,
        to: NaiveDate,
        grid: &SlotGrid,
        today: NaiveDate,
    ) -> Result<(usize, usize), PersistenceError> {
        mutations::slots::materialize_range(&mut self.conn, business_id, from, to, grid, today)
    }

    /// Regenerates a day's slots from a fresh grid, preserving booked
    /// slots and their appointments. Returns the number of slots
    /// created.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the day is dated before `today`,
    /// or an error if the writes fail.
    pub fn regenerate_day(
        &mut self,
        day_id: i64,
        grid: &SlotGrid,
        today: NaiveDate,
    ) -> Result<usize, PersistenceError> {
        mutations::slots::regenerate_day(&mut self.conn, day_id, grid, today)
    }

    // ========================================================================
    // Slots & allocator
    // ========================================================================

    /// Fetches a time slot by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if no such slot exists.
    pub fn get_slot(&mut self, slot_id: i64) -> Result<SlotRecord, PersistenceError> {
        queries::slots::get_slot(&mut self.conn, slot_id)
    }

    /// Lists a day's slots ordered by start time.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_slots(&mut self, day_id: i64) -> Result<Vec<SlotRecord>, PersistenceError> {
        queries::slots::list_slots(&mut self.conn, day_id)
    }

    /// Books a slot for a client under the write guard. Exactly one of
    /// N concurrent callers for one open slot succeeds.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyBooked`, `SlotInPast`, `DuplicateDailyBooking`,
    /// `SlotNotFound`, or `Contention` (retryable) as described in
    /// [`PersistenceError`].
    pub fn book_slot(
        &mut self,
        client_user_id: i64,
        slot_id: i64,
        today: NaiveDate,
    ) -> Result<AppointmentRecord, PersistenceError> {
        mutations::bookings::book_slot(&mut self.conn, client_user_id, slot_id, today)
    }

    /// Cancels the booking on a slot, returning it to open.
    ///
    /// # Errors
    ///
    /// Returns `NotBooked` if the slot has no appointment,
    /// `SlotNotFound`, or `Contention` (retryable).
    pub fn cancel_booking(&mut self, slot_id: i64) -> Result<(), PersistenceError> {
        mutations::bookings::cancel_booking(&mut self.conn, slot_id)
    }

    /// Fetches the appointment holding a slot, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn appointment_for_slot(
        &mut self,
        slot_id: i64,
    ) -> Result<Option<AppointmentRecord>, PersistenceError> {
        queries::bookings::appointment_for_slot(&mut self.conn, slot_id)
    }

    /// Lists a client's appointments ordered by creation time.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_client_appointments(
        &mut self,
        client_user_id: i64,
    ) -> Result<Vec<AppointmentRecord>, PersistenceError> {
        queries::bookings::list_client_appointments(&mut self.conn, client_user_id)
    }
}
