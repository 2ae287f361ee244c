// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row structs and public record types.
//!
//! Dates and times are stored as ISO 8601 text columns
//! (`YYYY-MM-DD` / `HH:MM:SS`), which sort correctly as text. Raw row
//! structs map the tables one-to-one; public records carry parsed
//! chrono types and are produced via fallible conversion.

use chrono::{NaiveDate, NaiveTime};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::diesel_schema::{appointments, business_staff, businesses, days, time_slots, users};
use crate::error::PersistenceError;

pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";
pub(crate) const TIME_FORMAT: &str = "%H:%M:%S";

pub(crate) fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub(crate) fn format_time(time: NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

pub(crate) fn parse_date(value: &str) -> Result<NaiveDate, PersistenceError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|e| PersistenceError::CorruptRecord(format!("bad date '{value}': {e}")))
}

pub(crate) fn parse_time(value: &str) -> Result<NaiveTime, PersistenceError> {
    NaiveTime::parse_from_str(value, TIME_FORMAT)
        .map_err(|e| PersistenceError::CorruptRecord(format!("bad time '{value}': {e}")))
}

// ============================================================================
// Raw rows
// ============================================================================

#[derive(Debug, Clone, Queryable)]
pub struct UserRow {
    pub user_id: i64,
    pub username: String,
    pub display_name: String,
    pub role: String,
}

#[derive(Debug, Clone, Queryable)]
pub struct BusinessRow {
    pub business_id: i64,
    pub name: String,
    pub owner_user_id: i64,
    pub description: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Clone, Queryable)]
pub struct StaffRow {
    pub staff_id: i64,
    pub business_id: i64,
    pub user_id: i64,
    pub is_active: i32,
    pub added_at: String,
    pub removed_at: Option<String>,
}

#[derive(Debug, Clone, Queryable)]
pub struct DayRow {
    pub day_id: i64,
    pub business_id: i64,
    pub date: String,
}

#[derive(Debug, Clone, Queryable)]
pub struct SlotRow {
    pub slot_id: i64,
    pub day_id: i64,
    pub start_time: String,
    pub end_time: String,
    pub is_booked: i32,
}

#[derive(Debug, Clone, Queryable)]
pub struct AppointmentRow {
    pub appointment_id: i64,
    pub slot_id: i64,
    pub client_user_id: i64,
    pub created_at: String,
}

// ============================================================================
// Insert structs
// ============================================================================

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub struct NewUser {
    pub username: String,
    pub display_name: String,
    pub role: String,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = businesses)]
pub struct NewBusiness {
    pub name: String,
    pub owner_user_id: i64,
    pub description: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = business_staff)]
pub struct NewStaff {
    pub business_id: i64,
    pub user_id: i64,
    pub is_active: i32,
    pub added_at: String,
    pub removed_at: Option<String>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = days)]
pub struct NewDay {
    pub business_id: i64,
    pub date: String,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = time_slots)]
pub struct NewSlot {
    pub day_id: i64,
    pub start_time: String,
    pub end_time: String,
    pub is_booked: i32,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = appointments)]
pub struct NewAppointment {
    pub slot_id: i64,
    pub client_user_id: i64,
    pub created_at: String,
}

// ============================================================================
// Public records
// ============================================================================

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub user_id: i64,
    pub username: String,
    pub display_name: String,
    pub role: String,
}

impl From<UserRow> for UserRecord {
    fn from(row: UserRow) -> Self {
        Self {
            user_id: row.user_id,
            username: row.username,
            display_name: row.display_name,
            role: row.role,
        }
    }
}

/// A business with its owner reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessRecord {
    pub business_id: i64,
    pub name: String,
    pub owner_user_id: i64,
    pub description: Option<String>,
    pub created_at: String,
}

impl From<BusinessRow> for BusinessRecord {
    fn from(row: BusinessRow) -> Self {
        Self {
            business_id: row.business_id,
            name: row.name,
            owner_user_id: row.owner_user_id,
            description: row.description,
            created_at: row.created_at,
        }
    }
}

/// One business day: a calendar date scoped to one business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    pub day_id: i64,
    pub business_id: i64,
    pub date: NaiveDate,
}

impl TryFrom<DayRow> for DayRecord {
    type Error = PersistenceError;

    fn try_from(row: DayRow) -> Result<Self, Self::Error> {
        Ok(Self {
            day_id: row.day_id,
            business_id: row.business_id,
            date: parse_date(&row.date)?,
        })
    }
}

/// One bookable time slot within a business day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotRecord {
    pub slot_id: i64,
    pub day_id: i64,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub is_booked: bool,
}

impl TryFrom<SlotRow> for SlotRecord {
    type Error = PersistenceError;

    fn try_from(row: SlotRow) -> Result<Self, Self::Error> {
        Ok(Self {
            slot_id: row.slot_id,
            day_id: row.day_id,
            start: parse_time(&row.start_time)?,
            end: parse_time(&row.end_time)?,
            is_booked: row.is_booked != 0,
        })
    }
}

/// An appointment binding a client to a booked slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentRecord {
    pub appointment_id: i64,
    pub slot_id: i64,
    pub client_user_id: i64,
    pub created_at: String,
}

impl From<AppointmentRow> for AppointmentRecord {
    fn from(row: AppointmentRow) -> Self {
        Self {
            appointment_id: row.appointment_id,
            slot_id: row.slot_id,
            client_user_id: row.client_user_id,
            created_at: row.created_at,
        }
    }
}
