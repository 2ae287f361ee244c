// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use slotbook_domain::DomainError;

/// Errors that can occur during persistence operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// A database error occurred.
    DatabaseError(String),
    /// Database connection failed.
    DatabaseConnectionFailed(String),
    /// Database migration failed.
    MigrationFailed(String),
    /// Query execution failed.
    QueryFailed(String),
    /// Initialization error.
    InitializationError(String),
    /// Foreign key enforcement is not enabled.
    ForeignKeyEnforcementNotEnabled,
    /// The requested user was not found.
    UserNotFound(i64),
    /// The requested business was not found.
    BusinessNotFound(i64),
    /// The requested business day was not found.
    DayNotFound(i64),
    /// The requested time slot was not found.
    SlotNotFound(i64),
    /// The slot is already booked by another appointment.
    AlreadyBooked {
        /// The contested slot.
        slot_id: i64,
    },
    /// The client already holds an appointment on this business day.
    DuplicateDailyBooking {
        /// The booking client.
        client_user_id: i64,
        /// The business day's date (ISO 8601).
        date: String,
    },
    /// The slot belongs to a day that is already in the past.
    SlotInPast {
        /// The rejected slot.
        slot_id: i64,
    },
    /// The slot has no appointment to cancel.
    NotBooked {
        /// The slot without a booking.
        slot_id: i64,
    },
    /// A uniqueness constraint was violated.
    DuplicateRecord(String),
    /// The write lock could not be acquired before the busy timeout.
    /// Safe to retry.
    Contention(String),
    /// A stored value could not be read back as its domain type.
    CorruptRecord(String),
    /// Input failed domain validation.
    Validation(String),
    /// The requested resource was not found.
    NotFound(String),
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DatabaseError(msg) => write!(f, "Database error: {msg}"),
            Self::DatabaseConnectionFailed(msg) => {
                write!(f, "Database connection failed: {msg}")
            }
            Self::MigrationFailed(msg) => write!(f, "Migration failed: {msg}"),
            Self::QueryFailed(msg) => write!(f, "Query failed: {msg}"),
            Self::InitializationError(msg) => write!(f, "Initialization error: {msg}"),
            Self::ForeignKeyEnforcementNotEnabled => {
                write!(f, "Foreign key enforcement is not enabled")
            }
            Self::UserNotFound(id) => write!(f, "User not found: {id}"),
            Self::BusinessNotFound(id) => write!(f, "Business not found: {id}"),
            Self::DayNotFound(id) => write!(f, "Business day not found: {id}"),
            Self::SlotNotFound(id) => write!(f, "Time slot not found: {id}"),
            Self::AlreadyBooked { slot_id } => {
                write!(f, "Slot {slot_id} is already booked")
            }
            Self::DuplicateDailyBooking {
                client_user_id,
                date,
            } => {
                write!(
                    f,
                    "Client {client_user_id} already has a booking on {date}"
                )
            }
            Self::SlotInPast { slot_id } => {
                write!(f, "Slot {slot_id} belongs to a past day and cannot be booked")
            }
            Self::NotBooked { slot_id } => {
                write!(f, "Slot {slot_id} has no booking to cancel")
            }
            Self::DuplicateRecord(msg) => write!(f, "Duplicate record: {msg}"),
            Self::Contention(msg) => {
                write!(f, "Database is busy, retry the operation: {msg}")
            }
            Self::CorruptRecord(msg) => write!(f, "Corrupt record: {msg}"),
            Self::Validation(msg) => write!(f, "Validation failed: {msg}"),
            Self::NotFound(msg) => write!(f, "Not found: {msg}"),
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<diesel::result::Error> for PersistenceError {
    fn from(err: diesel::result::Error) -> Self {
        use diesel::result::{DatabaseErrorKind, Error};
        match err {
            Error::NotFound => Self::NotFound("Record not found".to_string()),
            Error::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
                Self::DuplicateRecord(info.message().to_string())
            }
            Error::DatabaseError(kind, info) => {
                let message = info.message();
                // SQLITE_BUSY / SQLITE_LOCKED surface as generic database
                // errors; classify them so callers know a retry is safe.
                if message.contains("database is locked")
                    || message.contains("database table is locked")
                {
                    Self::Contention(message.to_string())
                } else {
                    Self::DatabaseError(format!("{kind:?}: {message}"))
                }
            }
            _ => Self::DatabaseError(err.to_string()),
        }
    }
}

impl From<diesel::ConnectionError> for PersistenceError {
    fn from(err: diesel::ConnectionError) -> Self {
        Self::DatabaseConnectionFailed(err.to_string())
    }
}

impl From<DomainError> for PersistenceError {
    fn from(err: DomainError) -> Self {
        Self::Validation(err.to_string())
    }
}
