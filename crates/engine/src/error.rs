// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error taxonomy for the engine boundary.
//!
//! Validation and authorization failures carry human-readable reasons
//! and are never retried. Booking conflicts are definitive for the
//! attempted slot. `Contention` is the only retryable variant.

use slotbook_domain::DomainError;
use slotbook_persistence::PersistenceError;

/// Engine-level errors.
///
/// These are distinct from domain/persistence errors and represent the
/// contract with request handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Malformed input: bad break ranges, inverted working windows,
    /// non-positive intervals, past days.
    Validation {
        /// Why the input was rejected.
        reason: String,
    },
    /// The actor lacks the role or ownership required for the action.
    Unauthorized {
        /// The action that was attempted.
        action: String,
    },
    /// Only clients may book appointments.
    NotAClient {
        /// The non-client actor.
        user_id: i64,
    },
    /// The slot was booked by the time the claim was evaluated.
    AlreadyBooked {
        /// The contested slot.
        slot_id: i64,
    },
    /// The client already holds an appointment on this business day.
    DuplicateDailyBooking {
        /// The business day's date (ISO 8601).
        date: String,
    },
    /// The slot's day has already passed.
    SlotInPast {
        /// The rejected slot.
        slot_id: i64,
    },
    /// The slot has no booking to cancel.
    NotBooked {
        /// The slot without a booking.
        slot_id: i64,
    },
    /// A referenced slot, day, business, or user does not exist.
    NotFound {
        /// What was missing.
        what: String,
    },
    /// The storage write lock could not be acquired in time. Safe to
    /// retry.
    Contention {
        /// The underlying lock failure.
        reason: String,
    },
    /// An unexpected storage failure.
    Internal {
        /// The underlying error.
        message: String,
    },
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation { reason } => write!(f, "Validation failed: {reason}"),
            Self::Unauthorized { action } => {
                write!(f, "Unauthorized: not permitted to {action}")
            }
            Self::NotAClient { user_id } => {
                write!(f, "User {user_id} is not a client and cannot book appointments")
            }
            Self::AlreadyBooked { slot_id } => {
                write!(f, "Slot {slot_id} is already booked")
            }
            Self::DuplicateDailyBooking { date } => {
                write!(f, "A booking already exists for this client on {date}")
            }
            Self::SlotInPast { slot_id } => {
                write!(f, "Slot {slot_id} belongs to a past day")
            }
            Self::NotBooked { slot_id } => {
                write!(f, "Slot {slot_id} has no booking to cancel")
            }
            Self::NotFound { what } => write!(f, "Not found: {what}"),
            Self::Contention { reason } => {
                write!(f, "Storage is busy, retry the operation: {reason}")
            }
            Self::Internal { message } => write!(f, "Internal error: {message}"),
        }
    }
}

impl std::error::Error for EngineError {}

impl From<DomainError> for EngineError {
    fn from(err: DomainError) -> Self {
        Self::Validation {
            reason: err.to_string(),
        }
    }
}

impl From<PersistenceError> for EngineError {
    fn from(err: PersistenceError) -> Self {
        match err {
            PersistenceError::AlreadyBooked { slot_id } => Self::AlreadyBooked { slot_id },
            PersistenceError::DuplicateDailyBooking { date, .. } => {
                Self::DuplicateDailyBooking { date }
            }
            PersistenceError::SlotInPast { slot_id } => Self::SlotInPast { slot_id },
            PersistenceError::NotBooked { slot_id } => Self::NotBooked { slot_id },
            PersistenceError::Validation(reason) => Self::Validation { reason },
            PersistenceError::Contention(reason) => Self::Contention { reason },
            PersistenceError::UserNotFound(_)
            | PersistenceError::BusinessNotFound(_)
            | PersistenceError::DayNotFound(_)
            | PersistenceError::SlotNotFound(_)
            | PersistenceError::NotFound(_) => Self::NotFound {
                what: err.to_string(),
            },
            other => Self::Internal {
                message: other.to_string(),
            },
        }
    }
}
