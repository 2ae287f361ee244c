// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Operation boundary for the Slotbook scheduling engine.
//!
//! Request handlers and admin tooling call these operations with a
//! resolved actor identity; the engine enforces authorization, turns
//! request-level inputs (textual break lists, working-hours windows)
//! into validated domain values, delegates to the persistence layer,
//! and maps every failure into the [`EngineError`] taxonomy.
//!
//! The current date is passed in by the caller rather than read from a
//! global clock, which keeps past-date rules deterministic under test.

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

mod authorization;
mod error;
mod operations;

#[cfg(test)]
mod tests;

pub use authorization::{Actor, resolve_actor};
pub use error::EngineError;
pub use operations::{
    GridRequest, add_staff, book_slot, cancel_booking, generate_month, generate_slots,
    generate_week, regenerate_slots, remove_staff,
};
