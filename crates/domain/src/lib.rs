// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod authorization;
mod breaks;
mod calendar;
mod error;
mod slot_grid;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use authorization::{can_book, can_manage};
pub use breaks::{BreakWindow, parse_break_list, parse_clock_time};
pub use calendar::{business_days_between, is_business_day, month_bounds};
pub use error::DomainError;
pub use slot_grid::{SlotBounds, SlotGrid};
pub use types::{Role, StaffRoster};
pub use validation::{validate_day_not_past, validate_interval, validate_working_window};
