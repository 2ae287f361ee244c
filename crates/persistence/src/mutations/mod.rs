// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! State-changing operations for the scheduling tables.
//!
//! All mutation goes through these modules; no other component writes
//! booked flags or appointment rows.
//!
//! ## Module Organization
//!
//! - `catalog` — users, businesses, staff roster, business days
//! - `slots` — slot materialization (single day, ranges, regenerate)
//! - `bookings` — the booking allocator (claim and release)

pub mod bookings;
pub mod catalog;
pub mod slots;
