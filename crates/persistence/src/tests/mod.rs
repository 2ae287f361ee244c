// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::unwrap_used)]

mod allocator_tests;

use crate::Persistence;
use chrono::{NaiveDate, NaiveTime};
use slotbook_domain::{BreakWindow, Role, SlotGrid};

pub fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

pub fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

/// Fixed "today" for tests: Monday, March 2, 2026.
pub fn test_today() -> NaiveDate {
    d(2026, 3, 2)
}

/// A standard working-day grid: 09:00-17:00, 30-minute slots, lunch
/// break 12:00-13:00. Generates 14 slots.
pub fn default_grid() -> SlotGrid {
    let breaks = vec![BreakWindow::new(t(12, 0), t(13, 0)).unwrap()];
    SlotGrid::new(t(9, 0), t(17, 0), 30, breaks).unwrap()
}

/// Creates an owner user and their business.
pub fn seed_business(persistence: &mut Persistence) -> (i64, i64) {
    let owner_id = persistence
        .create_user("owner", "Olive Owner", Role::Owner)
        .unwrap();
    let business_id = persistence
        .create_business("Corner Salon", owner_id, Some("Walk-ins welcome"))
        .unwrap();
    (business_id, owner_id)
}

/// Creates a client user with the given username.
pub fn seed_client(persistence: &mut Persistence, username: &str) -> i64 {
    persistence
        .create_user(username, username, Role::Client)
        .unwrap()
}

/// Creates a business day dated `test_today()` and materializes the
/// default grid onto it. Returns the day ID.
pub fn seed_materialized_day(persistence: &mut Persistence, business_id: i64) -> i64 {
    let day_id = persistence
        .create_day(business_id, test_today(), test_today())
        .unwrap();
    persistence
        .materialize_day(day_id, &default_grid(), test_today())
        .unwrap();
    day_id
}
