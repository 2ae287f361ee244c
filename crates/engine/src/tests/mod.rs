// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::unwrap_used)]

mod generation_tests;

use crate::{Actor, GridRequest, resolve_actor};
use chrono::{NaiveDate, NaiveTime};
use slotbook_domain::{BreakWindow, Role};
use slotbook_persistence::Persistence;

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

/// A standard request: 09:00-17:00, 30-minute slots, lunch break
/// 12:00-13:00. Generates 14 slots per day.
pub fn default_request() -> GridRequest {
    GridRequest {
        start_time: t(9, 0),
        end_time: t(17, 0),
        interval_minutes: 30,
        breaks: vec![BreakWindow::new(t(12, 0), t(13, 0)).unwrap()],
    }
}

/// Creates an owner and their business; returns the business ID and
/// the owner as a resolved actor.
pub fn seed_business(persistence: &mut Persistence) -> (i64, Actor) {
    let owner_id = persistence
        .create_user("owner", "Olive Owner", Role::Owner)
        .unwrap();
    let business_id = persistence
        .create_business("Corner Salon", owner_id, Some("Walk-ins welcome"))
        .unwrap();
    let owner = resolve_actor(persistence, owner_id).unwrap();
    (business_id, owner)
}

/// Creates a client user and returns them as a resolved actor.
pub fn seed_client(persistence: &mut Persistence, username: &str) -> Actor {
    let user_id = persistence
        .create_user(username, username, Role::Client)
        .unwrap();
    resolve_actor(persistence, user_id).unwrap()
}

/// Creates a business day dated `test_today()`. Returns the day ID.
pub fn seed_day(persistence: &mut Persistence, business_id: i64) -> i64 {
    persistence
        .create_day(business_id, test_today(), test_today())
        .unwrap()
}
