// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Authorization predicates.
//!
//! These are pure functions evaluated per request against the roster
//! loaded from persistence. There is no process-wide permission group
//! state: whoever calls the engine resolves the actor and the roster,
//! then these predicates decide.

use crate::types::{Role, StaffRoster};

/// Whether a user may manage a business: generate or regenerate slots
/// and cancel clients' bookings. Roster changes are stricter and
/// require ownership.
///
/// True exactly when the user owns the business or is an active staff
/// member on its roster.
#[must_use]
pub fn can_manage(user_id: i64, roster: &StaffRoster) -> bool {
    user_id == roster.owner_id() || roster.is_staff(user_id)
}

/// Whether a user may book appointments. Only clients book; owners
/// manage inventory but do not hold appointments themselves.
#[must_use]
pub const fn can_book(role: Role) -> bool {
    matches!(role, Role::Client)
}
