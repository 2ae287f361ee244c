// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The role a user holds in the system.
///
/// Staff membership is not a role: staff are users attached to a
/// business through its roster, and may hold either role themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// A business owner. Owners manage days, slots, and staff for the
    /// businesses they own.
    Owner,
    /// A client. Clients book and cancel appointments.
    Client,
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "owner" => Ok(Self::Owner),
            "client" => Ok(Self::Client),
            _ => Err(DomainError::InvalidRole(s.to_string())),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Role {
    /// Converts this role to its persisted string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::Client => "client",
        }
    }
}

/// The management roster of a business: its owner plus the user IDs of
/// currently active staff members.
///
/// This is the input to the [`can_manage`](crate::can_manage) predicate.
/// It is assembled per request from persisted state; there is no
/// process-wide permission registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffRoster {
    /// The owning user's ID.
    owner_id: i64,
    /// Active staff user IDs. Deactivated staff are excluded.
    staff_ids: Vec<i64>,
}

impl StaffRoster {
    /// Creates a roster from an owner and the active staff user IDs.
    #[must_use]
    pub const fn new(owner_id: i64, staff_ids: Vec<i64>) -> Self {
        Self { owner_id, staff_ids }
    }

    /// The owning user's ID.
    #[must_use]
    pub const fn owner_id(&self) -> i64 {
        self.owner_id
    }

    /// Whether the given user is an active staff member.
    #[must_use]
    pub fn is_staff(&self, user_id: i64) -> bool {
        self.staff_ids.contains(&user_id)
    }
}
