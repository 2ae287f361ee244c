// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Actor resolution and per-action authorization checks.
//!
//! Authorization is evaluated per request against the roster loaded
//! from persistence; there is no process-wide permission state.

use slotbook_domain::{Role, can_book, can_manage};
use slotbook_persistence::Persistence;
use std::str::FromStr;

use crate::error::EngineError;

/// An authenticated actor as resolved from persisted user state.
///
/// Authentication itself happens upstream; the engine receives a user
/// ID it trusts and loads the role bound to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    /// The actor's user ID.
    pub user_id: i64,
    /// The actor's username, used in log and error messages.
    pub username: String,
    /// The actor's role.
    pub role: Role,
}

/// Resolves an actor from a user ID.
///
/// # Errors
///
/// Returns `NotFound` for an unknown user or `Internal` if the stored
/// role string does not parse.
pub fn resolve_actor(
    persistence: &mut Persistence,
    user_id: i64,
) -> Result<Actor, EngineError> {
    let user = persistence.get_user(user_id)?;
    let role = Role::from_str(&user.role).map_err(|e| EngineError::Internal {
        message: format!("User {user_id} has an unrecognized role: {e}"),
    })?;
    Ok(Actor {
        user_id: user.user_id,
        username: user.username,
        role,
    })
}

/// Requires that the actor may manage the given business.
///
/// # Errors
///
/// Returns `Unauthorized` naming the action if the actor is neither
/// the owner nor active staff.
pub fn require_manage(
    persistence: &mut Persistence,
    actor: &Actor,
    business_id: i64,
    action: &str,
) -> Result<(), EngineError> {
    let roster = persistence.staff_roster(business_id)?;
    if can_manage(actor.user_id, &roster) {
        return Ok(());
    }
    Err(EngineError::Unauthorized {
        action: action.to_string(),
    })
}

/// Requires that the actor holds the client role.
///
/// # Errors
///
/// Returns `NotAClient` otherwise.
pub fn require_client(actor: &Actor) -> Result<(), EngineError> {
    if can_book(actor.role) {
        return Ok(());
    }
    Err(EngineError::NotAClient {
        user_id: actor.user_id,
    })
}
