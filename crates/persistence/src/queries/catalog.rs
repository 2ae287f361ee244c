// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! User, business, and staff roster queries.

use diesel::prelude::*;
use diesel::SqliteConnection;
use slotbook_domain::StaffRoster;

use crate::data_models::{BusinessRecord, BusinessRow, UserRecord, UserRow};
use crate::diesel_schema::{business_staff, businesses, users};
use crate::error::PersistenceError;

/// Fetches a user by ID.
///
/// # Errors
///
/// Returns [`PersistenceError::UserNotFound`] if no such user exists.
pub fn get_user(conn: &mut SqliteConnection, user_id: i64) -> Result<UserRecord, PersistenceError> {
    let result = users::table
        .filter(users::user_id.eq(user_id))
        .first::<UserRow>(conn);

    match result {
        Ok(row) => Ok(row.into()),
        Err(diesel::result::Error::NotFound) => Err(PersistenceError::UserNotFound(user_id)),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Fetches a user by username.
///
/// # Errors
///
/// Returns [`PersistenceError::NotFound`] if no such user exists.
pub fn find_user_by_username(
    conn: &mut SqliteConnection,
    username: &str,
) -> Result<UserRecord, PersistenceError> {
    let result = users::table
        .filter(users::username.eq(username))
        .first::<UserRow>(conn);

    match result {
        Ok(row) => Ok(row.into()),
        Err(diesel::result::Error::NotFound) => Err(PersistenceError::NotFound(format!(
            "User '{username}' does not exist"
        ))),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Fetches a business by ID.
///
/// # Errors
///
/// Returns [`PersistenceError::BusinessNotFound`] if no such business
/// exists.
pub fn get_business(
    conn: &mut SqliteConnection,
    business_id: i64,
) -> Result<BusinessRecord, PersistenceError> {
    let result = businesses::table
        .filter(businesses::business_id.eq(business_id))
        .first::<BusinessRow>(conn);

    match result {
        Ok(row) => Ok(row.into()),
        Err(diesel::result::Error::NotFound) => {
            Err(PersistenceError::BusinessNotFound(business_id))
        }
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Assembles the management roster for a business: its owner plus all
/// currently active staff user IDs.
///
/// # Errors
///
/// Returns an error if the business does not exist or the query fails.
pub fn staff_roster(
    conn: &mut SqliteConnection,
    business_id: i64,
) -> Result<StaffRoster, PersistenceError> {
    let business = get_business(conn, business_id)?;

    let staff_ids: Vec<i64> = business_staff::table
        .select(business_staff::user_id)
        .filter(business_staff::business_id.eq(business_id))
        .filter(business_staff::is_active.eq(1))
        .order(business_staff::user_id.asc())
        .load::<i64>(conn)?;

    Ok(StaffRoster::new(business.owner_user_id, staff_ids))
}
