// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! User, business, staff, and business-day mutations.

use chrono::{NaiveDate, Utc};
use diesel::prelude::*;
use diesel::SqliteConnection;
use slotbook_domain::{Role, validate_day_not_past};
use tracing::{debug, info};

use crate::data_models::{NewBusiness, NewDay, NewStaff, NewUser, format_date};
use crate::diesel_schema::{business_staff, businesses, days};
use crate::error::PersistenceError;
use crate::queries;
use crate::sqlite::get_last_insert_rowid;

/// Creates a user and returns its ID.
///
/// # Errors
///
/// Returns [`PersistenceError::DuplicateRecord`] if the username is
/// taken, or another error if the insert fails.
pub fn create_user(
    conn: &mut SqliteConnection,
    username: &str,
    display_name: &str,
    role: Role,
) -> Result<i64, PersistenceError> {
    let record = NewUser {
        username: username.to_string(),
        display_name: display_name.to_string(),
        role: role.as_str().to_string(),
    };

    diesel::insert_into(crate::diesel_schema::users::table)
        .values(&record)
        .execute(conn)?;
    let user_id = get_last_insert_rowid(conn)?;

    info!(user_id, username, role = role.as_str(), "Created user");
    Ok(user_id)
}

/// Creates a business owned by the given user and returns its ID.
///
/// # Errors
///
/// Returns [`PersistenceError::DuplicateRecord`] if the name is taken,
/// or another error if the insert fails.
pub fn create_business(
    conn: &mut SqliteConnection,
    name: &str,
    owner_user_id: i64,
    description: Option<&str>,
) -> Result<i64, PersistenceError> {
    let record = NewBusiness {
        name: name.to_string(),
        owner_user_id,
        description: description.map(ToString::to_string),
        created_at: Utc::now().to_rfc3339(),
    };

    diesel::insert_into(businesses::table)
        .values(&record)
        .execute(conn)?;
    let business_id = get_last_insert_rowid(conn)?;

    info!(business_id, name, owner_user_id, "Created business");
    Ok(business_id)
}

/// Deletes a business. Days, slots, and appointments cascade.
///
/// # Errors
///
/// Returns [`PersistenceError::BusinessNotFound`] if no row was
/// deleted.
pub fn delete_business(
    conn: &mut SqliteConnection,
    business_id: i64,
) -> Result<(), PersistenceError> {
    let rows_affected = diesel::delete(
        businesses::table.filter(businesses::business_id.eq(business_id)),
    )
    .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::BusinessNotFound(business_id));
    }

    info!(business_id, "Deleted business and its scheduling data");
    Ok(())
}

/// Adds a user to a business's staff roster, reactivating a previously
/// removed membership if one exists.
///
/// # Errors
///
/// Returns an error if the insert or update fails.
pub fn add_staff(
    conn: &mut SqliteConnection,
    business_id: i64,
    user_id: i64,
) -> Result<(), PersistenceError> {
    let now = Utc::now().to_rfc3339();

    let existing: Option<i64> = business_staff::table
        .select(business_staff::staff_id)
        .filter(business_staff::business_id.eq(business_id))
        .filter(business_staff::user_id.eq(user_id))
        .first::<i64>(conn)
        .optional()?;

    if let Some(staff_id) = existing {
        diesel::update(business_staff::table.filter(business_staff::staff_id.eq(staff_id)))
            .set((
                business_staff::is_active.eq(1),
                business_staff::removed_at.eq(None::<String>),
            ))
            .execute(conn)?;
        debug!(business_id, user_id, "Reactivated staff membership");
        return Ok(());
    }

    let record = NewStaff {
        business_id,
        user_id,
        is_active: 1,
        added_at: now,
        removed_at: None,
    };
    diesel::insert_into(business_staff::table)
        .values(&record)
        .execute(conn)?;

    info!(business_id, user_id, "Added staff member");
    Ok(())
}

/// Deactivates a staff membership. The row is kept with its removal
/// timestamp; the user drops out of the roster immediately.
///
/// # Errors
///
/// Returns [`PersistenceError::NotFound`] if the user is not an active
/// staff member of the business.
pub fn deactivate_staff(
    conn: &mut SqliteConnection,
    business_id: i64,
    user_id: i64,
) -> Result<(), PersistenceError> {
    let rows_affected = diesel::update(
        business_staff::table
            .filter(business_staff::business_id.eq(business_id))
            .filter(business_staff::user_id.eq(user_id))
            .filter(business_staff::is_active.eq(1)),
    )
    .set((
        business_staff::is_active.eq(0),
        business_staff::removed_at.eq(Some(Utc::now().to_rfc3339())),
    ))
    .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::NotFound(format!(
            "User {user_id} is not an active staff member of business {business_id}"
        )));
    }

    info!(business_id, user_id, "Deactivated staff member");
    Ok(())
}

/// Creates a business day, rejecting past dates.
///
/// # Errors
///
/// Returns a validation error for past dates, or
/// [`PersistenceError::DuplicateRecord`] if the day already exists.
pub fn create_day(
    conn: &mut SqliteConnection,
    business_id: i64,
    date: NaiveDate,
    today: NaiveDate,
) -> Result<i64, PersistenceError> {
    validate_day_not_past(date, today)?;

    let record = NewDay {
        business_id,
        date: format_date(date),
    };
    diesel::insert_into(days::table)
        .values(&record)
        .execute(conn)?;
    let day_id = get_last_insert_rowid(conn)?;

    debug!(day_id, business_id, %date, "Created business day");
    Ok(day_id)
}

/// Returns the day for `(business_id, date)`, creating it if missing.
///
/// The boolean is true when a new day was created. Callers in ranged
/// generation have already clamped the range, so no past-date check
/// happens here.
///
/// # Errors
///
/// Returns an error if the lookup or insert fails.
pub fn get_or_create_day(
    conn: &mut SqliteConnection,
    business_id: i64,
    date: NaiveDate,
) -> Result<(i64, bool), PersistenceError> {
    if let Some(day) = queries::slots::find_day(conn, business_id, date)? {
        return Ok((day.day_id, false));
    }

    let record = NewDay {
        business_id,
        date: format_date(date),
    };
    diesel::insert_into(days::table)
        .values(&record)
        .execute(conn)?;
    let day_id = get_last_insert_rowid(conn)?;

    debug!(day_id, business_id, %date, "Created business day");
    Ok((day_id, true))
}
