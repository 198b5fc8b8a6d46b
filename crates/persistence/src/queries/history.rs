// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only timeline projections.
//!
//! These queries reconstruct a promoter's or store's assignment history
//! directly from the assignment table. They run at the store's default
//! isolation, outside any lifecycle transaction, and never mutate.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use promo_track_domain::Assignment;

use crate::diesel_schema::assignments;
use crate::error::PersistenceError;
use crate::queries::assignments::{AssignmentRow, rows_into_assignments};

backend_fn! {
/// Retrieves a promoter's full assignment timeline, oldest first.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `promoter_id` - The promoter ID
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn assignments_for_promoter(
    conn: &mut _,
    promoter_id: i64,
) -> Result<Vec<Assignment>, PersistenceError> {
    let rows: Vec<AssignmentRow> = assignments::table
        .filter(assignments::promoter_id.eq(promoter_id))
        .order((
            assignments::start_date.asc(),
            assignments::created_at.asc(),
            assignments::assignment_id.asc(),
        ))
        .select(AssignmentRow::as_select())
        .load(conn)?;

    rows_into_assignments(rows)
}
}

backend_fn! {
/// Retrieves a store's full assignment timeline, oldest first.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `store_id` - The store ID
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn assignments_for_store(
    conn: &mut _,
    store_id: i64,
) -> Result<Vec<Assignment>, PersistenceError> {
    let rows: Vec<AssignmentRow> = assignments::table
        .filter(assignments::store_id.eq(store_id))
        .order((
            assignments::start_date.asc(),
            assignments::created_at.asc(),
            assignments::assignment_id.asc(),
        ))
        .select(AssignmentRow::as_select())
        .load(conn)?;

    rows_into_assignments(rows)
}
}

backend_fn! {
/// Retrieves a promoter's current open assignment, if any.
///
/// With degenerate legacy plurality, the most recently started open
/// assignment wins.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `promoter_id` - The promoter ID
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the promoter has no open assignment.
pub fn current_assignment_for_promoter(
    conn: &mut _,
    promoter_id: i64,
) -> Result<Option<Assignment>, PersistenceError> {
    let result: Result<AssignmentRow, diesel::result::Error> = assignments::table
        .filter(assignments::promoter_id.eq(promoter_id))
        .filter(assignments::is_active.eq(1))
        .filter(assignments::end_date.is_null())
        .order((assignments::start_date.desc(), assignments::assignment_id.desc()))
        .select(AssignmentRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(row.into_assignment()?)),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}

backend_fn! {
/// Retrieves a store's currently open assignments (its roster).
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `store_id` - The store ID
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn open_assignments_for_store(
    conn: &mut _,
    store_id: i64,
) -> Result<Vec<Assignment>, PersistenceError> {
    let rows: Vec<AssignmentRow> = assignments::table
        .filter(assignments::store_id.eq(store_id))
        .filter(assignments::is_active.eq(1))
        .filter(assignments::end_date.is_null())
        .order((assignments::start_date.asc(), assignments::assignment_id.asc()))
        .select(AssignmentRow::as_select())
        .load(conn)?;

    rows_into_assignments(rows)
}
}
