// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Assignment row lookups used by the lifecycle engine.
//!
//! These queries are backend-agnostic Diesel DSL, except for
//! `lock_open_assignments_*`: the `MySQL` variant appends
//! `FOR UPDATE`, which `SQLite` does not support. The two variants are
//! unified behind `PersistenceBackend::lock_open_assignments`.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use promo_track_domain::{Assignment, parse_date};
use tracing::debug;

use crate::diesel_schema::assignments;
use crate::error::PersistenceError;

/// Diesel Queryable struct for assignment rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = assignments)]
pub(crate) struct AssignmentRow {
    pub(crate) assignment_id: i64,
    pub(crate) promoter_id: i64,
    pub(crate) store_id: i64,
    pub(crate) start_date: String,
    pub(crate) end_date: Option<String>,
    pub(crate) is_active: i32,
    pub(crate) reason_created: String,
    pub(crate) reason_changed: Option<String>,
    pub(crate) created_by: i64,
    pub(crate) changed_by: Option<i64>,
    pub(crate) created_at: String,
    pub(crate) updated_at: String,
}

impl AssignmentRow {
    /// Converts a raw row into a domain `Assignment`, parsing its dates.
    pub(crate) fn into_assignment(self) -> Result<Assignment, PersistenceError> {
        let start_date = parse_date(&self.start_date).map_err(|_| {
            PersistenceError::InvalidStoredDate {
                column: "start_date",
                value: self.start_date.clone(),
            }
        })?;
        let end_date = match self.end_date {
            Some(value) => Some(parse_date(&value).map_err(|_| {
                PersistenceError::InvalidStoredDate {
                    column: "end_date",
                    value,
                }
            })?),
            None => None,
        };

        Ok(Assignment {
            assignment_id: Some(self.assignment_id),
            promoter_id: self.promoter_id,
            store_id: self.store_id,
            start_date,
            end_date,
            is_active: self.is_active != 0,
            reason_created: self.reason_created,
            reason_changed: self.reason_changed,
            created_by: self.created_by,
            changed_by: self.changed_by,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// Converts a batch of rows, failing on the first invalid stored date.
pub(crate) fn rows_into_assignments(
    rows: Vec<AssignmentRow>,
) -> Result<Vec<Assignment>, PersistenceError> {
    rows.into_iter().map(AssignmentRow::into_assignment).collect()
}

backend_fn! {
/// Retrieves an assignment by ID.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `assignment_id` - The assignment ID
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the assignment is not found.
pub fn get_assignment(
    conn: &mut _,
    assignment_id: i64,
) -> Result<Option<Assignment>, PersistenceError> {
    debug!("Looking up assignment by ID: {}", assignment_id);

    let result: Result<AssignmentRow, diesel::result::Error> = assignments::table
        .filter(assignments::assignment_id.eq(assignment_id))
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
/// Retrieves a promoter's currently open assignments, oldest first.
///
/// An assignment is open when `is_active` is set and `end_date` is null.
/// Under invariant rules at most one row qualifies, but degenerate
/// legacy data may hold more; callers must handle plurality.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `promoter_id` - The promoter ID
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn open_assignments_for_promoter(
    conn: &mut _,
    promoter_id: i64,
) -> Result<Vec<Assignment>, PersistenceError> {
    let rows: Vec<AssignmentRow> = assignments::table
        .filter(assignments::promoter_id.eq(promoter_id))
        .filter(assignments::is_active.eq(1))
        .filter(assignments::end_date.is_null())
        .order((assignments::start_date.asc(), assignments::assignment_id.asc()))
        .select(AssignmentRow::as_select())
        .load(conn)?;

    rows_into_assignments(rows)
}
}

/// Fetches a promoter's open assignments without a locking clause
/// (`SQLite` version).
///
/// `SQLite` has no `FOR UPDATE`; the enclosing write transaction already
/// excludes concurrent writers.
///
/// # Errors
///
/// Returns an error if the query fails or a stored date is invalid.
pub fn lock_open_assignments_sqlite(
    conn: &mut SqliteConnection,
    promoter_id: i64,
) -> Result<Vec<Assignment>, PersistenceError> {
    debug!("Fetching open assignments for promoter {}", promoter_id);

    let rows: Vec<AssignmentRow> = assignments::table
        .filter(assignments::promoter_id.eq(promoter_id))
        .filter(assignments::is_active.eq(1))
        .filter(assignments::end_date.is_null())
        .order((assignments::start_date.asc(), assignments::assignment_id.asc()))
        .select(AssignmentRow::as_select())
        .load(conn)?;

    rows_into_assignments(rows)
}

/// Fetches a promoter's open assignments with `FOR UPDATE` row locks
/// (`MySQL` version).
///
/// The locks are held until the enclosing transaction commits or rolls
/// back, serializing concurrent lifecycle operations per promoter.
///
/// # Errors
///
/// Returns an error if the query fails or a stored date is invalid.
pub fn lock_open_assignments_mysql(
    conn: &mut MysqlConnection,
    promoter_id: i64,
) -> Result<Vec<Assignment>, PersistenceError> {
    debug!(
        "Fetching open assignments for promoter {} with row locks",
        promoter_id
    );

    let rows: Vec<AssignmentRow> = assignments::table
        .filter(assignments::promoter_id.eq(promoter_id))
        .filter(assignments::is_active.eq(1))
        .filter(assignments::end_date.is_null())
        .order((assignments::start_date.asc(), assignments::assignment_id.asc()))
        .select(AssignmentRow::as_select())
        .for_update()
        .load(conn)?;

    rows_into_assignments(rows)
}

backend_fn! {
/// Counts a promoter's currently open assignments.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `promoter_id` - The promoter ID
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn count_open_assignments(
    conn: &mut _,
    promoter_id: i64,
) -> Result<i64, PersistenceError> {
    let count: i64 = assignments::table
        .filter(assignments::promoter_id.eq(promoter_id))
        .filter(assignments::is_active.eq(1))
        .filter(assignments::end_date.is_null())
        .count()
        .get_result(conn)?;

    Ok(count)
}
}
