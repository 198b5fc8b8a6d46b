// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The transactional assignment lifecycle operations.
//!
//! Each operation runs inside a single database transaction: any
//! precondition failure after the transaction starts rolls the whole
//! transaction back and leaves no visible side effects. Conflict checks
//! are performed against rows fetched through
//! `PersistenceBackend::lock_open_assignments`, so two concurrent
//! operations on the same promoter's timeline serialize rather than
//! both observing a stale open set.
//!
//! Timestamps (`created_at`, `updated_at`) are set by the database via
//! `CURRENT_TIMESTAMP`.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use promo_track_domain::{Assignment, format_date};
use time::Date;
use tracing::info;

use crate::backend::PersistenceBackend;
use crate::diesel_schema::assignments;
use crate::error::PersistenceError;
use crate::queries::assignments::AssignmentRow;

/// Reason recorded on assignments closed because a successor was created.
pub const SUPERSEDED_REASON: &str = "superseded by new assignment";

/// Reason recorded on assignments reactivated after their successor was
/// deleted.
pub const REACTIVATED_REASON: &str = "reactivated after deletion of successor";

/// The result of a committed `create_assignment` operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateAssignmentOutcome {
    /// The newly created open assignment.
    pub created: Assignment,
    /// Previously open assignments closed by this creation.
    pub superseded: Vec<Assignment>,
}

/// The result of a committed `finalize_assignment` operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalizeAssignmentOutcome {
    /// The hard-deleted assignment's ID.
    pub deleted_id: i64,
    /// The reactivated predecessor, if one was restored.
    pub reactivated: Option<Assignment>,
}

/// The result of a committed `transfer_assignment` operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferAssignmentOutcome {
    /// The old assignment, now closed.
    pub closed: Assignment,
    /// The new open assignment.
    pub opened: Assignment,
}

backend_fn! {
/// Creates a new open assignment, superseding the promoter's existing
/// open assignments.
///
/// Within a single transaction:
///
/// 1. Locks and fetches the promoter's open assignments.
/// 2. Rejects an exact duplicate of an open
///    `(promoter, store, start_date)` triple.
/// 3. Closes every other open assignment at `start_date - 1 day`. A
///    promoter may have zero, one, or (in degenerate legacy data) more
///    than one open assignment; all are closed, never just the most
///    recent. An open assignment starting on or after `start_date`
///    cannot be closed this way and aborts the operation.
/// 4. Inserts the new assignment, open and active.
/// 5. Re-checks that exactly one open assignment remains.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `promoter_id` - The promoter to assign
/// * `store_id` - The hosting store
/// * `start_date` - First day the assignment is in effect
/// * `reason` - Free-text creation reason
/// * `acting_user` - The acting user id supplied by the caller
///
/// # Errors
///
/// Returns an error if a conflict is detected or the database fails;
/// either way the transaction is rolled back in full.
pub fn create_assignment(
    conn: &mut _,
    promoter_id: i64,
    store_id: i64,
    start_date: Date,
    reason: &str,
    acting_user: i64,
) -> Result<CreateAssignmentOutcome, PersistenceError> {
    conn.transaction(|conn| {
        let open: Vec<Assignment> = conn.lock_open_assignments(promoter_id)?;

        // A true duplicate of an open triple is a conflict, not a supersede.
        if open
            .iter()
            .any(|a| a.store_id == store_id && a.start_date == start_date)
        {
            return Err(PersistenceError::DuplicateOpenAssignment {
                promoter_id,
                store_id,
                start_date: format_date(start_date),
            });
        }

        let cutoff: Date = start_date.previous_day().ok_or_else(|| {
            PersistenceError::Other(format!(
                "Date arithmetic overflow computing the day before {start_date}"
            ))
        })?;
        let cutoff_str: String = format_date(cutoff);

        let mut superseded_ids: Vec<i64> = Vec::with_capacity(open.len());
        for prior in &open {
            let prior_id: i64 = require_row_id(prior)?;

            // Closing at start - 1 must not invert the prior interval.
            if prior.start_date >= start_date {
                return Err(PersistenceError::StartOverlapsOpenAssignment {
                    assignment_id: prior_id,
                    start_date: format_date(prior.start_date),
                });
            }

            diesel::update(assignments::table)
                .filter(assignments::assignment_id.eq(prior_id))
                .set((
                    assignments::end_date.eq(Some(cutoff_str.clone())),
                    assignments::reason_changed.eq(Some(SUPERSEDED_REASON)),
                    assignments::changed_by.eq(Some(acting_user)),
                    assignments::updated_at.eq(diesel::dsl::sql::<diesel::sql_types::Text>(
                        "CURRENT_TIMESTAMP",
                    )),
                ))
                .execute(conn)?;
            superseded_ids.push(prior_id);
        }

        diesel::insert_into(assignments::table)
            .values((
                assignments::promoter_id.eq(promoter_id),
                assignments::store_id.eq(store_id),
                assignments::start_date.eq(format_date(start_date)),
                assignments::is_active.eq(1),
                assignments::reason_created.eq(reason),
                assignments::created_by.eq(acting_user),
                assignments::created_at.eq(diesel::dsl::sql::<diesel::sql_types::Text>(
                    "CURRENT_TIMESTAMP",
                )),
                assignments::updated_at.eq(diesel::dsl::sql::<diesel::sql_types::Text>(
                    "CURRENT_TIMESTAMP",
                )),
            ))
            .execute(conn)?;

        let created_id: i64 = conn.get_last_insert_rowid()?;

        let open_count: i64 = assignments::table
            .filter(assignments::promoter_id.eq(promoter_id))
            .filter(assignments::is_active.eq(1))
            .filter(assignments::end_date.is_null())
            .count()
            .get_result(conn)?;
        if open_count != 1 {
            return Err(PersistenceError::OpenCountViolation {
                promoter_id,
                count: open_count,
            });
        }

        let created: Assignment = assignments::table
            .filter(assignments::assignment_id.eq(created_id))
            .select(AssignmentRow::as_select())
            .first::<AssignmentRow>(conn)?
            .into_assignment()?;
        let mut superseded: Vec<Assignment> = Vec::with_capacity(superseded_ids.len());
        for id in superseded_ids {
            let row: AssignmentRow = assignments::table
                .filter(assignments::assignment_id.eq(id))
                .select(AssignmentRow::as_select())
                .first(conn)?;
            superseded.push(row.into_assignment()?);
        }

        info!(
            promoter_id,
            store_id,
            created_id,
            superseded_count = superseded.len(),
            "Created assignment"
        );

        Ok(CreateAssignmentOutcome { created, superseded })
    })
}
}

backend_fn! {
/// Hard-deletes an assignment and reactivates its chronological
/// predecessor where that restores the timeline.
///
/// Within a single transaction:
///
/// 1. Fetches the target assignment.
/// 2. Locks the promoter's open assignments to serialize against
///    concurrent lifecycle operations on the same timeline.
/// 3. Searches the predecessor: same promoter, greatest `start_date`
///    strictly below the target's, ties broken by latest `created_at`
///    then highest ID.
/// 4. Deletes the target.
/// 5. Reactivates the predecessor only if the promoter is left without
///    any open assignment; a promoter with zero assignments afterwards
///    is a valid terminal state, not an error.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `assignment_id` - The assignment to finalize
/// * `acting_user` - The acting user id supplied by the caller
///
/// # Errors
///
/// Returns `AssignmentNotFound` if the target does not exist, or a
/// database error; either way the transaction is rolled back in full.
pub fn finalize_assignment(
    conn: &mut _,
    assignment_id: i64,
    acting_user: i64,
) -> Result<FinalizeAssignmentOutcome, PersistenceError> {
    conn.transaction(|conn| {
        let target: Assignment = assignments::table
            .filter(assignments::assignment_id.eq(assignment_id))
            .select(AssignmentRow::as_select())
            .first::<AssignmentRow>(conn)
            .optional()?
            .ok_or(PersistenceError::AssignmentNotFound(assignment_id))?
            .into_assignment()?;

        let _open: Vec<Assignment> = conn.lock_open_assignments(target.promoter_id)?;

        let start_str: String = format_date(target.start_date);
        let predecessor: Option<AssignmentRow> = assignments::table
            .filter(assignments::promoter_id.eq(target.promoter_id))
            .filter(assignments::assignment_id.ne(assignment_id))
            .filter(assignments::start_date.lt(&start_str))
            .order((
                assignments::start_date.desc(),
                assignments::created_at.desc(),
                assignments::assignment_id.desc(),
            ))
            .select(AssignmentRow::as_select())
            .first(conn)
            .optional()?;

        diesel::delete(assignments::table)
            .filter(assignments::assignment_id.eq(assignment_id))
            .execute(conn)?;

        let remaining_open: i64 = assignments::table
            .filter(assignments::promoter_id.eq(target.promoter_id))
            .filter(assignments::is_active.eq(1))
            .filter(assignments::end_date.is_null())
            .count()
            .get_result(conn)?;

        // Reactivating while another open assignment survives would put
        // two open rows on the timeline.
        let reactivated: Option<Assignment> = match predecessor {
            Some(row) if remaining_open == 0 => {
                let predecessor_id: i64 = row.assignment_id;
                diesel::update(assignments::table)
                    .filter(assignments::assignment_id.eq(predecessor_id))
                    .set((
                        assignments::end_date.eq(None::<String>),
                        assignments::is_active.eq(1),
                        assignments::reason_changed.eq(Some(REACTIVATED_REASON)),
                        assignments::changed_by.eq(Some(acting_user)),
                        assignments::updated_at.eq(diesel::dsl::sql::<
                            diesel::sql_types::Text,
                        >("CURRENT_TIMESTAMP")),
                    ))
                    .execute(conn)?;
                let reloaded: AssignmentRow = assignments::table
                    .filter(assignments::assignment_id.eq(predecessor_id))
                    .select(AssignmentRow::as_select())
                    .first(conn)?;
                Some(reloaded.into_assignment()?)
            }
            _ => None,
        };

        info!(
            assignment_id,
            promoter_id = target.promoter_id,
            reactivated_id = reactivated.as_ref().and_then(|a| a.assignment_id),
            "Finalized assignment"
        );

        Ok(FinalizeAssignmentOutcome {
            deleted_id: assignment_id,
            reactivated,
        })
    })
}
}

backend_fn! {
/// Atomically closes one assignment and opens another.
///
/// Used both for "same promoter, different store" and "different
/// promoter" transfers. Same-day handoff convention: the old assignment
/// closes with `end_date = effective_date` and the new one opens at
/// `start_date = effective_date`.
///
/// Within a single transaction:
///
/// 1. Fetches the old assignment.
/// 2. Locks both timelines' open rows, in ascending promoter order.
/// 3. Re-verifies under lock that the old assignment is still open and
///    that the target promoter has no competing open assignment.
/// 4. Closes the old assignment and inserts the new one.
/// 5. Re-checks that the target promoter holds exactly one open
///    assignment.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `old_assignment_id` - The open assignment being handed over
/// * `target_promoter_id` - The promoter receiving the new assignment
/// * `target_store_id` - The store hosting the new assignment
/// * `effective_date` - The handoff date
/// * `reason` - Free-text reason, recorded on both halves
/// * `acting_user` - The acting user id supplied by the caller
///
/// # Errors
///
/// Returns an error on any precondition or conflict violation; either
/// way the transaction is rolled back in full and neither the close nor
/// the open is visible.
pub fn transfer_assignment(
    conn: &mut _,
    old_assignment_id: i64,
    target_promoter_id: i64,
    target_store_id: i64,
    effective_date: Date,
    reason: &str,
    acting_user: i64,
) -> Result<TransferAssignmentOutcome, PersistenceError> {
    conn.transaction(|conn| {
        let old: Assignment = assignments::table
            .filter(assignments::assignment_id.eq(old_assignment_id))
            .select(AssignmentRow::as_select())
            .first::<AssignmentRow>(conn)
            .optional()?
            .ok_or(PersistenceError::AssignmentNotFound(old_assignment_id))?
            .into_assignment()?;

        // Lock both timelines in ascending promoter order.
        let (old_open, target_open): (Vec<Assignment>, Vec<Assignment>) =
            if old.promoter_id == target_promoter_id {
                let open = conn.lock_open_assignments(target_promoter_id)?;
                (open.clone(), open)
            } else if old.promoter_id < target_promoter_id {
                let old_open = conn.lock_open_assignments(old.promoter_id)?;
                let target_open = conn.lock_open_assignments(target_promoter_id)?;
                (old_open, target_open)
            } else {
                let target_open = conn.lock_open_assignments(target_promoter_id)?;
                let old_open = conn.lock_open_assignments(old.promoter_id)?;
                (old_open, target_open)
            };

        if !old_open
            .iter()
            .any(|a| a.assignment_id == Some(old_assignment_id))
        {
            return Err(PersistenceError::AssignmentNotOpen(old_assignment_id));
        }

        if effective_date < old.start_date {
            return Err(PersistenceError::EffectiveDateBeforeStart {
                assignment_id: old_assignment_id,
                effective_date: format_date(effective_date),
                start_date: format_date(old.start_date),
            });
        }

        // The close below clears the old assignment; any other open row
        // on the target timeline is a competing assignment.
        for open_row in &target_open {
            if open_row.assignment_id != Some(old_assignment_id) {
                return Err(PersistenceError::CompetingOpenAssignment {
                    promoter_id: target_promoter_id,
                    store_id: open_row.store_id,
                });
            }
        }

        diesel::update(assignments::table)
            .filter(assignments::assignment_id.eq(old_assignment_id))
            .set((
                assignments::end_date.eq(Some(format_date(effective_date))),
                assignments::reason_changed.eq(Some(reason)),
                assignments::changed_by.eq(Some(acting_user)),
                assignments::updated_at.eq(diesel::dsl::sql::<diesel::sql_types::Text>(
                    "CURRENT_TIMESTAMP",
                )),
            ))
            .execute(conn)?;

        diesel::insert_into(assignments::table)
            .values((
                assignments::promoter_id.eq(target_promoter_id),
                assignments::store_id.eq(target_store_id),
                assignments::start_date.eq(format_date(effective_date)),
                assignments::is_active.eq(1),
                assignments::reason_created.eq(reason),
                assignments::created_by.eq(acting_user),
                assignments::created_at.eq(diesel::dsl::sql::<diesel::sql_types::Text>(
                    "CURRENT_TIMESTAMP",
                )),
                assignments::updated_at.eq(diesel::dsl::sql::<diesel::sql_types::Text>(
                    "CURRENT_TIMESTAMP",
                )),
            ))
            .execute(conn)?;

        let opened_id: i64 = conn.get_last_insert_rowid()?;

        let open_count: i64 = assignments::table
            .filter(assignments::promoter_id.eq(target_promoter_id))
            .filter(assignments::is_active.eq(1))
            .filter(assignments::end_date.is_null())
            .count()
            .get_result(conn)?;
        if open_count != 1 {
            return Err(PersistenceError::OpenCountViolation {
                promoter_id: target_promoter_id,
                count: open_count,
            });
        }

        let closed: Assignment = assignments::table
            .filter(assignments::assignment_id.eq(old_assignment_id))
            .select(AssignmentRow::as_select())
            .first::<AssignmentRow>(conn)?
            .into_assignment()?;
        let opened: Assignment = assignments::table
            .filter(assignments::assignment_id.eq(opened_id))
            .select(AssignmentRow::as_select())
            .first::<AssignmentRow>(conn)?
            .into_assignment()?;

        info!(
            old_assignment_id,
            opened_id, target_promoter_id, target_store_id, "Transferred assignment"
        );

        Ok(TransferAssignmentOutcome { closed, opened })
    })
}
}

fn require_row_id(assignment: &Assignment) -> Result<i64, PersistenceError> {
    assignment
        .assignment_id
        .ok_or_else(|| PersistenceError::Other(String::from("Persisted assignment row without ID")))
}
