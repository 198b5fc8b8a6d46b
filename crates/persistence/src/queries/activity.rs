// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Activity log reads.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};

use crate::data_models::ActivityEntry;
use crate::diesel_schema::activity_log;
use crate::error::PersistenceError;

/// Diesel Queryable struct for activity log rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = activity_log)]
struct ActivityRow {
    activity_id: i64,
    entity_kind: String,
    action: String,
    entity_id: i64,
    acting_user: i64,
    detail: Option<String>,
    created_at: String,
}

impl From<ActivityRow> for ActivityEntry {
    fn from(row: ActivityRow) -> Self {
        Self {
            activity_id: row.activity_id,
            entity_kind: row.entity_kind,
            action: row.action,
            entity_id: row.entity_id,
            acting_user: row.acting_user,
            detail: row.detail,
            created_at: row.created_at,
        }
    }
}

backend_fn! {
/// Retrieves the activity entries recorded for one entity, oldest first.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `entity_kind` - The entity kind string (e.g., "Assignment")
/// * `entity_id` - The entity ID
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn activity_for_entity(
    conn: &mut _,
    entity_kind: &str,
    entity_id: i64,
) -> Result<Vec<ActivityEntry>, PersistenceError> {
    let rows: Vec<ActivityRow> = activity_log::table
        .filter(activity_log::entity_kind.eq(entity_kind))
        .filter(activity_log::entity_id.eq(entity_id))
        .order(activity_log::activity_id.asc())
        .select(ActivityRow::as_select())
        .load(conn)?;

    Ok(rows.into_iter().map(ActivityEntry::from).collect())
}
}

backend_fn! {
/// Retrieves the most recent activity entries across all entities.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `limit` - Maximum number of entries to return
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn recent_activity(
    conn: &mut _,
    limit: i64,
) -> Result<Vec<ActivityEntry>, PersistenceError> {
    let rows: Vec<ActivityRow> = activity_log::table
        .order(activity_log::activity_id.desc())
        .limit(limit)
        .select(ActivityRow::as_select())
        .load(conn)?;

    Ok(rows.into_iter().map(ActivityEntry::from).collect())
}
}
