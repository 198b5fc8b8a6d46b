// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Activity log appends.
//!
//! Activity writes run outside lifecycle transactions and are not part
//! of their atomicity contract: an entry may be lost on failure, a
//! lifecycle mutation may not. Callers treat failures here as
//! best-effort and must never roll a lifecycle operation back on their
//! account.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use promo_track_activity::ActivityRecord;
use tracing::debug;

use crate::backend::PersistenceBackend;
use crate::diesel_schema::activity_log;
use crate::error::PersistenceError;

backend_fn! {
/// Appends an activity entry.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `record` - The activity record to append
///
/// # Returns
///
/// The activity ID assigned to the persisted entry.
///
/// # Errors
///
/// Returns an error if the database write fails.
pub fn record_activity(
    conn: &mut _,
    record: &ActivityRecord,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(activity_log::table)
        .values((
            activity_log::entity_kind.eq(record.entity_kind.as_str()),
            activity_log::action.eq(&record.action),
            activity_log::entity_id.eq(record.entity_id),
            activity_log::acting_user.eq(record.acting_user),
            activity_log::detail.eq(record.detail.as_deref()),
            activity_log::created_at.eq(diesel::dsl::sql::<diesel::sql_types::Text>(
                "CURRENT_TIMESTAMP",
            )),
        ))
        .execute(conn)?;

    let activity_id: i64 = conn.get_last_insert_rowid()?;

    debug!(
        activity_id,
        action = %record.action,
        entity_id = record.entity_id,
        "Recorded activity entry"
    );

    Ok(activity_id)
}
}
