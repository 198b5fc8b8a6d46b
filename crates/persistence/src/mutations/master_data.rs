// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Promoter and store mirror upserts.
//!
//! Master data is owned by an external collaborator. These mutations
//! exist so that source can mirror rows into the local tables the
//! lifecycle engine reads for eligibility; the engine itself never
//! edits master data. Historical assignment rows are unaffected by
//! master-data changes.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use promo_track_domain::{Promoter, Store};
use tracing::info;

use crate::diesel_schema::{promoters, stores};
use crate::error::PersistenceError;

backend_fn! {
/// Inserts or replaces a promoter master-data row.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `promoter` - The promoter row as held by the master source
///
/// # Errors
///
/// Returns an error if the database write fails.
pub fn upsert_promoter(conn: &mut _, promoter: &Promoter) -> Result<(), PersistenceError> {
    info!(
        promoter_id = promoter.promoter_id,
        status = promoter.status.as_str(),
        "Syncing promoter master data"
    );

    diesel::replace_into(promoters::table)
        .values((
            promoters::promoter_id.eq(promoter.promoter_id),
            promoters::full_name.eq(&promoter.full_name),
            promoters::status.eq(promoter.status.as_str()),
            promoters::on_vacation.eq(i32::from(promoter.on_vacation)),
        ))
        .execute(conn)?;

    Ok(())
}
}

backend_fn! {
/// Inserts or replaces a store master-data row.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `store` - The store row as held by the master source
///
/// # Errors
///
/// Returns an error if the database write fails.
pub fn upsert_store(conn: &mut _, store: &Store) -> Result<(), PersistenceError> {
    info!(
        store_id = store.store_id,
        store_code = %store.store_code,
        "Syncing store master data"
    );

    diesel::replace_into(stores::table)
        .values((
            stores::store_id.eq(store.store_id),
            stores::store_code.eq(&store.store_code),
            stores::store_name.eq(store.store_name.as_deref()),
            stores::is_active.eq(i32::from(store.is_active)),
        ))
        .execute(conn)?;

    Ok(())
}
}
