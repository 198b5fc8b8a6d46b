// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Promoter and store eligibility lookups.
//!
//! Master data is owned by an external collaborator and mirrored into
//! these tables; the lifecycle engine only reads it to validate
//! eligibility.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use promo_track_domain::{Promoter, PromoterStatus, Store};
use std::str::FromStr;
use tracing::debug;

use crate::diesel_schema::{promoters, stores};
use crate::error::PersistenceError;

/// Diesel Queryable struct for promoter rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = promoters)]
struct PromoterRow {
    promoter_id: i64,
    full_name: String,
    status: String,
    on_vacation: i32,
}

/// Diesel Queryable struct for store rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = stores)]
struct StoreRow {
    store_id: i64,
    store_code: String,
    store_name: Option<String>,
    is_active: i32,
}

impl PromoterRow {
    fn into_promoter(self) -> Result<Promoter, PersistenceError> {
        let status = PromoterStatus::from_str(&self.status)
            .map_err(|e| PersistenceError::Other(e.to_string()))?;

        Ok(Promoter {
            promoter_id: self.promoter_id,
            full_name: self.full_name,
            status,
            on_vacation: self.on_vacation != 0,
        })
    }
}

backend_fn! {
/// Retrieves a promoter by ID.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `promoter_id` - The promoter ID
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the promoter is not found.
pub fn get_promoter(
    conn: &mut _,
    promoter_id: i64,
) -> Result<Option<Promoter>, PersistenceError> {
    debug!("Looking up promoter by ID: {}", promoter_id);

    let result: Result<PromoterRow, diesel::result::Error> = promoters::table
        .filter(promoters::promoter_id.eq(promoter_id))
        .select(PromoterRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(row.into_promoter()?)),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}

backend_fn! {
/// Retrieves a store by ID.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `store_id` - The store ID
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the store is not found.
pub fn get_store(conn: &mut _, store_id: i64) -> Result<Option<Store>, PersistenceError> {
    debug!("Looking up store by ID: {}", store_id);

    let result: Result<StoreRow, diesel::result::Error> = stores::table
        .filter(stores::store_id.eq(store_id))
        .select(StoreRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(Store {
            store_id: row.store_id,
            store_code: row.store_code,
            store_name: row.store_name,
            is_active: row.is_active != 0,
        })),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}
