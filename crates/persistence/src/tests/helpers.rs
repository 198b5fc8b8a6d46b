// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shared helpers for persistence tests.
//!
//! All standard tests run against in-memory `SQLite`. The raw insert
//! helper bypasses the lifecycle mutations so tests can fabricate
//! degenerate legacy data (plural open rows, tied start dates) that the
//! lifecycle operations themselves can never produce.

use diesel::prelude::*;
use promo_track_domain::{Promoter, PromoterStatus, Store};
use time::{Date, Month};

use crate::diesel_schema::assignments;
use crate::{BackendConnection, Persistence};

pub fn persistence() -> Persistence {
    Persistence::new_in_memory().unwrap()
}

pub fn date(year: i32, month: u8, day: u8) -> Date {
    Date::from_calendar_date(year, Month::try_from(month).unwrap(), day).unwrap()
}

pub fn seed_promoter(persistence: &mut Persistence, promoter_id: i64) {
    let promoter = Promoter::new(
        promoter_id,
        format!("Promoter {promoter_id}"),
        PromoterStatus::Active,
        false,
    );
    persistence.upsert_promoter(&promoter).unwrap();
}

pub fn seed_store(persistence: &mut Persistence, store_id: i64) {
    let store = Store::new(store_id, &format!("ST-{store_id:04}"), None, true);
    persistence.upsert_store(&store).unwrap();
}

/// Inserts an assignment row directly, bypassing the lifecycle engine.
///
/// Returns the generated assignment ID.
pub fn raw_insert_assignment(
    persistence: &mut Persistence,
    promoter_id: i64,
    store_id: i64,
    start_date: &str,
    end_date: Option<&str>,
    created_at: &str,
) -> i64 {
    match &mut persistence.conn {
        BackendConnection::Sqlite(conn) => {
            diesel::insert_into(assignments::table)
                .values((
                    assignments::promoter_id.eq(promoter_id),
                    assignments::store_id.eq(store_id),
                    assignments::start_date.eq(start_date),
                    assignments::end_date.eq(end_date),
                    assignments::is_active.eq(1),
                    assignments::reason_created.eq("seeded by test"),
                    assignments::created_by.eq(1),
                    assignments::created_at.eq(created_at),
                    assignments::updated_at.eq(created_at),
                ))
                .execute(conn)
                .unwrap();
            crate::backend::sqlite::get_last_insert_rowid(conn).unwrap()
        }
        BackendConnection::Mysql(_) => unreachable!("standard tests run on SQLite"),
    }
}
