// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shared helpers for engine tests.

use crate::RequestContext;
use promo_track_domain::{Promoter, PromoterStatus, Store};
use promo_track_persistence::Persistence;
use time::{Date, Month};

/// The acting user used throughout the engine tests.
pub const OPERATOR: i64 = 9;

pub fn persistence() -> Persistence {
    Persistence::new_in_memory().unwrap()
}

pub fn ctx() -> RequestContext {
    RequestContext::authorized(OPERATOR).unwrap()
}

pub fn date(year: i32, month: u8, day: u8) -> Date {
    Date::from_calendar_date(year, Month::try_from(month).unwrap(), day).unwrap()
}

pub fn seed_promoter(persistence: &mut Persistence, promoter_id: i64) {
    seed_promoter_with(persistence, promoter_id, PromoterStatus::Active, false);
}

pub fn seed_promoter_with(
    persistence: &mut Persistence,
    promoter_id: i64,
    status: PromoterStatus,
    on_vacation: bool,
) {
    let promoter = Promoter::new(
        promoter_id,
        format!("Promoter {promoter_id}"),
        status,
        on_vacation,
    );
    persistence.upsert_promoter(&promoter).unwrap();
}

pub fn seed_store(persistence: &mut Persistence, store_id: i64) {
    seed_store_with(persistence, store_id, true);
}

pub fn seed_store_with(persistence: &mut Persistence, store_id: i64, is_active: bool) {
    let store = Store::new(store_id, &format!("ST-{store_id:04}"), None, is_active);
    persistence.upsert_store(&store).unwrap();
}
