// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Promoter, PromoterStatus, Store};
use std::str::FromStr;

#[test]
fn test_promoter_status_round_trips_through_strings() {
    assert_eq!(PromoterStatus::Active.as_str(), "ACTIVE");
    assert_eq!(PromoterStatus::Inactive.as_str(), "INACTIVE");
    assert_eq!(
        PromoterStatus::from_str("ACTIVE").unwrap(),
        PromoterStatus::Active
    );
    assert_eq!(
        PromoterStatus::from_str("INACTIVE").unwrap(),
        PromoterStatus::Inactive
    );
}

#[test]
fn test_promoter_status_rejects_unknown_value() {
    let result = PromoterStatus::from_str("RETIRED");
    assert!(result.is_err());
}

#[test]
fn test_active_promoter_is_eligible() {
    let promoter = Promoter::new(7, String::from("Ana Torres"), PromoterStatus::Active, false);

    assert!(promoter.is_active());
    assert!(promoter.is_transfer_eligible());
}

#[test]
fn test_vacationing_promoter_cannot_be_transfer_target() {
    let promoter = Promoter::new(7, String::from("Ana Torres"), PromoterStatus::Active, true);

    // Vacation blocks transfers but not plain creation.
    assert!(promoter.is_active());
    assert!(!promoter.is_transfer_eligible());
}

#[test]
fn test_inactive_promoter_is_not_eligible() {
    let promoter = Promoter::new(
        7,
        String::from("Ana Torres"),
        PromoterStatus::Inactive,
        false,
    );

    assert!(!promoter.is_active());
    assert!(!promoter.is_transfer_eligible());
}

#[test]
fn test_store_code_is_normalized_to_uppercase() {
    let store = Store::new(3, "mx-0042", None, true);

    assert_eq!(store.store_code, "MX-0042");
}
