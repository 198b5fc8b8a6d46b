// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    DomainError, parse_date, previous_day, validate_date_order, validate_entity_id,
    validate_reason,
};
use time::{Date, Month};

fn date(year: i32, month: Month, day: u8) -> Date {
    Date::from_calendar_date(year, month, day).unwrap()
}

#[test]
fn test_validate_entity_id_accepts_positive() {
    assert!(validate_entity_id("promoter_id", 1).is_ok());
    assert!(validate_entity_id("promoter_id", i64::MAX).is_ok());
}

#[test]
fn test_validate_entity_id_rejects_zero_and_negative() {
    assert!(matches!(
        validate_entity_id("promoter_id", 0).unwrap_err(),
        DomainError::InvalidEntityId {
            field: "promoter_id",
            value: 0
        }
    ));
    assert!(validate_entity_id("store_id", -4).is_err());
}

#[test]
fn test_validate_reason_rejects_blank() {
    assert!(validate_reason("seasonal campaign").is_ok());
    assert!(validate_reason("").is_err());
    assert!(validate_reason("   ").is_err());
}

#[test]
fn test_parse_date_accepts_iso_calendar_dates() {
    let parsed = parse_date("2024-02-01").unwrap();
    assert_eq!(parsed, date(2024, Month::February, 1));
}

#[test]
fn test_parse_date_rejects_malformed_input() {
    assert!(parse_date("01/02/2024").is_err());
    assert!(parse_date("2024-13-01").is_err());
    assert!(parse_date("not a date").is_err());
}

#[test]
fn test_parse_date_rejects_impossible_day() {
    let result = parse_date("2023-02-29");
    assert!(matches!(
        result.unwrap_err(),
        DomainError::DateParseError { .. }
    ));
}

#[test]
fn test_previous_day_crosses_month_boundary() {
    let day = previous_day(date(2024, Month::February, 1)).unwrap();
    assert_eq!(day, date(2024, Month::January, 31));
}

#[test]
fn test_previous_day_crosses_year_boundary() {
    let day = previous_day(date(2024, Month::January, 1)).unwrap();
    assert_eq!(day, date(2023, Month::December, 31));
}

#[test]
fn test_validate_date_order_accepts_equal_dates() {
    let d = date(2024, Month::June, 15);
    assert!(validate_date_order(d, d).is_ok());
}

#[test]
fn test_validate_date_order_rejects_inverted_interval() {
    let start = date(2024, Month::June, 15);
    let end = date(2024, Month::June, 14);
    assert!(matches!(
        validate_date_order(start, end).unwrap_err(),
        DomainError::EndDateBeforeStart { .. }
    ));
}
