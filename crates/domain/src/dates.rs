// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Calendar-date parsing and arithmetic.
//!
//! All dates in the system are ISO 8601 calendar dates (`YYYY-MM-DD`),
//! stored as text and compared lexicographically, which matches their
//! chronological order.

use crate::error::DomainError;
use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

/// The canonical wire and storage format for calendar dates.
const DATE_FORMAT: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// Parses an ISO 8601 calendar date (`YYYY-MM-DD`).
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the string is not a valid
/// calendar date.
pub fn parse_date(value: &str) -> Result<Date, DomainError> {
    Date::parse(value, DATE_FORMAT).map_err(|e| DomainError::DateParseError {
        date_string: value.to_string(),
        error: e.to_string(),
    })
}

/// Formats a date in the canonical `YYYY-MM-DD` form.
#[must_use]
pub fn format_date(date: Date) -> String {
    date.to_string()
}

/// Returns the calendar day before `date`.
///
/// # Errors
///
/// Returns `DomainError::DateArithmeticOverflow` if `date` is the first
/// representable day.
pub fn previous_day(date: Date) -> Result<Date, DomainError> {
    date.previous_day()
        .ok_or_else(|| DomainError::DateArithmeticOverflow {
            operation: format!("computing the day before {date}"),
        })
}
