// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::Date;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An entity identifier is zero or negative.
    InvalidEntityId {
        /// The field carrying the invalid identifier.
        field: &'static str,
        /// The invalid value.
        value: i64,
    },
    /// A free-text reason field is empty or blank.
    InvalidReason(String),
    /// A promoter status string is not recognized.
    InvalidPromoterStatus(String),
    /// An activity entity kind string is not recognized.
    InvalidEntityKind(String),
    /// Failed to parse a date from a string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// Date arithmetic overflow.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
    /// An end date precedes its start date.
    EndDateBeforeStart {
        /// The interval's start date.
        start: Date,
        /// The offending end date.
        end: Date,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidEntityId { field, value } => {
                write!(f, "Invalid {field}: {value}. Must be a positive identifier")
            }
            Self::InvalidReason(msg) => write!(f, "Invalid reason: {msg}"),
            Self::InvalidPromoterStatus(value) => {
                write!(f, "Unknown promoter status: {value}")
            }
            Self::InvalidEntityKind(value) => write!(f, "Unknown entity kind: {value}"),
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
            Self::EndDateBeforeStart { start, end } => {
                write!(f, "End date {end} precedes start date {start}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
