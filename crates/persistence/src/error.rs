// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during persistence operations.
///
/// Timeline-conflict variants (`DuplicateOpenAssignment`,
/// `CompetingOpenAssignment`, `OpenCountViolation`) are raised from
/// inside lifecycle transactions, where they are authoritative; raising
/// any of them rolls the whole transaction back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// A database error occurred.
    DatabaseError(String),
    /// Database connection failed.
    DatabaseConnectionFailed(String),
    /// Database migration failed.
    MigrationFailed(String),
    /// Query execution failed.
    QueryFailed(String),
    /// Initialization error.
    InitializationError(String),
    /// Foreign key enforcement is not enabled.
    ForeignKeyEnforcementNotEnabled,
    /// The requested assignment was not found.
    AssignmentNotFound(i64),
    /// The assignment is not open and cannot be transferred.
    AssignmentNotOpen(i64),
    /// An identical open assignment already exists.
    DuplicateOpenAssignment {
        promoter_id: i64,
        store_id: i64,
        start_date: String,
    },
    /// The target promoter already has a competing open assignment.
    CompetingOpenAssignment { promoter_id: i64, store_id: i64 },
    /// A new assignment would start on or before an existing open
    /// assignment's start, so the existing one cannot be closed the day
    /// before.
    StartOverlapsOpenAssignment {
        assignment_id: i64,
        start_date: String,
    },
    /// A committed operation would have left the promoter with a number
    /// of open assignments other than the expected one.
    OpenCountViolation { promoter_id: i64, count: i64 },
    /// The transfer effective date precedes the assignment's start date.
    EffectiveDateBeforeStart {
        assignment_id: i64,
        effective_date: String,
        start_date: String,
    },
    /// A stored date column holds a value that cannot be parsed.
    InvalidStoredDate {
        column: &'static str,
        value: String,
    },
    /// The requested resource was not found.
    NotFound(String),
    /// A general error occurred.
    Other(String),
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DatabaseError(msg) => write!(f, "Database error: {msg}"),
            Self::DatabaseConnectionFailed(msg) => {
                write!(f, "Database connection failed: {msg}")
            }
            Self::MigrationFailed(msg) => write!(f, "Migration failed: {msg}"),
            Self::QueryFailed(msg) => write!(f, "Query failed: {msg}"),
            Self::InitializationError(msg) => write!(f, "Initialization error: {msg}"),
            Self::ForeignKeyEnforcementNotEnabled => {
                write!(f, "Foreign key enforcement is not enabled")
            }
            Self::AssignmentNotFound(id) => write!(f, "Assignment not found: {id}"),
            Self::AssignmentNotOpen(id) => {
                write!(f, "Assignment {id} is not open")
            }
            Self::DuplicateOpenAssignment {
                promoter_id,
                store_id,
                start_date,
            } => {
                write!(
                    f,
                    "Promoter {promoter_id} already has an open assignment at store {store_id} starting {start_date}"
                )
            }
            Self::CompetingOpenAssignment {
                promoter_id,
                store_id,
            } => {
                write!(
                    f,
                    "Promoter {promoter_id} already has a competing open assignment at store {store_id}"
                )
            }
            Self::StartOverlapsOpenAssignment {
                assignment_id,
                start_date,
            } => {
                write!(
                    f,
                    "Open assignment {assignment_id} starting {start_date} cannot be superseded by an earlier or same-day start"
                )
            }
            Self::OpenCountViolation { promoter_id, count } => {
                write!(
                    f,
                    "Promoter {promoter_id} would be left with {count} open assignments"
                )
            }
            Self::EffectiveDateBeforeStart {
                assignment_id,
                effective_date,
                start_date,
            } => {
                write!(
                    f,
                    "Effective date {effective_date} precedes the start date {start_date} of assignment {assignment_id}"
                )
            }
            Self::InvalidStoredDate { column, value } => {
                write!(f, "Stored date in column '{column}' is not a valid date: {value}")
            }
            Self::NotFound(msg) => write!(f, "Not found: {msg}"),
            Self::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<diesel::result::Error> for PersistenceError {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::NotFound => Self::NotFound("Record not found".to_string()),
            _ => Self::DatabaseError(err.to_string()),
        }
    }
}

impl From<diesel::ConnectionError> for PersistenceError {
    fn from(err: diesel::ConnectionError) -> Self {
        Self::DatabaseConnectionFailed(err.to_string())
    }
}
