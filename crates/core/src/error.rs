// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The lifecycle engine's error taxonomy.
//!
//! Every variant carries a machine-readable kind (see
//! [`LifecycleError::kind`]) plus a human-readable message. Validation,
//! not-found, and state errors are cheap pre-checks raised before any
//! transaction; conflict errors are only authoritative when raised from
//! inside the locked transaction; transaction errors surface opaque
//! storage failures after a full rollback.

use promo_track_domain::DomainError;
use promo_track_persistence::PersistenceError;

/// Errors returned by the lifecycle engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecycleError {
    /// A request field is malformed or missing. Detected before any
    /// transaction.
    Validation {
        /// The offending field.
        field: &'static str,
        /// A human-readable description of the problem.
        message: String,
    },
    /// A referenced promoter, store, or assignment does not exist.
    NotFound {
        /// The resource type ("promoter", "store", "assignment").
        resource: &'static str,
        /// The identifier that failed to resolve.
        id: i64,
    },
    /// A referenced entity exists but is not in a state that permits
    /// the operation (inactive promoter, promoter on vacation, inactive
    /// store).
    State {
        /// The resource type.
        resource: &'static str,
        /// The entity's identifier.
        id: i64,
        /// A human-readable description of the refusal.
        message: String,
    },
    /// The operation would violate a timeline invariant. Authoritative
    /// only when detected under lock inside the transaction.
    Conflict {
        /// The violated rule, machine-readable.
        rule: &'static str,
        /// A human-readable description of the conflict.
        message: String,
    },
    /// The underlying store failed; the transaction was rolled back in
    /// full and no mutation is visible.
    Transaction {
        /// A description of the failure.
        message: String,
    },
}

impl LifecycleError {
    /// Returns the machine-readable error kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "validation",
            Self::NotFound { .. } => "not_found",
            Self::State { .. } => "state",
            Self::Conflict { .. } => "conflict",
            Self::Transaction { .. } => "transaction",
        }
    }
}

impl std::fmt::Display for LifecycleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation { field, message } => {
                write!(f, "Invalid value for '{field}': {message}")
            }
            Self::NotFound { resource, id } => {
                write!(f, "{resource} {id} not found")
            }
            Self::State {
                resource,
                id,
                message,
            } => {
                write!(f, "{resource} {id} refused the operation: {message}")
            }
            Self::Conflict { rule, message } => {
                write!(f, "Conflict ({rule}): {message}")
            }
            Self::Transaction { message } => {
                write!(f, "Storage failure (rolled back): {message}")
            }
        }
    }
}

impl std::error::Error for LifecycleError {}

/// Translates a domain validation error into a lifecycle error.
///
/// This translation is explicit and ensures domain errors are not
/// leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> LifecycleError {
    match err {
        DomainError::InvalidEntityId { field, .. } => LifecycleError::Validation {
            field,
            message: err.to_string(),
        },
        DomainError::InvalidReason(message) => LifecycleError::Validation {
            field: "reason",
            message,
        },
        DomainError::DateParseError { .. } | DomainError::DateArithmeticOverflow { .. } => {
            LifecycleError::Validation {
                field: "date",
                message: err.to_string(),
            }
        }
        DomainError::EndDateBeforeStart { .. } => LifecycleError::Validation {
            field: "end_date",
            message: err.to_string(),
        },
        // Status/kind parse failures on stored values are storage
        // corruption, not caller mistakes.
        DomainError::InvalidPromoterStatus(_) | DomainError::InvalidEntityKind(_) => {
            LifecycleError::Transaction {
                message: err.to_string(),
            }
        }
    }
}

/// Translates a persistence error into a lifecycle error.
///
/// Timeline conflicts detected under lock map to `Conflict`; everything
/// the caller cannot act on maps to an opaque `Transaction` error.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> LifecycleError {
    match err {
        PersistenceError::AssignmentNotFound(id) => LifecycleError::NotFound {
            resource: "assignment",
            id,
        },
        PersistenceError::AssignmentNotOpen(_) => LifecycleError::Conflict {
            rule: "assignment_not_open",
            message: err.to_string(),
        },
        PersistenceError::DuplicateOpenAssignment { .. } => LifecycleError::Conflict {
            rule: "duplicate_assignment",
            message: err.to_string(),
        },
        PersistenceError::CompetingOpenAssignment { .. } => LifecycleError::Conflict {
            rule: "competing_open_assignment",
            message: err.to_string(),
        },
        PersistenceError::StartOverlapsOpenAssignment { .. } => LifecycleError::Conflict {
            rule: "start_overlaps_open_assignment",
            message: err.to_string(),
        },
        PersistenceError::OpenCountViolation { .. } => LifecycleError::Conflict {
            rule: "open_assignment_invariant",
            message: err.to_string(),
        },
        PersistenceError::EffectiveDateBeforeStart { .. } => LifecycleError::Validation {
            field: "effective_date",
            message: err.to_string(),
        },
        _ => LifecycleError::Transaction {
            message: err.to_string(),
        },
    }
}
