// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use promo_track::LifecycleError;

/// API-level errors.
///
/// These are distinct from engine errors and represent the API
/// contract: every variant exposes a machine-readable kind plus a
/// human-readable message, and internal storage failures stay opaque.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// A referenced entity exists but refuses the operation (inactive
    /// promoter, promoter on vacation, inactive store).
    IneligibleEntity {
        /// The type of entity refusing the operation.
        resource_type: String,
        /// A human-readable description of the refusal.
        message: String,
    },
    /// The operation conflicts with the current assignment timeline.
    Conflict {
        /// The violated rule, machine-readable.
        rule: String,
        /// A human-readable description of the conflict.
        message: String,
    },
    /// An internal error occurred. The underlying operation was rolled
    /// back in full.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl ApiError {
    /// Returns the machine-readable error kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => "invalid_input",
            Self::ResourceNotFound { .. } => "not_found",
            Self::IneligibleEntity { .. } => "ineligible",
            Self::Conflict { .. } => "conflict",
            Self::Internal { .. } => "internal",
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::IneligibleEntity {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} refused the operation: {message}")
            }
            Self::Conflict { rule, message } => {
                write!(f, "Conflict ({rule}): {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates an engine error into an API error.
///
/// This translation is explicit and ensures engine errors are not
/// leaked directly.
#[must_use]
pub fn translate_lifecycle_error(err: LifecycleError) -> ApiError {
    match err {
        LifecycleError::Validation { field, message } => ApiError::InvalidInput {
            field: field.to_string(),
            message,
        },
        LifecycleError::NotFound { resource, id } => ApiError::ResourceNotFound {
            resource_type: resource.to_string(),
            message: format!("{resource} {id} does not exist"),
        },
        LifecycleError::State {
            resource,
            id,
            message,
        } => ApiError::IneligibleEntity {
            resource_type: resource.to_string(),
            message: format!("{resource} {id}: {message}"),
        },
        LifecycleError::Conflict { rule, message } => ApiError::Conflict {
            rule: rule.to_string(),
            message,
        },
        LifecycleError::Transaction { message } => ApiError::Internal { message },
    }
}
