// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use promo_track_domain::DomainError;
use std::str::FromStr;

/// The kind of entity an activity entry refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// An assignment row on the timeline.
    Assignment,
    /// A promoter master-data row.
    Promoter,
    /// A store master-data row.
    Store,
}

impl EntityKind {
    /// Converts this entity kind to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Assignment => "Assignment",
            Self::Promoter => "Promoter",
            Self::Store => "Store",
        }
    }
}

impl FromStr for EntityKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Assignment" => Ok(Self::Assignment),
            "Promoter" => Ok(Self::Promoter),
            "Store" => Ok(Self::Store),
            _ => Err(DomainError::InvalidEntityKind(s.to_string())),
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A best-effort notification of a completed lifecycle mutation.
///
/// Activity records are written after a lifecycle transaction commits
/// and are never part of its atomicity contract: a record may be lost
/// on failure, a lifecycle mutation may not. Once created, a record is
/// immutable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityRecord {
    /// The kind of entity the mutation touched.
    pub entity_kind: EntityKind,
    /// The operation that completed (e.g., "`CreateAssignment`").
    pub action: String,
    /// The identifier of the primary entity the mutation touched.
    pub entity_id: i64,
    /// The acting user supplied by the caller (opaque to this engine).
    pub acting_user: i64,
    /// Optional structured detail payload (JSON).
    pub detail: Option<String>,
}

impl ActivityRecord {
    /// Creates a new `ActivityRecord`.
    ///
    /// # Arguments
    ///
    /// * `entity_kind` - The kind of entity the mutation touched
    /// * `action` - The operation that completed
    /// * `entity_id` - The primary entity's identifier
    /// * `acting_user` - The acting user id
    /// * `detail` - Optional structured detail payload
    #[must_use]
    pub const fn new(
        entity_kind: EntityKind,
        action: String,
        entity_id: i64,
        acting_user: i64,
        detail: Option<String>,
    ) -> Self {
        Self {
            entity_kind,
            action,
            entity_id,
            acting_user,
            detail,
        }
    }
}
