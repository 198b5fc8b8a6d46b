// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Date;

/// Represents the master-data status of a promoter.
///
/// Promoter master data is owned by an external collaborator; the
/// lifecycle engine only reads it to validate eligibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PromoterStatus {
    /// The promoter may receive assignments.
    #[default]
    #[serde(rename = "ACTIVE")]
    Active,
    /// The promoter is deactivated and may not receive assignments.
    #[serde(rename = "INACTIVE")]
    Inactive,
}

impl FromStr for PromoterStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ACTIVE" => Ok(Self::Active),
            "INACTIVE" => Ok(Self::Inactive),
            _ => Err(DomainError::InvalidPromoterStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for PromoterStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl PromoterStatus {
    /// Converts this status to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Inactive => "INACTIVE",
        }
    }
}

/// Represents a field promoter.
///
/// The lifecycle engine never mutates promoter rows beyond mirroring
/// them in from the external master source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Promoter {
    /// Canonical identifier, assigned by the external master source.
    pub promoter_id: i64,
    /// The promoter's display name (informational, not unique).
    pub full_name: String,
    /// Master-data status.
    pub status: PromoterStatus,
    /// Whether the promoter is currently on vacation.
    /// Vacation blocks transfers but not plain creation.
    pub on_vacation: bool,
}

impl Promoter {
    /// Creates a new `Promoter`.
    #[must_use]
    pub const fn new(
        promoter_id: i64,
        full_name: String,
        status: PromoterStatus,
        on_vacation: bool,
    ) -> Self {
        Self {
            promoter_id,
            full_name,
            status,
            on_vacation,
        }
    }

    /// Returns whether the promoter is eligible to receive a new assignment.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == PromoterStatus::Active
    }

    /// Returns whether the promoter is eligible to be the target of a transfer.
    ///
    /// Transfers additionally require the promoter not to be on vacation.
    #[must_use]
    pub fn is_transfer_eligible(&self) -> bool {
        self.is_active() && !self.on_vacation
    }
}

/// Represents a retail store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    /// Canonical identifier, assigned by the external master source.
    pub store_id: i64,
    /// The store code (e.g., "MX-0042"). Normalized to uppercase.
    pub store_code: String,
    /// Optional store name for additional context.
    pub store_name: Option<String>,
    /// Whether the store may host promoters.
    pub is_active: bool,
}

impl Store {
    /// Creates a new `Store`.
    ///
    /// Store codes are normalized to uppercase to ensure case-insensitive
    /// uniqueness.
    #[must_use]
    pub fn new(store_id: i64, store_code: &str, store_name: Option<String>, is_active: bool) -> Self {
        Self {
            store_id,
            store_code: store_code.to_uppercase(),
            store_name,
            is_active,
        }
    }
}

/// A time-bounded link between a promoter and a store.
///
/// `end_date = None` means the assignment is open (currently in effect);
/// a non-null `end_date` means it is closed as of that date, inclusive.
/// `is_active` is an independent logical flag: for invariant purposes,
/// "currently open" means `is_active && end_date.is_none()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    /// Canonical identifier. `None` indicates the assignment has not
    /// been persisted yet.
    pub assignment_id: Option<i64>,
    /// The assigned promoter.
    pub promoter_id: i64,
    /// The hosting store.
    pub store_id: i64,
    /// First day the assignment is in effect (inclusive, immutable).
    pub start_date: Date,
    /// Last day the assignment is in effect (inclusive), or `None` while open.
    pub end_date: Option<Date>,
    /// Logical activation flag.
    pub is_active: bool,
    /// Free-text audit field recorded at creation.
    pub reason_created: String,
    /// Free-text audit field recorded on the most recent change.
    pub reason_changed: Option<String>,
    /// Acting user who created the assignment (opaque to this engine).
    pub created_by: i64,
    /// Acting user who last changed the assignment.
    pub changed_by: Option<i64>,
    /// Creation timestamp, set by the store.
    pub created_at: String,
    /// Last-update timestamp, set by the store.
    pub updated_at: String,
}

impl Assignment {
    /// Returns whether this assignment is currently in effect.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.is_active && self.end_date.is_none()
    }

    /// Returns whether this assignment is closed (has an end date).
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        self.end_date.is_some()
    }
}
