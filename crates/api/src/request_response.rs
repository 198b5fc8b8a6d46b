// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Requests carry dates as ISO 8601 strings and are validated at the
//! boundary before reaching the lifecycle manager; responses carry
//! typed dates.

use promo_track_domain::Assignment;
use promo_track_persistence::ActivityEntry;
use time::Date;

/// A persisted assignment as exposed by the API.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AssignmentInfo {
    /// The canonical assignment identifier.
    pub assignment_id: i64,
    /// The assigned promoter.
    pub promoter_id: i64,
    /// The hosting store.
    pub store_id: i64,
    /// First day the assignment is in effect (inclusive).
    pub start_date: Date,
    /// Last day the assignment is in effect (inclusive), if closed.
    pub end_date: Option<Date>,
    /// Logical activation flag.
    pub is_active: bool,
    /// Free-text creation reason.
    pub reason_created: String,
    /// Free-text reason of the most recent change.
    pub reason_changed: Option<String>,
    /// Acting user who created the assignment.
    pub created_by: i64,
    /// Acting user who last changed the assignment.
    pub changed_by: Option<i64>,
    /// Creation timestamp.
    pub created_at: String,
    /// Last-update timestamp.
    pub updated_at: String,
}

impl From<Assignment> for AssignmentInfo {
    fn from(assignment: Assignment) -> Self {
        Self {
            assignment_id: assignment.assignment_id.unwrap_or_default(),
            promoter_id: assignment.promoter_id,
            store_id: assignment.store_id,
            start_date: assignment.start_date,
            end_date: assignment.end_date,
            is_active: assignment.is_active,
            reason_created: assignment.reason_created,
            reason_changed: assignment.reason_changed,
            created_by: assignment.created_by,
            changed_by: assignment.changed_by,
            created_at: assignment.created_at,
            updated_at: assignment.updated_at,
        }
    }
}

/// API request to create a new assignment.
///
/// This DTO is distinct from domain types and represents the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateAssignmentRequest {
    /// The promoter to assign.
    pub promoter_id: i64,
    /// The hosting store.
    pub store_id: i64,
    /// First day the assignment is in effect (ISO 8601).
    pub start_date: String,
    /// Free-text creation reason.
    pub reason: String,
}

/// API response for a successful assignment creation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CreateAssignmentResponse {
    /// The newly created open assignment.
    pub assignment: AssignmentInfo,
    /// Previously open assignments closed by this creation.
    pub superseded: Vec<AssignmentInfo>,
    /// A success message.
    pub message: String,
}

/// API request to finalize (delete-with-reactivation) an assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalizeAssignmentRequest {
    /// The assignment to finalize.
    pub assignment_id: i64,
}

/// API response for a successful finalization.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FinalizeAssignmentResponse {
    /// The hard-deleted assignment's ID.
    pub deleted_id: i64,
    /// The reactivated predecessor, if one was restored.
    pub reactivated: Option<AssignmentInfo>,
    /// A success message.
    pub message: String,
}

/// API request to transfer an assignment.
///
/// Covers both "same promoter, different store" and "different
/// promoter" handoffs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferAssignmentRequest {
    /// The open assignment being handed over.
    pub old_assignment_id: i64,
    /// The promoter receiving the new assignment.
    pub target_promoter_id: i64,
    /// The store hosting the new assignment.
    pub target_store_id: i64,
    /// The handoff date (ISO 8601).
    pub effective_date: String,
    /// Free-text reason, recorded on both halves.
    pub reason: String,
}

/// API response for a successful transfer.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TransferAssignmentResponse {
    /// The old assignment, now closed.
    pub closed: AssignmentInfo,
    /// The new open assignment.
    pub opened: AssignmentInfo,
    /// A success message.
    pub message: String,
}

/// API response for a promoter's assignment history.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GetPromoterHistoryResponse {
    /// The promoter the history belongs to.
    pub promoter_id: i64,
    /// The promoter's assignments, oldest first.
    pub assignments: Vec<AssignmentInfo>,
}

/// API response for a store's assignment history.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GetStoreHistoryResponse {
    /// The store the history belongs to.
    pub store_id: i64,
    /// The store's assignments, oldest first.
    pub assignments: Vec<AssignmentInfo>,
}

/// API response for a promoter's current assignment.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GetCurrentAssignmentResponse {
    /// The promoter queried.
    pub promoter_id: i64,
    /// The open assignment, if any.
    pub assignment: Option<AssignmentInfo>,
}

/// API response for a store's currently deployed promoters.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GetStoreRosterResponse {
    /// The store queried.
    pub store_id: i64,
    /// The store's open assignments.
    pub assignments: Vec<AssignmentInfo>,
}

/// A persisted activity entry as exposed by the API.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ActivityEntryInfo {
    /// The entry's identifier.
    pub activity_id: i64,
    /// The kind of entity the entry refers to.
    pub entity_kind: String,
    /// The recorded operation.
    pub action: String,
    /// The primary entity's identifier.
    pub entity_id: i64,
    /// The acting user.
    pub acting_user: i64,
    /// Optional structured detail payload (JSON).
    pub detail: Option<String>,
    /// When the entry was recorded.
    pub created_at: String,
}

impl From<ActivityEntry> for ActivityEntryInfo {
    fn from(entry: ActivityEntry) -> Self {
        Self {
            activity_id: entry.activity_id,
            entity_kind: entry.entity_kind,
            action: entry.action,
            entity_id: entry.entity_id,
            acting_user: entry.acting_user,
            detail: entry.detail,
            created_at: entry.created_at,
        }
    }
}

/// API response carrying activity entries.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GetActivityResponse {
    /// The matching entries.
    pub entries: Vec<ActivityEntryInfo>,
}
