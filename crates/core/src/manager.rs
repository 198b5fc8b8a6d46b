// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The assignment lifecycle manager.
//!
//! The manager is the single entry point for mutating the assignment
//! timeline. Each operation runs in three stages:
//!
//! 1. Cheap pre-checks (field validation, existence, master-data
//!    eligibility) that short-circuit before any lock is taken. These
//!    are advisory for conflicts: the persistence layer re-verifies
//!    every conflict condition under lock inside the transaction.
//! 2. One transactional mutation through the persistence layer. Any
//!    failure rolls back in full; no operation partially commits.
//! 3. A best-effort activity notification after commit. Failures here
//!    are logged and swallowed; they never become operation failures.

use promo_track_activity::{ActivityRecord, EntityKind};
use promo_track_domain::{previous_day, validate_date_order, validate_entity_id, validate_reason};
use promo_track_persistence::{
    CreateAssignmentOutcome, FinalizeAssignmentOutcome, Persistence, TransferAssignmentOutcome,
};
use time::Date;
use tracing::warn;

use crate::context::RequestContext;
use crate::error::{LifecycleError, translate_domain_error, translate_persistence_error};

/// Parameters for a transfer operation.
///
/// Covers both "same promoter, different store" and "different
/// promoter" handoffs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferRequest {
    /// The open assignment being handed over.
    pub old_assignment_id: i64,
    /// The promoter receiving the new assignment.
    pub target_promoter_id: i64,
    /// The store hosting the new assignment.
    pub target_store_id: i64,
    /// The handoff date: the old assignment stays valid through it, the
    /// new one opens on it.
    pub effective_date: Date,
    /// Free-text reason, recorded on both halves.
    pub reason: String,
}

/// The core of the lifecycle engine: create, finalize, and transfer
/// operations over one promoter-assignment timeline store.
///
/// The manager borrows the persistence adapter for the scope of a
/// request; handlers construct one per call. All cross-request
/// coordination happens through the store's transactions, never through
/// in-process state.
pub struct AssignmentLifecycleManager<'a> {
    persistence: &'a mut Persistence,
}

impl<'a> AssignmentLifecycleManager<'a> {
    /// Creates a manager over the given persistence adapter.
    pub fn new(persistence: &'a mut Persistence) -> Self {
        Self { persistence }
    }

    /// Creates a new open assignment for a promoter at a store.
    ///
    /// Any other open assignment the promoter holds is closed at
    /// `start_date - 1 day`; afterwards the promoter has exactly one
    /// open assignment, the newly created one.
    ///
    /// # Arguments
    ///
    /// * `ctx` - The request context carrying the acting user
    /// * `promoter_id` - The promoter to assign; must exist and be `ACTIVE`
    /// * `store_id` - The hosting store; must exist and be active
    /// * `start_date` - First day the assignment is in effect
    /// * `reason` - Free-text creation reason
    ///
    /// # Errors
    ///
    /// Returns a validation, not-found, state, conflict, or transaction
    /// error per the engine taxonomy. No mutation is visible on error.
    pub fn create_assignment(
        &mut self,
        ctx: &RequestContext,
        promoter_id: i64,
        store_id: i64,
        start_date: Date,
        reason: &str,
    ) -> Result<CreateAssignmentOutcome, LifecycleError> {
        validate_entity_id("promoter_id", promoter_id).map_err(translate_domain_error)?;
        validate_entity_id("store_id", store_id).map_err(translate_domain_error)?;
        validate_reason(reason).map_err(translate_domain_error)?;
        // The supersede cutoff is start_date - 1 day; it must exist.
        previous_day(start_date).map_err(translate_domain_error)?;

        let promoter = self
            .persistence
            .get_promoter(promoter_id)
            .map_err(translate_persistence_error)?
            .ok_or(LifecycleError::NotFound {
                resource: "promoter",
                id: promoter_id,
            })?;
        if !promoter.is_active() {
            return Err(LifecycleError::State {
                resource: "promoter",
                id: promoter_id,
                message: String::from("promoter is INACTIVE"),
            });
        }

        self.require_active_store(store_id)?;

        let outcome = self
            .persistence
            .create_assignment(promoter_id, store_id, start_date, reason, ctx.acting_user())
            .map_err(translate_persistence_error)?;

        let superseded_ids: Vec<i64> = outcome
            .superseded
            .iter()
            .filter_map(|a| a.assignment_id)
            .collect();
        self.note_activity(ActivityRecord::new(
            EntityKind::Assignment,
            String::from("CreateAssignment"),
            outcome.created.assignment_id.unwrap_or_default(),
            ctx.acting_user(),
            Some(serde_json::json!({ "superseded": superseded_ids }).to_string()),
        ));

        Ok(outcome)
    }

    /// Hard-deletes an assignment, restoring its chronological
    /// predecessor to the open position where that keeps the timeline
    /// consistent.
    ///
    /// A promoter left with zero assignments is a valid terminal state.
    ///
    /// # Arguments
    ///
    /// * `ctx` - The request context carrying the acting user
    /// * `assignment_id` - The assignment to finalize
    ///
    /// # Errors
    ///
    /// Returns a validation, not-found, or transaction error. No
    /// mutation is visible on error.
    pub fn finalize_assignment(
        &mut self,
        ctx: &RequestContext,
        assignment_id: i64,
    ) -> Result<FinalizeAssignmentOutcome, LifecycleError> {
        validate_entity_id("assignment_id", assignment_id).map_err(translate_domain_error)?;

        // Cheap existence pre-check; re-verified inside the transaction.
        self.persistence
            .get_assignment(assignment_id)
            .map_err(translate_persistence_error)?
            .ok_or(LifecycleError::NotFound {
                resource: "assignment",
                id: assignment_id,
            })?;

        let outcome = self
            .persistence
            .finalize_assignment(assignment_id, ctx.acting_user())
            .map_err(translate_persistence_error)?;

        // One logical audit entry covering both the deletion and the
        // reactivation.
        let reactivated_id = outcome.reactivated.as_ref().and_then(|a| a.assignment_id);
        self.note_activity(ActivityRecord::new(
            EntityKind::Assignment,
            String::from("FinalizeAssignment"),
            outcome.deleted_id,
            ctx.acting_user(),
            Some(
                serde_json::json!({
                    "deleted_id": outcome.deleted_id,
                    "reactivated_id": reactivated_id,
                })
                .to_string(),
            ),
        ));

        Ok(outcome)
    }

    /// Atomically closes one assignment and opens another.
    ///
    /// # Arguments
    ///
    /// * `ctx` - The request context carrying the acting user
    /// * `request` - The transfer parameters
    ///
    /// # Errors
    ///
    /// Returns a validation, not-found, state, conflict, or transaction
    /// error per the engine taxonomy. On error the whole transfer rolls
    /// back; neither the close nor the open is visible.
    pub fn transfer_assignment(
        &mut self,
        ctx: &RequestContext,
        request: &TransferRequest,
    ) -> Result<TransferAssignmentOutcome, LifecycleError> {
        validate_entity_id("old_assignment_id", request.old_assignment_id)
            .map_err(translate_domain_error)?;
        validate_entity_id("target_promoter_id", request.target_promoter_id)
            .map_err(translate_domain_error)?;
        validate_entity_id("target_store_id", request.target_store_id)
            .map_err(translate_domain_error)?;
        validate_reason(&request.reason).map_err(translate_domain_error)?;

        let old = self
            .persistence
            .get_assignment(request.old_assignment_id)
            .map_err(translate_persistence_error)?
            .ok_or(LifecycleError::NotFound {
                resource: "assignment",
                id: request.old_assignment_id,
            })?;
        if !old.is_open() {
            return Err(LifecycleError::Conflict {
                rule: "assignment_not_open",
                message: format!("Assignment {} is not open", request.old_assignment_id),
            });
        }
        validate_date_order(old.start_date, request.effective_date).map_err(|_| {
            LifecycleError::Validation {
                field: "effective_date",
                message: format!(
                    "Effective date {} precedes the assignment's start date {}",
                    request.effective_date, old.start_date
                ),
            }
        })?;

        let target = self
            .persistence
            .get_promoter(request.target_promoter_id)
            .map_err(translate_persistence_error)?
            .ok_or(LifecycleError::NotFound {
                resource: "promoter",
                id: request.target_promoter_id,
            })?;
        if !target.is_active() {
            return Err(LifecycleError::State {
                resource: "promoter",
                id: request.target_promoter_id,
                message: String::from("promoter is INACTIVE"),
            });
        }
        if target.on_vacation {
            return Err(LifecycleError::State {
                resource: "promoter",
                id: request.target_promoter_id,
                message: String::from("promoter is on vacation"),
            });
        }

        self.require_active_store(request.target_store_id)?;

        let outcome = self
            .persistence
            .transfer_assignment(
                request.old_assignment_id,
                request.target_promoter_id,
                request.target_store_id,
                request.effective_date,
                &request.reason,
                ctx.acting_user(),
            )
            .map_err(translate_persistence_error)?;

        self.note_activity(ActivityRecord::new(
            EntityKind::Assignment,
            String::from("TransferAssignment"),
            request.old_assignment_id,
            ctx.acting_user(),
            Some(
                serde_json::json!({
                    "closed_id": outcome.closed.assignment_id,
                    "opened_id": outcome.opened.assignment_id,
                    "target_promoter_id": request.target_promoter_id,
                    "target_store_id": request.target_store_id,
                })
                .to_string(),
            ),
        ));

        Ok(outcome)
    }

    fn require_active_store(&mut self, store_id: i64) -> Result<(), LifecycleError> {
        let store = self
            .persistence
            .get_store(store_id)
            .map_err(translate_persistence_error)?
            .ok_or(LifecycleError::NotFound {
                resource: "store",
                id: store_id,
            })?;
        if !store.is_active {
            return Err(LifecycleError::State {
                resource: "store",
                id: store_id,
                message: String::from("store is inactive"),
            });
        }
        Ok(())
    }

    /// Records an activity entry, swallowing failures.
    ///
    /// Activity delivery is fire-and-forget: a lost entry must never
    /// roll back or fail a committed lifecycle operation.
    fn note_activity(&mut self, record: ActivityRecord) {
        if let Err(err) = self.persistence.record_activity(&record) {
            warn!(
                action = %record.action,
                entity_id = record.entity_id,
                error = %err,
                "Failed to record activity entry; operation already committed"
            );
        }
    }
}
