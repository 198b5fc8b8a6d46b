// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing and read-only operations.
//!
//! Handlers parse and validate request payloads, run the lifecycle
//! manager (or, for reads, the history projection), and translate
//! results into response DTOs. Authorization happened before a handler
//! is called: the [`RequestContext`] is the proof.

use promo_track::{
    AssignmentLifecycleManager, HistoryProjection, RequestContext, TransferRequest,
    translate_persistence_error,
};
use promo_track_domain::parse_date;
use promo_track_persistence::Persistence;
use time::Date;
use tracing::info;

use crate::error::{ApiError, translate_lifecycle_error};
use crate::request_response::{
    ActivityEntryInfo, AssignmentInfo, CreateAssignmentRequest, CreateAssignmentResponse,
    FinalizeAssignmentRequest, FinalizeAssignmentResponse, GetActivityResponse,
    GetCurrentAssignmentResponse, GetPromoterHistoryResponse, GetStoreHistoryResponse,
    GetStoreRosterResponse, TransferAssignmentRequest, TransferAssignmentResponse,
};

/// Parses a request date field at the boundary.
fn parse_request_date(field: &'static str, value: &str) -> Result<Date, ApiError> {
    parse_date(value).map_err(|e| ApiError::InvalidInput {
        field: field.to_string(),
        message: e.to_string(),
    })
}

/// Creates a new assignment via the API boundary.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `ctx` - The pre-authorized request context
/// * `request` - The API request
///
/// # Errors
///
/// Returns an error if the request is invalid, a referenced entity is
/// missing or ineligible, or the timeline rejects the creation.
pub fn create_assignment(
    persistence: &mut Persistence,
    ctx: &RequestContext,
    request: &CreateAssignmentRequest,
) -> Result<CreateAssignmentResponse, ApiError> {
    let start_date = parse_request_date("start_date", &request.start_date)?;

    let outcome = AssignmentLifecycleManager::new(persistence)
        .create_assignment(
            ctx,
            request.promoter_id,
            request.store_id,
            start_date,
            &request.reason,
        )
        .map_err(translate_lifecycle_error)?;

    info!(
        promoter_id = request.promoter_id,
        store_id = request.store_id,
        "Assignment created via API"
    );

    Ok(CreateAssignmentResponse {
        message: format!(
            "Promoter {} assigned to store {} from {}",
            request.promoter_id, request.store_id, start_date
        ),
        assignment: AssignmentInfo::from(outcome.created),
        superseded: outcome
            .superseded
            .into_iter()
            .map(AssignmentInfo::from)
            .collect(),
    })
}

/// Finalizes an assignment via the API boundary.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `ctx` - The pre-authorized request context
/// * `request` - The API request
///
/// # Errors
///
/// Returns an error if the assignment does not exist or the store
/// fails.
pub fn finalize_assignment(
    persistence: &mut Persistence,
    ctx: &RequestContext,
    request: &FinalizeAssignmentRequest,
) -> Result<FinalizeAssignmentResponse, ApiError> {
    let outcome = AssignmentLifecycleManager::new(persistence)
        .finalize_assignment(ctx, request.assignment_id)
        .map_err(translate_lifecycle_error)?;

    let message = outcome.reactivated.as_ref().map_or_else(
        || format!("Assignment {} deleted", outcome.deleted_id),
        |reactivated| {
            format!(
                "Assignment {} deleted; assignment {} reactivated",
                outcome.deleted_id,
                reactivated.assignment_id.unwrap_or_default()
            )
        },
    );

    Ok(FinalizeAssignmentResponse {
        deleted_id: outcome.deleted_id,
        reactivated: outcome.reactivated.map(AssignmentInfo::from),
        message,
    })
}

/// Transfers an assignment via the API boundary.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `ctx` - The pre-authorized request context
/// * `request` - The API request
///
/// # Errors
///
/// Returns an error on any validation, eligibility, or conflict
/// failure; the transfer is all-or-nothing.
pub fn transfer_assignment(
    persistence: &mut Persistence,
    ctx: &RequestContext,
    request: &TransferAssignmentRequest,
) -> Result<TransferAssignmentResponse, ApiError> {
    let effective_date = parse_request_date("effective_date", &request.effective_date)?;

    let outcome = AssignmentLifecycleManager::new(persistence)
        .transfer_assignment(
            ctx,
            &TransferRequest {
                old_assignment_id: request.old_assignment_id,
                target_promoter_id: request.target_promoter_id,
                target_store_id: request.target_store_id,
                effective_date,
                reason: request.reason.clone(),
            },
        )
        .map_err(translate_lifecycle_error)?;

    info!(
        old_assignment_id = request.old_assignment_id,
        target_promoter_id = request.target_promoter_id,
        target_store_id = request.target_store_id,
        "Assignment transferred via API"
    );

    Ok(TransferAssignmentResponse {
        message: format!(
            "Assignment {} closed; promoter {} now at store {} from {}",
            request.old_assignment_id,
            request.target_promoter_id,
            request.target_store_id,
            effective_date
        ),
        closed: AssignmentInfo::from(outcome.closed),
        opened: AssignmentInfo::from(outcome.opened),
    })
}

/// Returns a promoter's full assignment history.
///
/// # Errors
///
/// Returns an error if the id is invalid or the store fails.
pub fn get_promoter_history(
    persistence: &mut Persistence,
    promoter_id: i64,
) -> Result<GetPromoterHistoryResponse, ApiError> {
    let assignments = HistoryProjection::new(persistence)
        .promoter_timeline(promoter_id)
        .map_err(translate_lifecycle_error)?;

    Ok(GetPromoterHistoryResponse {
        promoter_id,
        assignments: assignments.into_iter().map(AssignmentInfo::from).collect(),
    })
}

/// Returns a store's full assignment history.
///
/// # Errors
///
/// Returns an error if the id is invalid or the store fails.
pub fn get_store_history(
    persistence: &mut Persistence,
    store_id: i64,
) -> Result<GetStoreHistoryResponse, ApiError> {
    let assignments = HistoryProjection::new(persistence)
        .store_timeline(store_id)
        .map_err(translate_lifecycle_error)?;

    Ok(GetStoreHistoryResponse {
        store_id,
        assignments: assignments.into_iter().map(AssignmentInfo::from).collect(),
    })
}

/// Returns a promoter's current open assignment, if any.
///
/// # Errors
///
/// Returns an error if the id is invalid or the store fails.
pub fn get_current_assignment(
    persistence: &mut Persistence,
    promoter_id: i64,
) -> Result<GetCurrentAssignmentResponse, ApiError> {
    let assignment = HistoryProjection::new(persistence)
        .current_assignment(promoter_id)
        .map_err(translate_lifecycle_error)?;

    Ok(GetCurrentAssignmentResponse {
        promoter_id,
        assignment: assignment.map(AssignmentInfo::from),
    })
}

/// Returns a store's currently deployed promoters.
///
/// # Errors
///
/// Returns an error if the id is invalid or the store fails.
pub fn get_store_roster(
    persistence: &mut Persistence,
    store_id: i64,
) -> Result<GetStoreRosterResponse, ApiError> {
    let assignments = HistoryProjection::new(persistence)
        .store_roster(store_id)
        .map_err(translate_lifecycle_error)?;

    Ok(GetStoreRosterResponse {
        store_id,
        assignments: assignments.into_iter().map(AssignmentInfo::from).collect(),
    })
}

/// Returns the activity entries recorded for one assignment.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn get_assignment_activity(
    persistence: &mut Persistence,
    assignment_id: i64,
) -> Result<GetActivityResponse, ApiError> {
    let entries = persistence
        .activity_for_entity("Assignment", assignment_id)
        .map_err(|e| translate_lifecycle_error(translate_persistence_error(e)))?;

    Ok(GetActivityResponse {
        entries: entries.into_iter().map(ActivityEntryInfo::from).collect(),
    })
}

/// Returns the most recent activity entries across all entities.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn get_recent_activity(
    persistence: &mut Persistence,
    limit: i64,
) -> Result<GetActivityResponse, ApiError> {
    let entries = persistence
        .recent_activity(limit)
        .map_err(|e| translate_lifecycle_error(translate_persistence_error(e)))?;

    Ok(GetActivityResponse {
        entries: entries.into_iter().map(ActivityEntryInfo::from).collect(),
    })
}
