// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary layer for the PromoTrack deployment system.
//!
//! This crate translates typed request structures into lifecycle engine
//! calls and engine results back into response structures, validating
//! at the boundary before anything reaches the manager. It carries no
//! transport: HTTP framing, sessions, and authentication live outside
//! this workspace, and callers arrive here with an already-resolved
//! [`promo_track::RequestContext`].

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{ApiError, translate_lifecycle_error};
pub use handlers::{
    create_assignment, finalize_assignment, get_assignment_activity, get_current_assignment,
    get_promoter_history, get_recent_activity, get_store_history, get_store_roster,
    transfer_assignment,
};
pub use request_response::{
    ActivityEntryInfo, AssignmentInfo, CreateAssignmentRequest, CreateAssignmentResponse,
    FinalizeAssignmentRequest, FinalizeAssignmentResponse, GetActivityResponse,
    GetCurrentAssignmentResponse, GetPromoterHistoryResponse, GetStoreHistoryResponse,
    GetStoreRosterResponse, TransferAssignmentRequest, TransferAssignmentResponse,
};
