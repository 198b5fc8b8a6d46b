// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Assignment lifecycle engine for the PromoTrack deployment system.
//!
//! The engine owns the assignment timeline: which promoter is deployed
//! to which store, from when to when. It exposes exactly three mutating
//! operations — create, finalize, transfer — through
//! [`AssignmentLifecycleManager`], the only caller of the persistence
//! layer's mutating assignment paths. Read-only history reconstruction
//! bypasses the manager through [`HistoryProjection`].
//!
//! Callers are assumed to be authenticated and authorized before they
//! get here: every operation takes a [`RequestContext`], which can only
//! be constructed for a resolved acting user. The engine decides
//! whether a call is consistent with current state, never whether it is
//! permitted.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod context;
mod error;
mod history;
mod manager;

#[cfg(test)]
mod tests;

pub use context::RequestContext;
pub use error::{LifecycleError, translate_domain_error, translate_persistence_error};
pub use history::HistoryProjection;
pub use manager::{AssignmentLifecycleManager, TransferRequest};

// Re-export the operation outcome types so callers need not depend on
// the persistence crate directly.
pub use promo_track_persistence::{
    CreateAssignmentOutcome, FinalizeAssignmentOutcome, TransferAssignmentOutcome,
};
