// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only history projections.
//!
//! Projections reconstruct assignment timelines from the store alone.
//! They depend only on the assignment table — not on master data and
//! not on the manager's mutation paths — so an unknown promoter or
//! store simply yields an empty timeline. Queries run at the store's
//! default isolation, outside any lifecycle transaction; they may
//! observe either side of an in-flight operation but never a
//! post-commit state that violates the open-assignment invariant.

use promo_track_domain::{Assignment, validate_entity_id};
use promo_track_persistence::Persistence;

use crate::error::{LifecycleError, translate_domain_error, translate_persistence_error};

/// Read-only queries over the assignment timeline.
pub struct HistoryProjection<'a> {
    persistence: &'a mut Persistence,
}

impl<'a> HistoryProjection<'a> {
    /// Creates a projection over the given persistence adapter.
    pub fn new(persistence: &'a mut Persistence) -> Self {
        Self { persistence }
    }

    /// Returns a promoter's full assignment timeline, oldest first.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a non-positive id, or a
    /// transaction error if the store fails.
    pub fn promoter_timeline(
        &mut self,
        promoter_id: i64,
    ) -> Result<Vec<Assignment>, LifecycleError> {
        validate_entity_id("promoter_id", promoter_id).map_err(translate_domain_error)?;
        self.persistence
            .assignments_for_promoter(promoter_id)
            .map_err(translate_persistence_error)
    }

    /// Returns a store's full assignment timeline, oldest first.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a non-positive id, or a
    /// transaction error if the store fails.
    pub fn store_timeline(&mut self, store_id: i64) -> Result<Vec<Assignment>, LifecycleError> {
        validate_entity_id("store_id", store_id).map_err(translate_domain_error)?;
        self.persistence
            .assignments_for_store(store_id)
            .map_err(translate_persistence_error)
    }

    /// Returns a promoter's current open assignment, if any.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a non-positive id, or a
    /// transaction error if the store fails.
    pub fn current_assignment(
        &mut self,
        promoter_id: i64,
    ) -> Result<Option<Assignment>, LifecycleError> {
        validate_entity_id("promoter_id", promoter_id).map_err(translate_domain_error)?;
        self.persistence
            .current_assignment_for_promoter(promoter_id)
            .map_err(translate_persistence_error)
    }

    /// Returns a store's currently open assignments.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a non-positive id, or a
    /// transaction error if the store fails.
    pub fn store_roster(&mut self, store_id: i64) -> Result<Vec<Assignment>, LifecycleError> {
        validate_entity_id("store_id", store_id).map_err(translate_domain_error)?;
        self.persistence
            .open_assignments_for_store(store_id)
            .map_err(translate_persistence_error)
    }
}
