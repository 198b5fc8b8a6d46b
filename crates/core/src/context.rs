// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::{LifecycleError, translate_domain_error};
use promo_track_domain::validate_entity_id;

/// An immutable, request-scoped context carrying the acting user and
/// the pre-resolved authorization decision.
///
/// An external policy gate decides *whether* a call is permitted;
/// possessing a `RequestContext` is that decision. The only constructor
/// is [`RequestContext::authorized`], so an unauthorized caller has no
/// way to reach the lifecycle engine, and the engine itself performs no
/// role checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestContext {
    acting_user: i64,
}

impl RequestContext {
    /// Creates a context for an already-authorized acting user.
    ///
    /// # Arguments
    ///
    /// * `acting_user` - The resolved acting-user id (opaque to this
    ///   engine beyond being positive)
    ///
    /// # Errors
    ///
    /// Returns a validation error if the acting-user id is not positive.
    pub fn authorized(acting_user: i64) -> Result<Self, LifecycleError> {
        validate_entity_id("acting_user", acting_user).map_err(translate_domain_error)?;
        Ok(Self { acting_user })
    }

    /// Returns the acting-user id.
    #[must_use]
    pub const fn acting_user(&self) -> i64 {
        self.acting_user
    }
}
