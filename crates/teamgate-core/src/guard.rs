//! The route-layer guard.
//!
//! A route handler hands the guard the resolved user (if any), the raw
//! capability value it is about to exercise, and optionally the target scope.
//! The guard enforces the pipeline:
//!
//!   Parse → Check → Record → [action]
//!
//! The gated action is only reachable after the check allowed the request
//! AND the decision was recorded. Every enforced request produces exactly one
//! `DecisionRecord`, allowed or not.

use std::str::FromStr;

use thiserror::Error;
use tracing::{debug, warn};

use teamgate_contracts::{
    AuthzError, AuthzResult, Capability, Decision, DecisionRecord, ResolvedUser, Scope,
};

use crate::traits::{Authorizer, DecisionSink};

/// Failure of a guarded action: either the guard refused, or the action ran
/// and failed on its own.
#[derive(Debug, Error)]
pub enum GuardError<E> {
    #[error(transparent)]
    Denied(AuthzError),

    #[error("guarded action failed: {0}")]
    Action(E),
}

/// Enforces decisions for route handlers and records each one.
pub struct Guard {
    authorizer: Box<dyn Authorizer>,
    sink: Box<dyn DecisionSink>,
}

impl Guard {
    pub fn new(authorizer: Box<dyn Authorizer>, sink: Box<dyn DecisionSink>) -> Self {
        Self { authorizer, sink }
    }

    /// The authorizer behind this guard, for non-enforcing (UI) checks.
    pub fn authorizer(&self) -> &dyn Authorizer {
        self.authorizer.as_ref()
    }

    /// Enforce one request.
    ///
    /// # Errors
    ///
    /// - `CapabilityNotFound` for a value outside the enumeration;
    /// - `Unauthorized` / `Forbidden` from the authorizer;
    /// - `AuditWriteFailed` if the record could not be written, even when
    ///   the check itself allowed the request.
    pub fn enforce(
        &self,
        user: Option<&ResolvedUser>,
        capability: &str,
        scope: Option<&Scope>,
    ) -> AuthzResult<Capability> {
        let outcome = Capability::from_str(capability).and_then(|parsed| {
            self.authorizer
                .check(user, parsed, scope)
                .map(|()| parsed)
        });

        let decision = match &outcome {
            Ok(_) => Decision::Allow,
            Err(err @ AuthzError::CapabilityNotFound { .. }) => {
                warn!(capability = %capability, "unknown capability requested at route boundary");
                Decision::denied_by(err)
            }
            Err(err) => Decision::denied_by(err),
        };

        let record = DecisionRecord::new(user, capability, scope.copied(), decision);
        self.sink.record(&record).map_err(|e| {
            warn!(capability = %capability, error = %e, "decision could not be recorded; denying");
            AuthzError::AuditWriteFailed {
                reason: e.to_string(),
            }
        })?;

        debug!(
            capability = %capability,
            allowed = outcome.is_ok(),
            "decision recorded"
        );

        outcome
    }

    /// Enforce, then run `action` only if the request was allowed.
    pub fn run<T, E, F>(
        &self,
        user: Option<&ResolvedUser>,
        capability: &str,
        scope: Option<&Scope>,
        action: F,
    ) -> Result<T, GuardError<E>>
    where
        F: FnOnce(Capability) -> Result<T, E>,
    {
        let granted = self
            .enforce(user, capability, scope)
            .map_err(GuardError::Denied)?;
        action(granted).map_err(GuardError::Action)
    }
}
