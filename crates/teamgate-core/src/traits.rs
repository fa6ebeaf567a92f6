//! Core trait definitions for the teamgate authorization pipeline.
//!
//! - `Authorizer`: trusted, pure decision maker (no I/O)
//! - `DecisionSink`: trusted sink that records every enforced decision
//!
//! The [`Guard`](crate::guard::Guard) wires them together for route handlers.
//! UI code calls an `Authorizer` directly and only ever uses the `has_*`
//! methods, which never fail.

use std::str::FromStr;

use tracing::warn;

use teamgate_contracts::{
    AuthzResult, Capability, CapabilitySet, DecisionRecord, ResolvedUser, Role, Scope,
};

/// Answers "may this user exercise this capability?".
///
/// Implementations must be deterministic and side-effect free: they only
/// inspect the already-resolved user and the request. `None` for `user` means
/// an anonymous request and is always a normal input, never an error.
pub trait Authorizer: Send + Sync {
    /// Decide a request. `Ok(())` allows; the error carries the denial.
    ///
    /// An absent user is `Unauthorized`; a resolved user lacking the
    /// capability, or holding it outside `scope`, is `Forbidden`.
    fn check(
        &self,
        user: Option<&ResolvedUser>,
        capability: Capability,
        scope: Option<&Scope>,
    ) -> AuthzResult<()>;

    /// Every capability `user` holds after elevated-flag shortcuts.
    fn effective_capabilities(&self, user: Option<&ResolvedUser>) -> CapabilitySet;

    fn has_capability(&self, user: Option<&ResolvedUser>, capability: Capability) -> bool {
        self.check(user, capability, None).is_ok()
    }

    fn has_capability_in(
        &self,
        user: Option<&ResolvedUser>,
        capability: Capability,
        scope: &Scope,
    ) -> bool {
        self.check(user, capability, Some(scope)).is_ok()
    }

    fn require_capability(
        &self,
        user: Option<&ResolvedUser>,
        capability: Capability,
    ) -> AuthzResult<()> {
        self.check(user, capability, None)
    }

    fn require_capability_in(
        &self,
        user: Option<&ResolvedUser>,
        capability: Capability,
        scope: &Scope,
    ) -> AuthzResult<()> {
        self.check(user, capability, Some(scope))
    }

    /// Like `has_capability`, for a raw wire value. Unknown values are
    /// logged and denied.
    fn has_capability_named(&self, user: Option<&ResolvedUser>, capability: &str) -> bool {
        match Capability::from_str(capability) {
            Ok(capability) => self.has_capability(user, capability),
            Err(_) => {
                warn!(capability = %capability, "unknown capability requested; denying");
                false
            }
        }
    }

    /// Like `require_capability`, for a raw wire value. Unknown values fail
    /// with `CapabilityNotFound` before any user check.
    fn require_capability_named(
        &self,
        user: Option<&ResolvedUser>,
        capability: &str,
    ) -> AuthzResult<Capability> {
        let parsed = Capability::from_str(capability).inspect_err(|_| {
            warn!(capability = %capability, "unknown capability requested");
        })?;
        self.require_capability(user, parsed)?;
        Ok(parsed)
    }

    /// Role test with the elevated-flag escape hatches.
    fn has_role(&self, user: Option<&ResolvedUser>, role: Role) -> bool {
        crate::engine::has_role(user, role)
    }
}

/// Persists one record per enforced decision.
///
/// A failed write is fatal to the request: the guard converts it into
/// `AuthzError::AuditWriteFailed` and the gated action does not run.
pub trait DecisionSink: Send + Sync {
    /// Append one record. Records are never modified afterwards.
    fn record(&self, record: &DecisionRecord) -> AuthzResult<()>;
}
