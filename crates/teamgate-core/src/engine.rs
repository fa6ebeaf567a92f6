//! The authorization decision engine.
//!
//! Evaluation order is fixed and encodes the superset invariant:
//!
//!   absent user → superadmin flag → admin flag → registry entry → scope
//!
//! 1. No resolved user: `Unauthorized`, for every capability.
//! 2. `is_superadmin`: granted, with no scope restriction.
//! 3. `is_admin`: granted unless the capability is superadmin-exclusive.
//! 4. Otherwise: granted iff the registry entry for `primary_role` has it.
//! 5. When a scope is supplied, a granted capability must also target the
//!    user's own organization, team, and (for person-bound capabilities) the
//!    user or one of their dependents. Superadmins, by flag or primary
//!    role, skip this step; admins are held to their organization only.

use std::sync::Arc;

use tracing::debug;

use teamgate_contracts::{
    AuthzError, AuthzResult, Capability, CapabilitySet, ResolvedUser, Role, Scope, Subject,
};
use teamgate_registry::Registry;

use crate::traits::Authorizer;

/// The registry-backed `Authorizer`.
///
/// Cheap to clone; clones share the same immutable registry.
#[derive(Debug, Clone)]
pub struct AuthorizationEngine {
    registry: Arc<Registry>,
}

impl AuthorizationEngine {
    pub fn new(registry: Arc<Registry>) -> Self {
        Self { registry }
    }

    /// An engine over the built-in table.
    pub fn builtin() -> Self {
        Self::new(Arc::new(Registry::builtin()))
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Steps 2 to 4: does the user hold `capability` at all?
    fn grant(&self, user: &ResolvedUser, capability: Capability) -> AuthzResult<()> {
        if user.is_superadmin {
            return Ok(());
        }

        if user.is_admin {
            if capability.is_superadmin_exclusive() {
                return Err(AuthzError::Forbidden {
                    capability: capability.to_string(),
                    reason: "capability is reserved for superadmins".to_string(),
                });
            }
            return Ok(());
        }

        if self.registry.grants(user.primary_role, capability) {
            Ok(())
        } else {
            Err(AuthzError::Forbidden {
                capability: capability.to_string(),
                reason: format!("role '{}' is not granted this capability", user.primary_role),
            })
        }
    }

    /// Step 5: is the target inside the user's reach?
    fn within_scope(
        &self,
        user: &ResolvedUser,
        capability: Capability,
        scope: &Scope,
    ) -> AuthzResult<()> {
        // Same elevation predicate as `has_role`: flag or primary role.
        if has_role(Some(user), Role::Superadmin) {
            return Ok(());
        }

        let out_of_scope = |reason: String| AuthzError::Forbidden {
            capability: capability.to_string(),
            reason,
        };

        if scope.organization_id != user.organization_id {
            return Err(out_of_scope(format!(
                "organization {} is outside the user's organization {}",
                scope.organization_id, user.organization_id
            )));
        }

        // Admins act on the whole organization.
        if has_role(Some(user), Role::Admin) {
            return Ok(());
        }

        if let (Some(target), Some(own)) = (scope.team_id, user.team_id) {
            if target != own {
                return Err(out_of_scope(format!(
                    "team {} is outside the user's team {}",
                    target, own
                )));
            }
        }

        match (capability.subject(), scope.person_id) {
            (Subject::Own, Some(person)) if person != user.id => Err(out_of_scope(format!(
                "person {} is not the acting user",
                person
            ))),
            (Subject::Dependent, Some(person)) if !user.dependents.contains(&person) => {
                Err(out_of_scope(format!(
                    "person {} is not a dependent of the acting user",
                    person
                )))
            }
            _ => Ok(()),
        }
    }
}

impl Default for AuthorizationEngine {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Authorizer for AuthorizationEngine {
    fn check(
        &self,
        user: Option<&ResolvedUser>,
        capability: Capability,
        scope: Option<&Scope>,
    ) -> AuthzResult<()> {
        let Some(user) = user else {
            debug!(capability = %capability, "denied: no resolved user");
            return Err(AuthzError::Unauthorized);
        };

        let decision = self
            .grant(user, capability)
            .and_then(|()| match scope {
                Some(scope) => self.within_scope(user, capability, scope),
                None => Ok(()),
            });

        match &decision {
            Ok(()) => debug!(
                user_id = %user.id,
                role = %user.primary_role,
                capability = %capability,
                scoped = scope.is_some(),
                "capability granted"
            ),
            Err(err) => debug!(
                user_id = %user.id,
                role = %user.primary_role,
                capability = %capability,
                error = %err,
                "capability denied"
            ),
        }

        decision
    }

    fn effective_capabilities(&self, user: Option<&ResolvedUser>) -> CapabilitySet {
        match user {
            None => CapabilitySet::default(),
            Some(user) => Capability::ALL
                .into_iter()
                .filter(|c| self.grant(user, *c).is_ok())
                .collect(),
        }
    }
}

/// Equality on `primary_role`, plus the elevated escape hatches.
///
/// Asking for `Admin` also matches the admin flag and any superadmin;
/// asking for `Superadmin` also matches the superadmin flag. A superadmin
/// therefore matches both.
pub fn has_role(user: Option<&ResolvedUser>, role: Role) -> bool {
    let Some(user) = user else {
        return false;
    };

    let superadmin = user.is_superadmin || user.primary_role == Role::Superadmin;
    match role {
        Role::Superadmin => superadmin,
        Role::Admin => superadmin || user.is_admin || user.primary_role == Role::Admin,
        other => user.primary_role == other,
    }
}
