//! Resolved user context and resource scope.
//!
//! A `ResolvedUser` is built per request by the session layer from the
//! signed session and the stored profile. The authorization crates only ever
//! borrow it; they never construct, mutate, or persist one.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::role::Role;

/// Stable identifier of a person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub Uuid);

/// Identifier of an organization (club).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrganizationId(pub Uuid);

/// Identifier of a team (group) inside an organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamId(pub Uuid);

macro_rules! impl_id {
    ($($ty:ident),*) => {$(
        impl $ty {
            /// Create a fresh random identifier.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }
        }

        impl Default for $ty {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(&self.0, f)
            }
        }
    )*};
}

impl_id!(UserId, OrganizationId, TeamId);

/// The per-request identity the authorization engine evaluates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedUser {
    pub id: UserId,
    pub primary_role: Role,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub is_superadmin: bool,
    pub organization_id: OrganizationId,
    /// Present when the user is bound to a single team.
    #[serde(default)]
    pub team_id: Option<TeamId>,
    /// People this user is guardian of. Only meaningful for parents.
    #[serde(default)]
    pub dependents: Vec<UserId>,
}

impl ResolvedUser {
    /// A user with the given role and no elevated flags, team, or dependents.
    pub fn new(id: UserId, primary_role: Role, organization_id: OrganizationId) -> Self {
        Self {
            id,
            primary_role,
            is_admin: false,
            is_superadmin: false,
            organization_id,
            team_id: None,
            dependents: Vec::new(),
        }
    }

    pub fn with_admin(mut self, is_admin: bool) -> Self {
        self.is_admin = is_admin;
        self
    }

    pub fn with_superadmin(mut self, is_superadmin: bool) -> Self {
        self.is_superadmin = is_superadmin;
        self
    }

    pub fn with_team(mut self, team_id: TeamId) -> Self {
        self.team_id = Some(team_id);
        self
    }

    pub fn with_dependent(mut self, dependent: UserId) -> Self {
        self.dependents.push(dependent);
        self
    }
}

/// The resource a capability is being exercised on.
///
/// The organization is mandatory; team and person narrow the target further.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scope {
    pub organization_id: OrganizationId,
    #[serde(default)]
    pub team_id: Option<TeamId>,
    #[serde(default)]
    pub person_id: Option<UserId>,
}

impl Scope {
    pub fn organization(organization_id: OrganizationId) -> Self {
        Self {
            organization_id,
            team_id: None,
            person_id: None,
        }
    }

    pub fn with_team(mut self, team_id: TeamId) -> Self {
        self.team_id = Some(team_id);
        self
    }

    pub fn with_person(mut self, person_id: UserId) -> Self {
        self.person_id = Some(person_id);
        self
    }
}
