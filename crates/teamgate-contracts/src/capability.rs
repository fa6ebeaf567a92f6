//! Capability types.
//!
//! A capability names exactly one permitted action (verb + resource, e.g.
//! `add_player`). The set is closed: every value the UI or a route handler can
//! ask about is a variant of [`Capability`], and its string form is stable
//! because it crosses the boundary to the UI layer and is compared by value.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AuthzError;

/// One fine-grained permitted action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    ViewDashboard,
    EditOwnProfile,
    ViewPlayers,
    AddPlayer,
    EditPlayer,
    DeletePlayer,
    ViewCoaches,
    ManageCoaches,
    ViewTeams,
    ManageTeams,
    ViewObservations,
    AddObservation,
    EditObservation,
    ViewOwnObservations,
    ViewDevelopmentPlans,
    CreateDevelopmentPlan,
    EditDevelopmentPlan,
    ViewOwnDevelopmentPlans,
    ViewChildObservations,
    ViewChildDevelopmentPlans,
    ManageUsers,
    ViewAnalytics,
    ManageOrganizations,
    ManageSubscription,
    ManagePhilosophyPack,
}

impl Capability {
    /// Every capability, in declaration order.
    pub const ALL: [Capability; 25] = [
        Capability::ViewDashboard,
        Capability::EditOwnProfile,
        Capability::ViewPlayers,
        Capability::AddPlayer,
        Capability::EditPlayer,
        Capability::DeletePlayer,
        Capability::ViewCoaches,
        Capability::ManageCoaches,
        Capability::ViewTeams,
        Capability::ManageTeams,
        Capability::ViewObservations,
        Capability::AddObservation,
        Capability::EditObservation,
        Capability::ViewOwnObservations,
        Capability::ViewDevelopmentPlans,
        Capability::CreateDevelopmentPlan,
        Capability::EditDevelopmentPlan,
        Capability::ViewOwnDevelopmentPlans,
        Capability::ViewChildObservations,
        Capability::ViewChildDevelopmentPlans,
        Capability::ManageUsers,
        Capability::ViewAnalytics,
        Capability::ManageOrganizations,
        Capability::ManageSubscription,
        Capability::ManagePhilosophyPack,
    ];

    /// Capabilities that only superadmins hold, even under the admin shortcut.
    pub const SUPERADMIN_EXCLUSIVE: [Capability; 3] = [
        Capability::ManageOrganizations,
        Capability::ManageSubscription,
        Capability::ManagePhilosophyPack,
    ];

    /// The stable wire value of this capability.
    pub fn as_str(self) -> &'static str {
        match self {
            Capability::ViewDashboard => "view_dashboard",
            Capability::EditOwnProfile => "edit_own_profile",
            Capability::ViewPlayers => "view_players",
            Capability::AddPlayer => "add_player",
            Capability::EditPlayer => "edit_player",
            Capability::DeletePlayer => "delete_player",
            Capability::ViewCoaches => "view_coaches",
            Capability::ManageCoaches => "manage_coaches",
            Capability::ViewTeams => "view_teams",
            Capability::ManageTeams => "manage_teams",
            Capability::ViewObservations => "view_observations",
            Capability::AddObservation => "add_observation",
            Capability::EditObservation => "edit_observation",
            Capability::ViewOwnObservations => "view_own_observations",
            Capability::ViewDevelopmentPlans => "view_development_plans",
            Capability::CreateDevelopmentPlan => "create_development_plan",
            Capability::EditDevelopmentPlan => "edit_development_plan",
            Capability::ViewOwnDevelopmentPlans => "view_own_development_plans",
            Capability::ViewChildObservations => "view_child_observations",
            Capability::ViewChildDevelopmentPlans => "view_child_development_plans",
            Capability::ManageUsers => "manage_users",
            Capability::ViewAnalytics => "view_analytics",
            Capability::ManageOrganizations => "manage_organizations",
            Capability::ManageSubscription => "manage_subscription",
            Capability::ManagePhilosophyPack => "manage_philosophy_pack",
        }
    }

    /// True for capabilities the admin shortcut does not reach.
    pub fn is_superadmin_exclusive(self) -> bool {
        Self::SUPERADMIN_EXCLUSIVE.contains(&self)
    }

    /// How this capability binds to a target person, if at all.
    pub fn subject(self) -> Subject {
        match self {
            Capability::EditOwnProfile
            | Capability::ViewOwnObservations
            | Capability::ViewOwnDevelopmentPlans => Subject::Own,
            Capability::ViewChildObservations | Capability::ViewChildDevelopmentPlans => {
                Subject::Dependent
            }
            _ => Subject::Any,
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Capability {
    type Err = AuthzError;

    /// Parse a wire value. Anything outside the closed set is
    /// `AuthzError::CapabilityNotFound`.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Capability::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == value)
            .ok_or_else(|| AuthzError::CapabilityNotFound {
                value: value.to_string(),
            })
    }
}

/// Which person a capability may be exercised on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject {
    /// Not tied to a particular person.
    Any,
    /// Only the acting user's own record.
    Own,
    /// Only records of people the acting user is guardian of.
    Dependent,
}

/// An ordered set of capabilities.
///
/// Ordered so that listings (CLI output, serialized UI payloads) are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CapabilitySet {
    inner: BTreeSet<Capability>,
}

impl CapabilitySet {
    /// The set holding every capability.
    pub fn all() -> Self {
        Capability::ALL.into_iter().collect()
    }

    /// Grant a capability to this set.
    pub fn grant(&mut self, capability: Capability) {
        self.inner.insert(capability);
    }

    /// Return true if the set contains the given capability.
    pub fn has(&self, capability: Capability) -> bool {
        self.inner.contains(&capability)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// True if every capability in `self` is also in `other`.
    pub fn is_subset(&self, other: &CapabilitySet) -> bool {
        self.inner.is_subset(&other.inner)
    }

    /// Iterate granted capabilities in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = Capability> + '_ {
        self.inner.iter().copied()
    }
}

impl FromIterator<Capability> for CapabilitySet {
    fn from_iter<I: IntoIterator<Item = Capability>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

impl Extend<Capability> for CapabilitySet {
    fn extend<I: IntoIterator<Item = Capability>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}
