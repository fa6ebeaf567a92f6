//! The built-in role-to-capability table.

use teamgate_contracts::{Capability, CapabilitySet, Role};

use Capability::*;

const PLAYER: &[Capability] = &[
    ViewDashboard,
    EditOwnProfile,
    ViewOwnObservations,
    ViewOwnDevelopmentPlans,
];

const PARENT: &[Capability] = &[
    ViewDashboard,
    EditOwnProfile,
    ViewChildObservations,
    ViewChildDevelopmentPlans,
];

const OBSERVER: &[Capability] = &[
    ViewDashboard,
    EditOwnProfile,
    ViewPlayers,
    ViewTeams,
    ViewObservations,
    AddObservation,
];

const COACH: &[Capability] = &[
    ViewDashboard,
    EditOwnProfile,
    ViewPlayers,
    AddPlayer,
    EditPlayer,
    ViewCoaches,
    ViewTeams,
    ViewObservations,
    AddObservation,
    EditObservation,
    ViewDevelopmentPlans,
    CreateDevelopmentPlan,
    EditDevelopmentPlan,
];

/// Capabilities granted to `role` by the built-in table.
///
/// Admin holds everything except the superadmin-exclusive subset; superadmin
/// holds everything.
pub fn builtin_grants(role: Role) -> CapabilitySet {
    match role {
        Role::Player => PLAYER.iter().copied().collect(),
        Role::Parent => PARENT.iter().copied().collect(),
        Role::Observer => OBSERVER.iter().copied().collect(),
        Role::Coach => COACH.iter().copied().collect(),
        Role::Admin => Capability::ALL
            .into_iter()
            .filter(|c| !c.is_superadmin_exclusive())
            .collect(),
        Role::Superadmin => CapabilitySet::all(),
    }
}
