//! Fictional club data for the reference scenarios.
//!
//! Stands in for the session layer: every function here returns an
//! already-resolved user, the way a route handler would receive one.
//! Identifiers are fixed so scenario output is reproducible.

use uuid::Uuid;

use teamgate_contracts::{OrganizationId, ResolvedUser, Role, Scope, TeamId, UserId};

/// Riverside FC, the home organization of every member below.
pub const RIVERSIDE: OrganizationId = OrganizationId(Uuid::from_u128(0x1000));

/// A different club, used for cross-tenant requests.
pub const HILLTOP: OrganizationId = OrganizationId(Uuid::from_u128(0x2000));

pub const UNDER_12: TeamId = TeamId(Uuid::from_u128(0x1012));
pub const UNDER_14: TeamId = TeamId(Uuid::from_u128(0x1014));

pub const MAYA_ID: UserId = UserId(Uuid::from_u128(0xa001));
pub const LEO_ID: UserId = UserId(Uuid::from_u128(0xa002));

/// A named member of the club.
#[derive(Debug, Clone)]
pub struct Member {
    pub name: &'static str,
    pub user: ResolvedUser,
}

fn resident(id: UserId, role: Role) -> ResolvedUser {
    ResolvedUser::new(id, role, RIVERSIDE)
}

fn id(value: u128) -> UserId {
    UserId(Uuid::from_u128(value))
}

/// Under-14 head coach.
pub fn coach() -> Member {
    Member {
        name: "Sam Okafor",
        user: resident(id(0xc001), Role::Coach).with_team(UNDER_14),
    }
}

/// Under-14 midfielder.
pub fn player() -> Member {
    Member {
        name: "Maya Lindqvist",
        user: resident(MAYA_ID, Role::Player).with_team(UNDER_14),
    }
}

/// Under-12 winger.
pub fn other_player() -> Member {
    Member {
        name: "Leo Brandt",
        user: resident(LEO_ID, Role::Player).with_team(UNDER_12),
    }
}

/// Maya's guardian.
pub fn parent() -> Member {
    Member {
        name: "Ingrid Lindqvist",
        user: resident(id(0xd001), Role::Parent).with_dependent(MAYA_ID),
    }
}

/// Visiting academy scout.
pub fn observer() -> Member {
    Member {
        name: "Priya Nair",
        user: resident(id(0xe001), Role::Observer),
    }
}

/// Club secretary: a coach by role with the admin flag.
pub fn admin() -> Member {
    Member {
        name: "Tom Reyes",
        user: resident(id(0xf001), Role::Coach).with_admin(true),
    }
}

/// Platform operator.
pub fn superadmin() -> Member {
    Member {
        name: "Dana Whitfield",
        user: resident(id(0xf002), Role::Superadmin).with_superadmin(true),
    }
}

/// Every member, in a stable order.
pub fn roster() -> Vec<Member> {
    vec![
        coach(),
        player(),
        other_player(),
        parent(),
        observer(),
        admin(),
        superadmin(),
    ]
}

pub fn riverside() -> Scope {
    Scope::organization(RIVERSIDE)
}

pub fn hilltop() -> Scope {
    Scope::organization(HILLTOP)
}
