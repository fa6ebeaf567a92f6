//! Per-role page sections and navigation.
//!
//! This is a display-only table keyed on the primary role alone. It is tuned
//! for product needs (ordering, labels) independently of the capability
//! registry; the tests in this crate keep the two from drifting apart.

use serde::{Deserialize, Serialize};

use teamgate_contracts::{Capability, Role};

/// A top-level page section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Players,
    Coaches,
    Teams,
    Observations,
    DevelopmentPlans,
    Family,
    Administration,
    Organizations,
}

impl Section {
    pub const ALL: [Section; 8] = [
        Section::Players,
        Section::Coaches,
        Section::Teams,
        Section::Observations,
        Section::DevelopmentPlans,
        Section::Family,
        Section::Administration,
        Section::Organizations,
    ];

    /// Capabilities any one of which justifies showing the section.
    pub fn backing_capabilities(self) -> &'static [Capability] {
        use Capability::*;
        match self {
            Section::Players => &[ViewPlayers],
            Section::Coaches => &[ViewCoaches],
            Section::Teams => &[ViewTeams],
            Section::Observations => {
                &[ViewObservations, ViewOwnObservations, ViewChildObservations]
            }
            Section::DevelopmentPlans => &[
                ViewDevelopmentPlans,
                ViewOwnDevelopmentPlans,
                ViewChildDevelopmentPlans,
            ],
            Section::Family => &[ViewChildObservations, ViewChildDevelopmentPlans],
            Section::Administration => &[ManageUsers, ViewAnalytics],
            Section::Organizations => {
                &[ManageOrganizations, ManageSubscription, ManagePhilosophyPack]
            }
        }
    }
}

/// Which sections a page renders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionVisibility {
    pub players: bool,
    pub coaches: bool,
    pub teams: bool,
    pub observations: bool,
    pub development_plans: bool,
    pub family: bool,
    pub administration: bool,
    pub organizations: bool,
}

impl SectionVisibility {
    pub fn is_visible(&self, section: Section) -> bool {
        match section {
            Section::Players => self.players,
            Section::Coaches => self.coaches,
            Section::Teams => self.teams,
            Section::Observations => self.observations,
            Section::DevelopmentPlans => self.development_plans,
            Section::Family => self.family,
            Section::Administration => self.administration,
            Section::Organizations => self.organizations,
        }
    }

    pub fn set(&mut self, section: Section, visible: bool) {
        let slot = match section {
            Section::Players => &mut self.players,
            Section::Coaches => &mut self.coaches,
            Section::Teams => &mut self.teams,
            Section::Observations => &mut self.observations,
            Section::DevelopmentPlans => &mut self.development_plans,
            Section::Family => &mut self.family,
            Section::Administration => &mut self.administration,
            Section::Organizations => &mut self.organizations,
        };
        *slot = visible;
    }
}

/// One navigation entry and the capability that gates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub label: String,
    pub href: String,
    pub capability: Capability,
}

impl NavItem {
    fn new(label: &str, href: &str, capability: Capability) -> Self {
        Self {
            label: label.to_string(),
            href: href.to_string(),
            capability,
        }
    }
}

fn dashboard() -> NavItem {
    NavItem::new("Dashboard", "/dashboard", Capability::ViewDashboard)
}

fn profile() -> NavItem {
    NavItem::new("Profile", "/profile", Capability::EditOwnProfile)
}

fn squad_items(coaches: bool) -> Vec<NavItem> {
    let mut items = vec![
        NavItem::new("Players", "/players", Capability::ViewPlayers),
        NavItem::new("Teams", "/teams", Capability::ViewTeams),
    ];
    if coaches {
        items.push(NavItem::new("Coaches", "/coaches", Capability::ViewCoaches));
    }
    items
}

/// Navigation for `role`, in display order.
pub fn navigation_for_role(role: Role) -> Vec<NavItem> {
    let mut items = vec![dashboard()];

    match role {
        Role::Player => {
            items.push(NavItem::new(
                "My observations",
                "/me/observations",
                Capability::ViewOwnObservations,
            ));
            items.push(NavItem::new(
                "My development plan",
                "/me/development-plans",
                Capability::ViewOwnDevelopmentPlans,
            ));
        }
        Role::Parent => {
            items.push(NavItem::new(
                "Observations",
                "/family/observations",
                Capability::ViewChildObservations,
            ));
            items.push(NavItem::new(
                "Development plans",
                "/family/development-plans",
                Capability::ViewChildDevelopmentPlans,
            ));
        }
        Role::Observer => {
            items.extend(squad_items(false));
            items.push(NavItem::new(
                "Observations",
                "/observations",
                Capability::ViewObservations,
            ));
        }
        Role::Coach | Role::Admin | Role::Superadmin => {
            items.extend(squad_items(true));
            items.push(NavItem::new(
                "Observations",
                "/observations",
                Capability::ViewObservations,
            ));
            items.push(NavItem::new(
                "Development plans",
                "/development-plans",
                Capability::ViewDevelopmentPlans,
            ));
            if role.is_elevated() {
                items.push(NavItem::new("Users", "/admin/users", Capability::ManageUsers));
                items.push(NavItem::new(
                    "Analytics",
                    "/admin/analytics",
                    Capability::ViewAnalytics,
                ));
            }
            if role == Role::Superadmin {
                items.push(NavItem::new(
                    "Organizations",
                    "/superadmin/organizations",
                    Capability::ManageOrganizations,
                ));
                items.push(NavItem::new(
                    "Subscription",
                    "/superadmin/subscription",
                    Capability::ManageSubscription,
                ));
                items.push(NavItem::new(
                    "Philosophy pack",
                    "/superadmin/philosophy",
                    Capability::ManagePhilosophyPack,
                ));
            }
        }
    }

    items.push(profile());
    items
}

/// Section visibility for `role`.
pub fn sections_for_role(role: Role) -> SectionVisibility {
    match role {
        Role::Player => SectionVisibility {
            observations: true,
            development_plans: true,
            ..Default::default()
        },
        Role::Parent => SectionVisibility {
            observations: true,
            development_plans: true,
            family: true,
            ..Default::default()
        },
        Role::Observer => SectionVisibility {
            players: true,
            teams: true,
            observations: true,
            ..Default::default()
        },
        Role::Coach => SectionVisibility {
            players: true,
            coaches: true,
            teams: true,
            observations: true,
            development_plans: true,
            ..Default::default()
        },
        Role::Admin => SectionVisibility {
            players: true,
            coaches: true,
            teams: true,
            observations: true,
            development_plans: true,
            family: true,
            administration: true,
            organizations: false,
        },
        Role::Superadmin => SectionVisibility {
            players: true,
            coaches: true,
            teams: true,
            observations: true,
            development_plans: true,
            family: true,
            administration: true,
            organizations: true,
        },
    }
}
