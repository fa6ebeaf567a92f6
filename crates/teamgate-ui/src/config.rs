//! The UI configuration handed to page components.

use serde::{Deserialize, Serialize};
use tracing::debug;

use teamgate_contracts::{ResolvedUser, Role};
use teamgate_core::Authorizer;

use crate::layout::{navigation_for_role, sections_for_role, NavItem, Section, SectionVisibility};

/// Section flags plus ordered navigation for one viewer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// The layout the configuration was derived from; `None` when anonymous.
    pub role: Option<Role>,
    pub sections: SectionVisibility,
    pub navigation: Vec<NavItem>,
}

impl UiConfig {
    /// The fixed layout for a primary role, before any capability filtering.
    pub fn for_role(role: Role) -> Self {
        Self {
            role: Some(role),
            sections: sections_for_role(role),
            navigation: navigation_for_role(role),
        }
    }

    /// The logged-out configuration: nothing visible.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// The configuration for a resolved viewer.
    ///
    /// Elevated flags pick the admin or superadmin layout. Every section and
    /// navigation entry is then filtered through `authorizer`, so nothing is
    /// shown that the engine would deny.
    pub fn for_user(authorizer: &dyn Authorizer, user: Option<&ResolvedUser>) -> Self {
        let Some(viewer) = user else {
            return Self::anonymous();
        };

        let layout = if viewer.is_superadmin {
            Role::Superadmin
        } else if viewer.is_admin {
            Role::Admin
        } else {
            viewer.primary_role
        };

        let mut config = Self::for_role(layout);
        config
            .navigation
            .retain(|item| authorizer.has_capability(user, item.capability));

        for section in Section::ALL {
            let backed = section
                .backing_capabilities()
                .iter()
                .any(|c| authorizer.has_capability(user, *c));
            if !backed {
                config.sections.set(section, false);
            }
        }

        debug!(
            user_id = %viewer.id,
            layout = %layout,
            nav_items = config.navigation.len(),
            "ui configuration derived"
        );
        config
    }

    /// JSON payload for the UI layer.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "role": self.role,
            "sections": self.sections,
            "navigation": self.navigation,
        })
    }
}
