//! Registry configuration schema.
//!
//! A `RegistryConfig` is deserialized from TOML and names, per role, the
//! capabilities that role is granted. Names are kept as plain strings here so
//! that unknown values can be reported with the offending role attached;
//! `Registry::from_config` does the parsing and invariant checks.
//!
//! Example:
//! ```toml
//! [roles.coach]
//! description = "Head and assistant coaches"
//! capabilities = ["view_dashboard", "add_player", "add_observation"]
//!
//! [roles.player]
//! capabilities = ["view_dashboard", "view_own_development_plans"]
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The grants declared for one role.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoleGrants {
    /// Human-readable note for operators. Not used in evaluation.
    #[serde(default)]
    pub description: Option<String>,

    /// Capability wire values granted to the role.
    #[serde(default)]
    pub capabilities: Vec<String>,
}

/// The top-level structure deserialized from a TOML registry file.
///
/// Roles missing from `roles` are granted nothing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistryConfig {
    #[serde(default)]
    pub roles: BTreeMap<String, RoleGrants>,
}
