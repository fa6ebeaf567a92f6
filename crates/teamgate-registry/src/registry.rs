//! The immutable role-to-capability registry.
//!
//! A `Registry` is built once, either from the built-in table or from a TOML
//! document, and is read-only afterwards. Share it across request handlers
//! behind `Arc` (or use [`Registry::shared`]); no synchronization is needed.
//!
//! Invariants checked on construction:
//!
//! 1. The table is total: every role maps to a (possibly empty) set.
//! 2. Superadmin-exclusive capabilities are granted to no role but superadmin.
//! 3. The superadmin entry is a superset of every other entry.
//! 4. The admin entry is a superset of every non-elevated entry.

use std::path::Path;
use std::str::FromStr;
use std::sync::OnceLock;

use tracing::{debug, info};

use teamgate_contracts::{AuthzError, AuthzResult, Capability, CapabilitySet, Role};

use crate::config::RegistryConfig;
use crate::table::builtin_grants;

const ROLE_COUNT: usize = Role::ALL.len();

/// Immutable mapping from role to granted capabilities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    // Indexed by `slot(role)`; one entry per role, so lookups are total.
    grants: [CapabilitySet; ROLE_COUNT],
}

fn slot(role: Role) -> usize {
    match role {
        Role::Player => 0,
        Role::Coach => 1,
        Role::Admin => 2,
        Role::Superadmin => 3,
        Role::Parent => 4,
        Role::Observer => 5,
    }
}

/// Which capabilities are reachable, and how.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coverage {
    /// Granted by at least one role entry.
    pub by_role: CapabilitySet,
    /// Reachable only through elevated flags.
    pub shortcut_only: CapabilitySet,
}

impl Registry {
    /// The registry described by the built-in table.
    pub fn builtin() -> Self {
        let mut grants: [CapabilitySet; ROLE_COUNT] = Default::default();
        for role in Role::ALL {
            grants[slot(role)] = builtin_grants(role);
        }
        Self { grants }
    }

    /// The process-wide built-in registry, constructed on first use.
    pub fn shared() -> &'static Registry {
        static SHARED: OnceLock<Registry> = OnceLock::new();
        SHARED.get_or_init(Registry::builtin)
    }

    /// Parse `s` as TOML and build a validated `Registry`.
    ///
    /// Returns `AuthzError::Config` if the TOML is malformed, names an
    /// unknown role or capability, or violates a registry invariant.
    pub fn from_toml_str(s: &str) -> AuthzResult<Self> {
        let config: RegistryConfig = toml::from_str(s).map_err(|e| AuthzError::Config {
            reason: format!("failed to parse registry TOML: {}", e),
        })?;
        Self::from_config(&config)
    }

    /// Read the file at `path` and parse it as TOML registry configuration.
    pub fn from_file(path: &Path) -> AuthzResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| AuthzError::Config {
            reason: format!("failed to read registry file '{}': {}", path.display(), e),
        })?;
        let registry = Self::from_toml_str(&contents)?;
        info!(path = %path.display(), "registry loaded");
        Ok(registry)
    }

    /// Build a registry from an already-deserialized configuration.
    pub fn from_config(config: &RegistryConfig) -> AuthzResult<Self> {
        let mut grants: [CapabilitySet; ROLE_COUNT] = Default::default();

        for (role_name, declared) in &config.roles {
            let role = Role::from_str(role_name).map_err(|e| AuthzError::Config {
                reason: e.to_string(),
            })?;

            for name in &declared.capabilities {
                let capability =
                    Capability::from_str(name).map_err(|_| AuthzError::Config {
                        reason: format!(
                            "role '{}' grants unknown capability '{}'",
                            role_name, name
                        ),
                    })?;
                grants[slot(role)].grant(capability);
            }

            debug!(
                role = %role,
                granted = grants[slot(role)].len(),
                "registry entry loaded"
            );
        }

        let registry = Self { grants };
        registry.validate()?;
        Ok(registry)
    }

    /// Check the superset and exclusivity invariants.
    fn validate(&self) -> AuthzResult<()> {
        let superadmin = self.list_capabilities_for_role(Role::Superadmin);
        let admin = self.list_capabilities_for_role(Role::Admin);

        for role in Role::ALL {
            let granted = self.list_capabilities_for_role(role);

            if role != Role::Superadmin {
                if let Some(exclusive) = granted.iter().find(|c| c.is_superadmin_exclusive()) {
                    return Err(AuthzError::Config {
                        reason: format!(
                            "capability '{}' is superadmin-only but granted to role '{}'",
                            exclusive, role
                        ),
                    });
                }
                if !granted.is_subset(superadmin) {
                    return Err(AuthzError::Config {
                        reason: format!(
                            "role 'superadmin' must hold every capability granted to '{}'",
                            role
                        ),
                    });
                }
            }

            if !role.is_elevated() && !granted.is_subset(admin) {
                return Err(AuthzError::Config {
                    reason: format!(
                        "role 'admin' must hold every capability granted to '{}'",
                        role
                    ),
                });
            }
        }

        Ok(())
    }

    /// Capabilities granted to `role` by its table entry.
    ///
    /// Total over `Role`: roles with no grants map to the empty set.
    pub fn list_capabilities_for_role(&self, role: Role) -> &CapabilitySet {
        &self.grants[slot(role)]
    }

    /// True if the table entry for `role` grants `capability`.
    pub fn grants(&self, role: Role, capability: Capability) -> bool {
        self.list_capabilities_for_role(role).has(capability)
    }

    /// Report how each capability is reachable.
    pub fn coverage(&self) -> Coverage {
        let mut by_role = CapabilitySet::default();
        for role in Role::ALL {
            by_role.extend(self.list_capabilities_for_role(role).iter());
        }

        // Elevated flags reach these; see `AuthorizationEngine`.
        let shortcut_only = Capability::ALL
            .into_iter()
            .filter(|c| !by_role.has(*c))
            .collect();

        Coverage {
            by_role,
            shortcut_only,
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Validate an arbitrary string against the capability enumeration.
pub fn is_capability_known(value: &str) -> bool {
    Capability::from_str(value).is_ok()
}
