//! # teamgate-registry
//!
//! The role/capability registry: the closed set of roles, the closed set of
//! capabilities, and the declarative mapping from each role to the
//! capabilities it is granted.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use teamgate_contracts::{Capability, Role};
//! use teamgate_registry::Registry;
//!
//! let registry = Registry::shared();
//! assert!(registry.grants(Role::Coach, Capability::AddPlayer));
//! ```
//!
//! ## Tuned tables
//!
//! Deployments that need a different table load one from TOML with
//! [`Registry::from_file`]. Loading fails closed: an unknown name or a broken
//! superset invariant is a configuration error, never a silently narrower or
//! wider grant.

pub mod config;
pub mod registry;
pub mod table;

pub use config::{RegistryConfig, RoleGrants};
pub use registry::{is_capability_known, Coverage, Registry};

// ── Tests ─────────────────────────────────────────────────────────────────────
