//! # teamgate-contracts
//!
//! Shared types for the teamgate authorization core.
//!
//! All crates in the workspace import from here. No decision logic lives in
//! this crate, only the closed role and capability enumerations, the
//! per-request user context, decision records, and error types.

pub mod capability;
pub mod decision;
pub mod error;
pub mod role;
pub mod user;

pub use capability::{Capability, CapabilitySet, Subject};
pub use decision::{Decision, DecisionRecord};
pub use error::{AuthzError, AuthzResult, ErrorKind};
pub use role::Role;
pub use user::{OrganizationId, ResolvedUser, Scope, TeamId, UserId};
