//! # teamgate-ui
//!
//! Display-only UI configuration: which page sections to render and which
//! navigation entries to show, per role.
//!
//! [`UiConfig::for_role`] is a fixed table over the six roles.
//! [`UiConfig::for_user`] applies that table to a resolved viewer and filters
//! it through an [`Authorizer`](teamgate_core::Authorizer), so a control is
//! hidden whenever the engine would deny the capability behind it.

pub mod config;
pub mod layout;

pub use config::UiConfig;
pub use layout::{navigation_for_role, sections_for_role, NavItem, Section, SectionVisibility};
