//! Scenario 5: Tuned Registry
//!
//! A youth academy deploys its own registry table from TOML: scouts
//! (observers) become read-only and parents may see the team list. The same
//! requests are evaluated against the built-in table and the academy table,
//! and the scout's effective capabilities are listed under each.

use std::sync::Arc;

use teamgate_contracts::{AuthzResult, CapabilitySet};
use teamgate_core::{AuthorizationEngine, Authorizer};
use teamgate_registry::Registry;

use crate::mock_data;

use super::{attempt, guarded, summarize, ScenarioSummary};

/// The academy's registry table.
pub const ACADEMY_REGISTRY: &str = include_str!("../../registries/academy.toml");

fn listing(capabilities: &CapabilitySet) -> String {
    capabilities
        .iter()
        .map(|c| c.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Run Scenario 5. The summary covers the academy guard only.
pub fn run_scenario() -> AuthzResult<ScenarioSummary> {
    println!("=== Scenario 5: Tuned Registry ===");
    println!();

    let builtin = AuthorizationEngine::builtin();
    let academy = AuthorizationEngine::new(Arc::new(Registry::from_toml_str(ACADEMY_REGISTRY)?));
    let observer = mock_data::observer();
    let parent = mock_data::parent();

    println!(
        "  Scout capabilities (built-in): {}",
        listing(&builtin.effective_capabilities(Some(&observer.user)))
    );
    println!(
        "  Scout capabilities (academy):  {}",
        listing(&academy.effective_capabilities(Some(&observer.user)))
    );
    println!();

    println!("  Built-in table:");
    let (builtin_guard, _) = guarded(Box::new(builtin), "builtin-table");
    attempt(&builtin_guard, Some(&observer), "add_observation", None, "-");
    println!();

    println!("  Academy table:");
    let (guard, log) = guarded(Box::new(academy), "academy-table");
    attempt(&guard, Some(&observer), "view_observations", None, "-");
    attempt(&guard, Some(&observer), "add_observation", None, "-");
    attempt(&guard, Some(&parent), "view_teams", None, "-");

    summarize(&log)
}
