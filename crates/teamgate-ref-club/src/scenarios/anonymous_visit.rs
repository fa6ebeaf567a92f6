//! Scenario 2: Anonymous Visit
//!
//! A visitor without a session hits the club site. Every capability is
//! denied with `Unauthorized` (redirect to sign-in), never `Forbidden`, and
//! the UI configuration is empty. A malformed capability value from a broken
//! client is reported as `CapabilityNotFound`.

use teamgate_contracts::AuthzResult;
use teamgate_core::AuthorizationEngine;
use teamgate_ui::UiConfig;

use super::{attempt, guarded, summarize, ScenarioSummary};

/// Run Scenario 2.
pub fn run_scenario() -> AuthzResult<ScenarioSummary> {
    println!("=== Scenario 2: Anonymous Visit ===");
    println!();

    let engine = AuthorizationEngine::builtin();
    let ui = UiConfig::for_user(&engine, None);
    println!(
        "  UI configuration: {} navigation item(s), role {:?}",
        ui.navigation.len(),
        ui.role
    );
    println!();

    let (guard, log) = guarded(Box::new(engine), "anonymous-visit");
    attempt(&guard, None, "view_dashboard", None, "-");
    attempt(&guard, None, "view_players", None, "-");
    attempt(&guard, None, "manage_organizations", None, "-");
    attempt(&guard, None, "player:write", None, "-");

    summarize(&log)
}
