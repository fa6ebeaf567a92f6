//! Scenario 1: Coach Session
//!
//! The under-14 coach works through a training-day session:
//!
//! - records an observation and adds a player to their own team → Allow
//! - adds a player to the under-12 team                          → Forbidden (team scope)
//! - manages the coaching staff                                  → Forbidden (not granted)
//! - manages organizations                                       → Forbidden (superadmin only)
//! - adds a player at another club                               → Forbidden (organization scope)

use teamgate_contracts::{AuthzResult, Scope};
use teamgate_core::AuthorizationEngine;

use crate::mock_data::{self, UNDER_12, UNDER_14};

use super::{attempt, guarded, summarize, ScenarioSummary};

/// Run Scenario 1.
pub fn run_scenario() -> AuthzResult<ScenarioSummary> {
    println!("=== Scenario 1: Coach Session ===");
    println!();

    let (guard, log) = guarded(Box::new(AuthorizationEngine::builtin()), "coach-session");
    let coach = mock_data::coach();
    let own_team = mock_data::riverside().with_team(UNDER_14);
    let other_team = mock_data::riverside().with_team(UNDER_12);
    let hilltop: Scope = mock_data::hilltop();

    attempt(&guard, Some(&coach), "add_observation", Some(&own_team), "U14");
    attempt(&guard, Some(&coach), "add_player", Some(&own_team), "U14");
    attempt(&guard, Some(&coach), "add_player", Some(&other_team), "U12");
    attempt(&guard, Some(&coach), "manage_coaches", None, "-");
    attempt(&guard, Some(&coach), "manage_organizations", None, "-");
    attempt(&guard, Some(&coach), "add_player", Some(&hilltop), "Hilltop");

    summarize(&log)
}
