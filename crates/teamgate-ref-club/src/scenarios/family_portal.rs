//! Scenario 4: Family Portal
//!
//! Person-bound capabilities. A parent may read their own child's reports
//! but not another family's; a player may read their own development plan
//! but not a teammate's.

use teamgate_contracts::AuthzResult;
use teamgate_core::AuthorizationEngine;

use crate::mock_data::{self, LEO_ID, MAYA_ID};

use super::{attempt, guarded, summarize, ScenarioSummary};

/// Run Scenario 4.
pub fn run_scenario() -> AuthzResult<ScenarioSummary> {
    println!("=== Scenario 4: Family Portal ===");
    println!();

    let (guard, log) = guarded(Box::new(AuthorizationEngine::builtin()), "family-portal");
    let parent = mock_data::parent();
    let player = mock_data::player();
    let maya = mock_data::riverside().with_person(MAYA_ID);
    let leo = mock_data::riverside().with_person(LEO_ID);

    attempt(&guard, Some(&parent), "view_child_development_plans", Some(&maya), "Maya");
    attempt(&guard, Some(&parent), "view_child_observations", Some(&maya), "Maya");
    attempt(&guard, Some(&parent), "view_child_development_plans", Some(&leo), "Leo");
    attempt(&guard, Some(&parent), "add_observation", None, "-");
    attempt(&guard, Some(&player), "view_own_development_plans", Some(&maya), "Maya");
    attempt(&guard, Some(&player), "view_own_development_plans", Some(&leo), "Leo");

    summarize(&log)
}
