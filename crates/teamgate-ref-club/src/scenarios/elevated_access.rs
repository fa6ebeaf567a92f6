//! Scenario 3: Elevated Access
//!
//! The club secretary (coach role + admin flag) and the platform operator
//! (superadmin) exercise staff and platform capabilities. Admins reach
//! everything except organization, subscription, and philosophy-pack
//! management, and stay inside their own club. Superadmins reach everything,
//! everywhere.

use teamgate_contracts::{AuthzResult, Role};
use teamgate_core::{has_role, AuthorizationEngine};

use crate::mock_data;

use super::{attempt, guarded, summarize, ScenarioSummary};

/// Run Scenario 3.
pub fn run_scenario() -> AuthzResult<ScenarioSummary> {
    println!("=== Scenario 3: Elevated Access ===");
    println!();

    let admin = mock_data::admin();
    let superadmin = mock_data::superadmin();

    for member in [&admin, &superadmin] {
        println!(
            "  {:<18} has_role(admin)={} has_role(superadmin)={} has_role(coach)={}",
            member.name,
            has_role(Some(&member.user), Role::Admin),
            has_role(Some(&member.user), Role::Superadmin),
            has_role(Some(&member.user), Role::Coach),
        );
    }
    println!();

    let (guard, log) = guarded(Box::new(AuthorizationEngine::builtin()), "elevated-access");
    let riverside = mock_data::riverside();
    let hilltop = mock_data::hilltop();

    attempt(&guard, Some(&admin), "manage_coaches", Some(&riverside), "Riverside");
    attempt(&guard, Some(&admin), "manage_users", Some(&riverside), "Riverside");
    attempt(&guard, Some(&admin), "manage_subscription", None, "-");
    attempt(&guard, Some(&admin), "manage_teams", Some(&hilltop), "Hilltop");
    attempt(&guard, Some(&superadmin), "manage_subscription", None, "-");
    attempt(&guard, Some(&superadmin), "manage_organizations", Some(&hilltop), "Hilltop");

    summarize(&log)
}
