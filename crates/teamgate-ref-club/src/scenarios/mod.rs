//! Reference club scenarios.
//!
//! Each scenario wires real teamgate components (registry, engine, guard,
//! decision log) over the fictional club in `mock_data` and demonstrates one
//! enforcement pattern.

pub mod anonymous_visit;
pub mod coach_session;
pub mod elevated_access;
pub mod family_portal;
pub mod tuned_registry;

use teamgate_audit::InMemoryDecisionLog;
use teamgate_contracts::{AuthzResult, Scope};
use teamgate_core::{Authorizer, Guard};

use crate::mock_data::Member;

/// What a scenario enforced, read back from its decision log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScenarioSummary {
    pub allowed: usize,
    pub denied: usize,
    pub chain_verified: bool,
}

/// A guard over `authorizer` that records into a fresh log.
pub(crate) fn guarded(
    authorizer: Box<dyn Authorizer>,
    log_id: &str,
) -> (Guard, InMemoryDecisionLog) {
    let log = InMemoryDecisionLog::new(log_id);
    let guard = Guard::new(authorizer, Box::new(log.clone()));
    (guard, log)
}

/// Enforce one request and print a single result line.
pub(crate) fn attempt(
    guard: &Guard,
    who: Option<&Member>,
    capability: &str,
    scope: Option<&Scope>,
    target: &str,
) {
    let name = who.map(|m| m.name).unwrap_or("(anonymous)");
    let user = who.map(|m| &m.user);

    match guard.enforce(user, capability, scope) {
        Ok(_) => {
            println!("  {:<18} {:<30} {:<14} ALLOW", name, capability, target);
        }
        Err(err) => {
            println!(
                "  {:<18} {:<30} {:<14} DENY [{}] {}",
                name,
                capability,
                target,
                err.status_code(),
                err
            );
        }
    }
}

/// Read the summary back from the log and print the chain status.
pub(crate) fn summarize(log: &InMemoryDecisionLog) -> AuthzResult<ScenarioSummary> {
    let exported = log.export_log()?;
    let denied = exported.denial_count();
    let summary = ScenarioSummary {
        allowed: exported.events.len() - denied,
        denied,
        chain_verified: log.verify_integrity(),
    };

    println!();
    println!(
        "  Decision log: {} allowed, {} denied, chain {}",
        summary.allowed,
        summary.denied,
        if summary.chain_verified { "VERIFIED" } else { "BROKEN" }
    );
    println!();
    Ok(summary)
}
