//! teamgate demo CLI
//!
//! Inspects the role/capability registry, evaluates single requests against
//! the decision engine, renders per-role UI configuration, and runs the
//! reference club scenarios.
//!
//! Usage:
//!   cargo run -p demo -- roles
//!   cargo run -p demo -- capabilities --role coach
//!   cargo run -p demo -- check --role coach --capability manage_coaches --admin
//!   cargo run -p demo -- nav --role parent
//!   cargo run -p demo -- coverage --registry crates/teamgate-ref-club/registries/academy.toml
//!   cargo run -p demo -- scenarios

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use teamgate_contracts::{AuthzError, AuthzResult, OrganizationId, ResolvedUser, Role, UserId};
use teamgate_core::{has_role, AuthorizationEngine, Authorizer};
use teamgate_ref_club::scenarios::{
    anonymous_visit, coach_session, elevated_access, family_portal, tuned_registry,
    ScenarioSummary,
};
use teamgate_registry::Registry;
use teamgate_ui::UiConfig;

// ── CLI definition ────────────────────────────────────────────────────────────

/// teamgate: role and capability authorization for team management.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "teamgate authorization core demo",
    long_about = "Inspects the capability registry, evaluates authorization requests,\n\
                  renders UI configuration, and runs the reference club scenarios."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every role.
    Roles,
    /// List the capabilities a role is granted by the built-in table.
    Capabilities {
        #[arg(long)]
        role: Role,
    },
    /// Evaluate one request for a synthetic user.
    Check {
        #[arg(long)]
        role: Role,
        /// Raw capability value, e.g. `add_player`.
        #[arg(long)]
        capability: String,
        /// Set the admin flag on the user.
        #[arg(long)]
        admin: bool,
        /// Set the superadmin flag on the user.
        #[arg(long)]
        superadmin: bool,
    },
    /// Print the UI configuration for a role as JSON.
    Nav {
        #[arg(long)]
        role: Role,
    },
    /// Report which capabilities a registry table grants to some role.
    Coverage {
        /// TOML registry file; the built-in table when omitted.
        #[arg(long)]
        registry: Option<PathBuf>,
    },
    /// Run the five reference club scenarios.
    Scenarios,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Set RUST_LOG=debug to see every decision the engine makes.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    print_banner();

    let result = match cli.command {
        Command::Roles => list_roles(),
        Command::Capabilities { role } => list_capabilities(role),
        Command::Check {
            role,
            capability,
            admin,
            superadmin,
        } => check(role, &capability, admin, superadmin),
        Command::Nav { role } => nav(role),
        Command::Coverage { registry } => coverage(registry),
        Command::Scenarios => run_scenarios(),
    };

    if let Err(e) = result {
        eprintln!("Demo error: {}", e);
        std::process::exit(1);
    }
}

// ── Commands ──────────────────────────────────────────────────────────────────

fn list_roles() -> AuthzResult<()> {
    let registry = Registry::shared();
    for role in Role::ALL {
        println!(
            "  {:<12} {:>2} capabilities{}",
            role.as_str(),
            registry.list_capabilities_for_role(role).len(),
            if role.is_elevated() { "  (elevated)" } else { "" }
        );
    }
    Ok(())
}

fn list_capabilities(role: Role) -> AuthzResult<()> {
    println!("Capabilities granted to '{}':", role);
    for capability in Registry::shared().list_capabilities_for_role(role).iter() {
        println!("  {}", capability);
    }
    Ok(())
}

fn check(role: Role, capability: &str, admin: bool, superadmin: bool) -> AuthzResult<()> {
    let user = ResolvedUser::new(UserId::new(), role, OrganizationId::new())
        .with_admin(admin)
        .with_superadmin(superadmin);
    let engine = AuthorizationEngine::builtin();

    println!(
        "User: role={} admin={} superadmin={} (has_role(admin)={})",
        role,
        admin,
        superadmin,
        has_role(Some(&user), Role::Admin)
    );

    match engine.require_capability_named(Some(&user), capability) {
        Ok(granted) => println!("  {:<30} ALLOW", granted),
        Err(err) => println!("  {:<30} DENY [{}] {}", capability, err.status_code(), err),
    }
    Ok(())
}

fn nav(role: Role) -> AuthzResult<()> {
    println!("{:#}", UiConfig::for_role(role).to_json());
    Ok(())
}

fn coverage(path: Option<PathBuf>) -> AuthzResult<()> {
    let registry = match path {
        Some(path) => Registry::from_file(&path)?,
        None => Registry::builtin(),
    };
    let engine = AuthorizationEngine::new(Arc::new(registry));
    let report = engine.registry().coverage();

    println!("Granted by at least one role: {}", report.by_role.len());
    for capability in report.by_role.iter() {
        println!("  {}", capability);
    }
    println!();
    println!("Reachable only through elevated flags: {}", report.shortcut_only.len());
    for capability in report.shortcut_only.iter() {
        println!("  {}", capability);
    }
    Ok(())
}

fn run_scenarios() -> AuthzResult<()> {
    let runs: [(&str, fn() -> AuthzResult<ScenarioSummary>); 5] = [
        ("coach-session", coach_session::run_scenario),
        ("anonymous-visit", anonymous_visit::run_scenario),
        ("elevated-access", elevated_access::run_scenario),
        ("family-portal", family_portal::run_scenario),
        ("tuned-registry", tuned_registry::run_scenario),
    ];

    for (name, run) in runs {
        let summary = run()?;
        info!(
            scenario = name,
            allowed = summary.allowed,
            denied = summary.denied,
            "scenario finished"
        );
        if !summary.chain_verified {
            return Err(AuthzError::AuditWriteFailed {
                reason: format!("decision log for '{}' failed verification", name),
            });
        }
    }

    println!("All scenarios completed; every decision log verified.");
    Ok(())
}

// ── Banner ────────────────────────────────────────────────────────────────────

fn print_banner() {
    println!();
    println!("teamgate: role and capability authorization");
    println!("===========================================");
    println!();
    println!("Evaluation order per request:");
    println!("  [1] No resolved user              → Unauthorized (401)");
    println!("  [2] Superadmin flag               → Allow");
    println!("  [3] Admin flag                    → Allow, except superadmin-only capabilities");
    println!("  [4] Registry entry for the role   → Allow / Forbidden (403)");
    println!("  [5] Organization, team and person scope");
    println!();
}
