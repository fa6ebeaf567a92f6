//! # teamgate-audit
//!
//! Append-only, SHA-256 hash-chained log of enforced authorization decisions.
//!
//! Every decision the [`Guard`](teamgate_core::Guard) enforces is wrapped in
//! an `AuditEvent` that links to the previous event via its hash. Changing a
//! stored event breaks the chain and is detected by `verify_chain`.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use teamgate_audit::InMemoryDecisionLog;
//! use teamgate_core::{AuthorizationEngine, Guard};
//!
//! let log = InMemoryDecisionLog::new("club-api");
//! let guard = Guard::new(Box::new(AuthorizationEngine::builtin()), Box::new(log.clone()));
//! guard.enforce(user.as_ref(), "add_player", None)?;
//! assert!(log.verify_integrity());
//! ```

pub mod chain;
pub mod event;
pub mod memory;

pub use chain::{hash_event, verify_chain};
pub use event::{AuditEvent, DecisionLog};
pub use memory::InMemoryDecisionLog;

// ── Tests ─────────────────────────────────────────────────────────────────────
