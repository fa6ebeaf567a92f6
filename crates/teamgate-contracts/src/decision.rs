//! Decision outcomes and decision records.
//!
//! `Decision` is what a guarded check produces. `DecisionRecord` is what the
//! route-layer guard hands to a `DecisionSink`, one per enforced request.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    error::{AuthzError, ErrorKind},
    role::Role,
    user::{ResolvedUser, Scope, UserId},
};

/// The outcome of one enforced authorization check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Decision {
    /// The guarded action may run.
    Allow,

    /// The guarded action must not run.
    Deny {
        /// Machine-readable reason.
        kind: ErrorKind,
        /// Human-readable explanation, written to the audit log.
        reason: String,
    },
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allow)
    }

    /// Build a denial from the error that caused it.
    pub fn denied_by(err: &AuthzError) -> Self {
        Decision::Deny {
            kind: err.kind(),
            reason: err.to_string(),
        }
    }
}

/// An immutable record of one enforced check.
///
/// The capability is kept as the raw requested string so that requests for
/// unknown capabilities are recorded verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionRecord {
    /// `None` for anonymous requests.
    pub user_id: Option<UserId>,
    pub primary_role: Option<Role>,
    pub is_admin: bool,
    pub is_superadmin: bool,
    pub capability: String,
    pub scope: Option<Scope>,
    pub decision: Decision,
    /// Wall-clock time the record was created (UTC).
    pub timestamp: DateTime<Utc>,
}

impl DecisionRecord {
    pub fn new(
        user: Option<&ResolvedUser>,
        capability: impl Into<String>,
        scope: Option<Scope>,
        decision: Decision,
    ) -> Self {
        Self {
            user_id: user.map(|u| u.id),
            primary_role: user.map(|u| u.primary_role),
            is_admin: user.is_some_and(|u| u.is_admin),
            is_superadmin: user.is_some_and(|u| u.is_superadmin),
            capability: capability.into(),
            scope,
            decision,
            timestamp: Utc::now(),
        }
    }
}
