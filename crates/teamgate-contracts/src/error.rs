//! Authorization error types.
//!
//! `has_*` checks never fail; they degrade to `false`. Only the `require_*`
//! variants and the route-layer guard return these errors, and each variant
//! maps to the response the caller should produce.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The unified error type for the teamgate crates.
#[derive(Debug, Error)]
pub enum AuthzError {
    /// No resolved user. The caller should redirect to sign-in.
    #[error("unauthorized: no resolved user")]
    Unauthorized,

    /// The resolved user lacks the capability, or holds it outside the
    /// requested scope.
    #[error("forbidden: capability '{capability}' denied: {reason}")]
    Forbidden { capability: String, reason: String },

    /// A capability value outside the closed enumeration.
    ///
    /// This is an integration defect, never a normal denial.
    #[error("capability '{value}' is not a known capability")]
    CapabilityNotFound { value: String },

    /// A role value outside the closed enumeration.
    #[error("role '{value}' is not a known role")]
    RoleNotFound { value: String },

    /// Registry configuration is missing, malformed, or violates an invariant.
    #[error("configuration error: {reason}")]
    Config { reason: String },

    /// The decision sink could not persist a record.
    ///
    /// Fatal: a decision that cannot be recorded is treated as a denial.
    #[error("decision audit write failed: {reason}")]
    AuditWriteFailed { reason: String },
}

/// Machine-readable error kind, carried on audit records and API payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Unauthorized,
    Forbidden,
    CapabilityNotFound,
    RoleNotFound,
    Config,
    AuditWriteFailed,
}

impl AuthzError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthzError::Unauthorized => ErrorKind::Unauthorized,
            AuthzError::Forbidden { .. } => ErrorKind::Forbidden,
            AuthzError::CapabilityNotFound { .. } => ErrorKind::CapabilityNotFound,
            AuthzError::RoleNotFound { .. } => ErrorKind::RoleNotFound,
            AuthzError::Config { .. } => ErrorKind::Config,
            AuthzError::AuditWriteFailed { .. } => ErrorKind::AuditWriteFailed,
        }
    }

    /// The HTTP status a route handler should answer with.
    pub fn status_code(&self) -> u16 {
        match self.kind() {
            ErrorKind::Unauthorized => 401,
            ErrorKind::Forbidden => 403,
            ErrorKind::CapabilityNotFound | ErrorKind::RoleNotFound => 400,
            ErrorKind::Config | ErrorKind::AuditWriteFailed => 500,
        }
    }
}

/// Convenience alias used throughout the teamgate crates.
pub type AuthzResult<T> = Result<T, AuthzError>;
