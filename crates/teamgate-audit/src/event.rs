//! Audit event and log types.
//!
//! `AuditEvent` wraps a `DecisionRecord` with a sequence number and the
//! SHA-256 hashes that link it to its predecessor. `DecisionLog` is the
//! exported snapshot of one log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use teamgate_contracts::DecisionRecord;

/// A single entry in the hash chain.
///
/// Modifying any field, including those of the embedded `record`,
/// invalidates `this_hash` and every later `prev_hash`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEvent {
    /// Position in the chain, starting at 0.
    pub sequence: u64,

    /// The log this event belongs to.
    pub log_id: String,

    pub record: DecisionRecord,

    /// Hex SHA-256 of the previous event, or `GENESIS_HASH` for the first.
    pub prev_hash: String,

    /// Hex SHA-256 over (log_id, sequence, prev_hash, canonical JSON of record).
    pub this_hash: String,
}

impl AuditEvent {
    /// The `prev_hash` of the first event in every chain: 64 hex zeros.
    pub const GENESIS_HASH: &'static str =
        "0000000000000000000000000000000000000000000000000000000000000000";
}

/// An exported snapshot of a decision log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionLog {
    pub log_id: String,

    /// All events in chain order (sequence 0 first).
    pub events: Vec<AuditEvent>,

    pub exported_at: DateTime<Utc>,

    /// `this_hash` of the last event; empty for an empty log.
    pub terminal_hash: String,
}

impl DecisionLog {
    /// Number of events whose decision was a denial.
    pub fn denial_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| !e.record.decision.is_allowed())
            .count()
    }
}
