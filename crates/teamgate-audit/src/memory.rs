//! In-memory implementation of `DecisionSink`.
//!
//! `InMemoryDecisionLog` keeps all events in a `Vec` behind a `Mutex`, so one
//! log can be shared by every request handler in the process.

use std::sync::{Arc, Mutex};

use chrono::Utc;
use tracing::{debug, info};

use teamgate_contracts::{AuthzError, AuthzResult, DecisionRecord};
use teamgate_core::DecisionSink;

use crate::{
    chain::{hash_event, verify_chain},
    event::{AuditEvent, DecisionLog},
};

pub(crate) struct LogState {
    /// All events written so far, in append order.
    pub(crate) events: Vec<AuditEvent>,

    /// The next sequence number to assign.
    pub(crate) sequence: u64,

    /// `this_hash` of the last event, or `GENESIS_HASH` before any write.
    pub(crate) last_hash: String,
}

/// An in-memory, append-only decision log backed by a SHA-256 hash chain.
///
/// Clones share the same underlying log.
#[derive(Clone)]
pub struct InMemoryDecisionLog {
    log_id: String,
    pub(crate) state: Arc<Mutex<LogState>>,
}

impl InMemoryDecisionLog {
    pub fn new(log_id: impl Into<String>) -> Self {
        Self {
            log_id: log_id.into(),
            state: Arc::new(Mutex::new(LogState {
                events: Vec::new(),
                sequence: 0,
                last_hash: AuditEvent::GENESIS_HASH.to_string(),
            })),
        }
    }

    pub fn log_id(&self) -> &str {
        &self.log_id
    }

    fn lock(&self) -> AuthzResult<std::sync::MutexGuard<'_, LogState>> {
        self.state.lock().map_err(|e| AuthzError::AuditWriteFailed {
            reason: format!("decision log lock poisoned: {}", e),
        })
    }

    /// Export a snapshot containing every event written so far.
    pub fn export_log(&self) -> AuthzResult<DecisionLog> {
        let state = self.lock()?;
        let terminal_hash = state
            .events
            .last()
            .map(|e| e.this_hash.clone())
            .unwrap_or_default();

        info!(
            log_id = %self.log_id,
            event_count = state.events.len(),
            terminal_hash = %terminal_hash,
            "decision log exported"
        );

        Ok(DecisionLog {
            log_id: self.log_id.clone(),
            events: state.events.clone(),
            exported_at: Utc::now(),
            terminal_hash,
        })
    }

    /// Verify that the in-memory chain has not been tampered with.
    ///
    /// A poisoned lock counts as a failed verification.
    pub fn verify_integrity(&self) -> bool {
        self.lock().map(|state| verify_chain(&state.events)).unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.lock().map(|state| state.events.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DecisionSink for InMemoryDecisionLog {
    /// Append one decision record to the hash chain.
    fn record(&self, record: &DecisionRecord) -> AuthzResult<()> {
        let mut state = self.lock()?;

        let prev_hash = state.last_hash.clone();
        let sequence = state.sequence;
        let this_hash = hash_event(&self.log_id, sequence, record, &prev_hash)?;

        state.events.push(AuditEvent {
            sequence,
            log_id: self.log_id.clone(),
            record: record.clone(),
            prev_hash,
            this_hash: this_hash.clone(),
        });
        state.sequence += 1;
        state.last_hash = this_hash;

        debug!(log_id = %self.log_id, sequence, "decision appended");
        Ok(())
    }
}
