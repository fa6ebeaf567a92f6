//! Linking decision records into a SHA-256 chain.
//!
//! An event's digest commits to the log it lives in, its position, the digest
//! of the event before it and the compact JSON form of its `DecisionRecord`,
//! fed to the hasher in that order. The position is fed as eight
//! little-endian bytes.

use sha2::{Digest, Sha256};

use teamgate_contracts::{AuthzError, AuthzResult, DecisionRecord};

use crate::event::AuditEvent;

/// Digest of one event, as 64 lowercase hex characters.
///
/// Fails with `AuditWriteFailed` when the record cannot be encoded, so the
/// guard refuses the request instead of logging an unverifiable entry.
pub fn hash_event(
    log_id: &str,
    sequence: u64,
    record: &DecisionRecord,
    prev_hash: &str,
) -> AuthzResult<String> {
    let encoded = serde_json::to_vec(record).map_err(|e| AuthzError::AuditWriteFailed {
        reason: format!("decision record is not serializable: {}", e),
    })?;

    let digest = Sha256::new()
        .chain_update(log_id.as_bytes())
        .chain_update(sequence.to_le_bytes())
        .chain_update(prev_hash.as_bytes())
        .chain_update(&encoded)
        .finalize();

    Ok(hex::encode(digest))
}

/// Does `event` sit at `position` directly after a predecessor whose
/// digest is `prev`?
fn links_to(event: &AuditEvent, position: usize, prev: &str) -> bool {
    event.sequence == position as u64
        && event.prev_hash == prev
        && hash_event(&event.log_id, event.sequence, &event.record, &event.prev_hash)
            .is_ok_and(|digest| digest == event.this_hash)
}

/// True when `events` forms an unbroken chain from the genesis digest.
///
/// Sequence numbers must count up from zero, each event must name its
/// predecessor's digest, and each stored digest must match a fresh
/// recomputation. The empty chain passes.
pub fn verify_chain(events: &[AuditEvent]) -> bool {
    events
        .iter()
        .enumerate()
        .try_fold(AuditEvent::GENESIS_HASH, |prev, (position, event)| {
            links_to(event, position, prev).then_some(event.this_hash.as_str())
        })
        .is_some()
}
