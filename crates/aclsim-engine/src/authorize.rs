//! Read-only authorization checks and simulated decryption.
//!
//! Decryption never mutates the record: the ACL is consulted, the outcome
//! is reported, and the payload is revealed only in the granted event's
//! message - modeling a KMS that releases the result strictly after the
//! authorization check passes.

use aclsim_core::{kms_identity, CiphertextRecord, Event, EventKind, Identity};
use serde::{Deserialize, Serialize};

/// Outcome of a decryption attempt.
///
/// `Denied` is a normal result value, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DecryptOutcome {
    /// The requester was authorized; the payload was revealed.
    Granted,
    /// The requester was not authorized.
    Denied,
}

impl DecryptOutcome {
    /// Whether the attempt succeeded.
    pub fn is_granted(self) -> bool {
        matches!(self, DecryptOutcome::Granted)
    }
}

/// Check whether a principal may decrypt the record.
///
/// True iff the identity holds a permanent or transient grant, or the
/// record is public. Pure predicate, no events.
pub fn is_authorized(record: &CiphertextRecord, identity: &Identity) -> bool {
    record.acl().is_authorized(identity)
}

/// Evaluate a decryption request against the record's ACL.
///
/// Emits a `decrypt-attempt` event, then either `decrypt-granted` (with
/// the payload in the message) or `decrypt-denied`. Events are returned
/// in production order: the attempt first, then the outcome.
pub fn attempt_decrypt(
    record: &CiphertextRecord,
    identity: &Identity,
) -> (DecryptOutcome, Vec<Event>) {
    let id = record.id();

    let attempt = Event::new(
        EventKind::DecryptAttempt,
        id,
        identity.clone(),
        format!("{identity} requested decryption of {id}"),
    );

    if is_authorized(record, identity) {
        let granted = Event::new(
            EventKind::DecryptGranted,
            id,
            kms_identity(),
            format!(
                "decryption granted: revealed \"{}\" to {identity}",
                record.payload()
            ),
        );
        (DecryptOutcome::Granted, vec![attempt, granted])
    } else {
        let denied = Event::new(
            EventKind::DecryptDenied,
            id,
            kms_identity(),
            format!("decryption denied: {identity} holds no grant on {id}"),
        );
        (DecryptOutcome::Denied, vec![attempt, denied])
    }
}
