//! Audit events.
//!
//! Every engine operation produces one or more immutable events. The store
//! keeps only the most recent entries, newest first, so events double as
//! the simulation's rolling activity feed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{CiphertextId, Identity};

/// The kind of audit event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventKind {
    /// A ciphertext record was created.
    Created,
    /// An identity received a permanent grant.
    GrantPermanent,
    /// An identity received a transient grant.
    GrantTransient,
    /// The record was made publicly decryptable.
    MakePublic,
    /// An identity requested decryption.
    DecryptAttempt,
    /// The authorization check passed and the payload was revealed.
    DecryptGranted,
    /// The authorization check failed.
    DecryptDenied,
}

impl EventKind {
    /// Stable kebab-case name, matching the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::Created => "created",
            EventKind::GrantPermanent => "grant-permanent",
            EventKind::GrantTransient => "grant-transient",
            EventKind::MakePublic => "make-public",
            EventKind::DecryptAttempt => "decrypt-attempt",
            EventKind::DecryptGranted => "decrypt-granted",
            EventKind::DecryptDenied => "decrypt-denied",
        }
    }

    /// Try to parse from the kebab-case name.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "created" => Some(EventKind::Created),
            "grant-permanent" => Some(EventKind::GrantPermanent),
            "grant-transient" => Some(EventKind::GrantTransient),
            "make-public" => Some(EventKind::MakePublic),
            "decrypt-attempt" => Some(EventKind::DecryptAttempt),
            "decrypt-granted" => Some(EventKind::DecryptGranted),
            "decrypt-denied" => Some(EventKind::DecryptDenied),
            _ => None,
        }
    }

    /// Whether this kind belongs to the decryption flow.
    pub fn is_decrypt(self) -> bool {
        matches!(
            self,
            EventKind::DecryptAttempt | EventKind::DecryptGranted | EventKind::DecryptDenied
        )
    }

    /// Whether this kind records an authorization change.
    pub fn is_grant(self) -> bool {
        matches!(
            self,
            EventKind::GrantPermanent | EventKind::GrantTransient | EventKind::MakePublic
        )
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An immutable audit entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Capture time, assigned when the event is produced.
    timestamp: DateTime<Utc>,

    /// What happened.
    kind: EventKind,

    /// The ciphertext record this event concerns.
    subject_id: CiphertextId,

    /// Who or what triggered the event. A principal identity, or a
    /// symbolic system actor such as the authorization service.
    actor: Identity,

    /// Human-readable description.
    message: String,
}

impl Event {
    /// Create an event stamped with the current time.
    pub fn new(
        kind: EventKind,
        subject_id: CiphertextId,
        actor: Identity,
        message: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            kind,
            subject_id,
            actor,
            message: message.into(),
        }
    }

    /// Capture time.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Capture time formatted for display, e.g. `14:03:07`.
    pub fn timestamp_display(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }

    /// The event kind.
    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// The record this event concerns.
    pub fn subject_id(&self) -> CiphertextId {
        self.subject_id
    }

    /// Who triggered the event.
    pub fn actor(&self) -> &Identity {
        &self.actor
    }

    /// Human-readable description.
    pub fn message(&self) -> &str {
        &self.message
    }
}
