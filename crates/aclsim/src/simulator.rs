//! The Simulator: unified API for the access-control simulation.
//!
//! Owns the live state - ciphertext records and the event log - behind a
//! single writer. The presentation layer forwards user intents into the
//! operation surface below and renders whatever [`Simulator::snapshot`]
//! (or the list accessors) returns; it holds no state of its own.

use serde::Serialize;

use aclsim_core::{CiphertextId, CiphertextRecord, Event, Identity};
use aclsim_engine::{self as engine, DecryptOutcome};
use aclsim_store::{CiphertextCollection, EventLog, DEFAULT_EVENT_CAPACITY};

use crate::error::{Result, SimulatorError};

/// Configuration for the [`Simulator`].
#[derive(Debug, Clone)]
pub struct SimulatorConfig {
    /// Maximum number of audit events retained, newest-first.
    pub event_capacity: usize,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            event_capacity: DEFAULT_EVENT_CAPACITY,
        }
    }
}

/// The main simulator struct.
///
/// Provides a unified API for:
/// - Creating ciphertext records
/// - Granting permissions (permanent, transient, public)
/// - Evaluating decryption requests
/// - Listing records and the audit log
pub struct Simulator {
    /// All live ciphertext records, in creation order.
    ciphertexts: CiphertextCollection,
    /// Rolling audit log.
    events: EventLog,
    /// Allocation counter feeding id derivation. Never reused.
    next_handle: u64,
}

impl Simulator {
    /// Create a simulator with the default configuration.
    pub fn new() -> Self {
        Self::with_config(SimulatorConfig::default())
    }

    /// Create a simulator with an explicit configuration.
    pub fn with_config(config: SimulatorConfig) -> Self {
        Self {
            ciphertexts: CiphertextCollection::new(),
            events: EventLog::with_capacity(config.event_capacity),
            next_handle: 0,
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Mutating Operations
    // ─────────────────────────────────────────────────────────────────────

    /// Create a new ciphertext owned by `owner`.
    ///
    /// Applies the fixed default policy (contract and owner permanently
    /// authorized) and returns the fresh record's id.
    pub fn create_ciphertext(
        &mut self,
        owner: impl Into<Identity>,
        payload: impl Into<String>,
    ) -> CiphertextId {
        let owner = owner.into();
        let id = CiphertextId::derive(&owner, self.next_handle);
        self.next_handle += 1;

        let (record, events) = engine::create_ciphertext(id, owner, payload);
        tracing::debug!(%id, owner = %record.owner(), "ciphertext created");

        self.ciphertexts.insert(record);
        self.events.extend(events);
        id
    }

    /// Grant an identity permanent access to a record.
    pub fn grant_permanent(
        &mut self,
        id: CiphertextId,
        identity: impl Into<Identity>,
    ) -> Result<()> {
        let identity = identity.into();
        let mut record = self.record(id)?.clone();
        let event = engine::grant_permanent(&mut record, &identity);
        tracing::debug!(%id, grantee = %identity, "permanent grant");

        self.ciphertexts.replace(record);
        self.events.push(event);
        Ok(())
    }

    /// Grant an identity transient access to a record.
    ///
    /// Transient grants are never auto-revoked in this simulation.
    pub fn grant_transient(
        &mut self,
        id: CiphertextId,
        identity: impl Into<Identity>,
    ) -> Result<()> {
        let identity = identity.into();
        let mut record = self.record(id)?.clone();
        let event = engine::grant_transient(&mut record, &identity);
        tracing::debug!(%id, grantee = %identity, "transient grant");

        self.ciphertexts.replace(record);
        self.events.push(event);
        Ok(())
    }

    /// Make a record decryptable by every principal. Monotonic.
    pub fn make_public(&mut self, id: CiphertextId) -> Result<()> {
        let mut record = self.record(id)?.clone();
        let event = engine::make_public(&mut record);
        tracing::debug!(%id, "made public");

        self.ciphertexts.replace(record);
        self.events.push(event);
        Ok(())
    }

    /// Evaluate a decryption request against a record's ACL.
    ///
    /// Read-only with respect to the record; only the audit log grows.
    /// `Denied` is a normal outcome, not an error.
    pub fn attempt_decrypt(
        &mut self,
        id: CiphertextId,
        requester: impl Into<Identity>,
    ) -> Result<DecryptOutcome> {
        let requester = requester.into();
        let record = self.record(id)?;
        let (outcome, events) = engine::attempt_decrypt(record, &requester);
        tracing::debug!(%id, requester = %requester, ?outcome, "decrypt attempt");

        self.events.extend(events);
        Ok(outcome)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Query Operations
    // ─────────────────────────────────────────────────────────────────────

    /// Check whether an identity may decrypt a record. No side effects.
    pub fn is_authorized(&self, id: CiphertextId, identity: impl Into<Identity>) -> Result<bool> {
        let identity = identity.into();
        Ok(engine::is_authorized(self.record(id)?, &identity))
    }

    /// Look up a record by id.
    pub fn get_ciphertext(&self, id: CiphertextId) -> Option<&CiphertextRecord> {
        self.ciphertexts.get(&id)
    }

    /// All live records, in creation order.
    pub fn list_ciphertexts(&self) -> impl Iterator<Item = &CiphertextRecord> {
        self.ciphertexts.iter()
    }

    /// The audit log, newest-first, capped at the configured capacity.
    pub fn list_events(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }

    /// A serializable point-in-time view for the presentation layer.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            ciphertexts: self.ciphertexts.iter().cloned().collect(),
            events: self.events.iter().cloned().collect(),
        }
    }

    fn record(&self, id: CiphertextId) -> Result<&CiphertextRecord> {
        self.ciphertexts
            .get(&id)
            .ok_or(SimulatorError::UnknownCiphertext(id))
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new()
    }
}

/// Point-in-time view of the simulation state.
///
/// Records in creation order, events newest-first.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub ciphertexts: Vec<CiphertextRecord>,
    pub events: Vec<Event>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use aclsim_core::{contract_identity, EventKind, Role};

    #[test]
    fn test_create_seeds_default_grants() {
        let mut sim = Simulator::new();
        let id = sim.create_ciphertext(Role::OwnerAlice.identity(), "balance:1000");

        assert!(sim.is_authorized(id, Role::OwnerAlice.identity()).unwrap());
        assert!(sim.is_authorized(id, contract_identity()).unwrap());
        assert!(!sim.is_authorized(id, Role::Gateway.identity()).unwrap());

        let record = sim.get_ciphertext(id).unwrap();
        assert!(!record.acl().is_public());
        assert!(record.acl().transient().is_empty());
    }

    #[test]
    fn test_ids_unique_across_records() {
        let mut sim = Simulator::new();
        let a = sim.create_ciphertext("owner-alice", "one");
        let b = sim.create_ciphertext("owner-alice", "two");
        let c = sim.create_ciphertext("generic-user", "three");

        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
        assert_eq!(sim.list_ciphertexts().count(), 3);
    }

    #[test]
    fn test_unknown_id_fails_fast() {
        let mut sim = Simulator::new();
        let bogus = CiphertextId::from_bytes([0xee; 32]);

        assert_eq!(
            sim.grant_permanent(bogus, "gateway").unwrap_err(),
            SimulatorError::UnknownCiphertext(bogus)
        );
        assert!(sim.grant_transient(bogus, "gateway").is_err());
        assert!(sim.make_public(bogus).is_err());
        assert!(sim.attempt_decrypt(bogus, "gateway").is_err());
        assert!(sim.is_authorized(bogus, "gateway").is_err());
    }

    #[test]
    fn test_decrypt_does_not_mutate_record() {
        let mut sim = Simulator::new();
        let id = sim.create_ciphertext("owner-alice", "secret");

        let before = sim.get_ciphertext(id).unwrap().clone();
        sim.attempt_decrypt(id, "unauthorized").unwrap();
        sim.attempt_decrypt(id, "owner-alice").unwrap();

        assert_eq!(sim.get_ciphertext(id).unwrap(), &before);
    }

    #[test]
    fn test_events_flow_into_log() {
        let mut sim = Simulator::new();
        let id = sim.create_ciphertext("owner-alice", "secret");
        sim.grant_transient(id, "gateway").unwrap();

        let kinds: Vec<EventKind> = sim.list_events().map(|e| e.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                EventKind::GrantTransient,
                EventKind::GrantPermanent,
                EventKind::Created,
            ]
        );
    }

    #[test]
    fn test_custom_event_capacity() {
        let mut sim = Simulator::with_config(SimulatorConfig { event_capacity: 5 });
        let id = sim.create_ciphertext("owner-alice", "secret");
        for _ in 0..10 {
            sim.make_public(id).unwrap();
        }

        assert_eq!(sim.list_events().count(), 5);
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut sim = Simulator::new();
        let id = sim.create_ciphertext("owner-alice", "balance:1000");
        sim.attempt_decrypt(id, "owner-alice").unwrap();

        let snapshot = sim.snapshot();
        assert_eq!(snapshot.ciphertexts.len(), 1);
        assert_eq!(snapshot.events.len(), 4);

        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("balance:1000"));
        assert!(json.contains("decrypt-granted"));
    }
}
