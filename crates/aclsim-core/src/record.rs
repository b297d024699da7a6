//! Ciphertext record: one simulated encrypted value.
//!
//! The payload is an opaque string standing in for plaintext that is never
//! really encrypted. `id`, `payload`, and `owner` are fixed at creation;
//! only the ACL changes over a record's lifetime.

use serde::{Deserialize, Serialize};

use crate::acl::Acl;
use crate::types::{CiphertextId, Identity};

/// One simulated encrypted value and its access-control state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CiphertextRecord {
    id: CiphertextId,
    payload: String,
    owner: Identity,
    acl: Acl,
}

impl CiphertextRecord {
    /// Create a record with an empty ACL.
    ///
    /// Callers that want the platform's default policy (contract and owner
    /// pre-authorized) should go through the engine's create operation
    /// rather than constructing records directly.
    pub fn new(id: CiphertextId, owner: Identity, payload: impl Into<String>) -> Self {
        Self {
            id,
            payload: payload.into(),
            owner,
            acl: Acl::new(),
        }
    }

    /// The record's identifier.
    pub fn id(&self) -> CiphertextId {
        self.id
    }

    /// The simulated plaintext.
    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// The creating principal.
    pub fn owner(&self) -> &Identity {
        &self.owner
    }

    /// The record's access-control state.
    pub fn acl(&self) -> &Acl {
        &self.acl
    }

    /// Mutable access to the ACL. The only mutable surface of a record.
    pub fn acl_mut(&mut self) -> &mut Acl {
        &mut self.acl
    }

    /// Check whether a principal may decrypt this record.
    pub fn is_authorized(&self, identity: &Identity) -> bool {
        self.acl.is_authorized(identity)
    }
}
