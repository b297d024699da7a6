//! Access-control state for a single ciphertext.
//!
//! An [`Acl`] holds two grantee sets (permanent and transient) and the
//! public flag. Grants are set unions, so granting the same identity twice
//! is a no-op. Nothing here removes authorization: there is no revocation
//! operation, and the public flag never resets.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::types::Identity;

/// The access-control lists attached to one ciphertext record.
///
/// A principal `p` is authorized iff `p` is in the permanent set, `p` is in
/// the transient set, or the record has been made public.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acl {
    /// Principals with indefinite authorization.
    permanent: BTreeSet<Identity>,

    /// Principals authorized for "the current operation". The simulation
    /// has no transaction boundary, so these are never cleared.
    transient: BTreeSet<Identity>,

    /// Once set, every principal is authorized. Monotonic.
    public: bool,
}

impl Acl {
    /// Create an empty ACL: no grantees, not public.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a permanent grantee. Returns true if the identity was not
    /// already present.
    pub fn grant_permanent(&mut self, identity: Identity) -> bool {
        self.permanent.insert(identity)
    }

    /// Add a transient grantee. Returns true if the identity was not
    /// already present.
    pub fn grant_transient(&mut self, identity: Identity) -> bool {
        self.transient.insert(identity)
    }

    /// Set the public flag. Returns true if the flag was newly set.
    pub fn make_public(&mut self) -> bool {
        !std::mem::replace(&mut self.public, true)
    }

    /// Check whether a principal is authorized.
    pub fn is_authorized(&self, identity: &Identity) -> bool {
        self.public || self.permanent.contains(identity) || self.transient.contains(identity)
    }

    /// Whether the record is publicly decryptable.
    pub fn is_public(&self) -> bool {
        self.public
    }

    /// The permanent grantee set.
    pub fn permanent(&self) -> &BTreeSet<Identity> {
        &self.permanent
    }

    /// The transient grantee set.
    pub fn transient(&self) -> &BTreeSet<Identity> {
        &self.transient
    }

    /// Whether an identity holds a permanent grant.
    pub fn has_permanent(&self, identity: &Identity) -> bool {
        self.permanent.contains(identity)
    }

    /// Whether an identity holds a transient grant.
    pub fn has_transient(&self, identity: &Identity) -> bool {
        self.transient.contains(identity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(name: &str) -> Identity {
        Identity::new(name)
    }

    #[test]
    fn test_empty_acl_authorizes_nobody() {
        let acl = Acl::new();
        assert!(!acl.is_authorized(&id("owner-alice")));
        assert!(!acl.is_public());
        assert!(acl.permanent().is_empty());
        assert!(acl.transient().is_empty());
    }

    #[test]
    fn test_permanent_grant_authorizes() {
        let mut acl = Acl::new();
        assert!(acl.grant_permanent(id("gateway")));
        assert!(acl.is_authorized(&id("gateway")));
        assert!(!acl.is_authorized(&id("unauthorized")));
    }

    #[test]
    fn test_grant_idempotent() {
        let mut acl = Acl::new();
        assert!(acl.grant_permanent(id("gateway")));
        assert!(!acl.grant_permanent(id("gateway")));
        assert_eq!(acl.permanent().len(), 1);

        assert!(acl.grant_transient(id("gateway")));
        assert!(!acl.grant_transient(id("gateway")));
        assert_eq!(acl.transient().len(), 1);
    }

    #[test]
    fn test_transient_grant_authorizes_and_persists() {
        let mut acl = Acl::new();
        acl.grant_transient(id("gateway"));
        assert!(acl.is_authorized(&id("gateway")));
        // No transaction boundary: still authorized after further grants.
        acl.grant_permanent(id("owner-alice"));
        assert!(acl.is_authorized(&id("gateway")));
        assert!(acl.has_transient(&id("gateway")));
    }

    #[test]
    fn test_make_public_authorizes_everyone() {
        let mut acl = Acl::new();
        assert!(acl.make_public());
        assert!(acl.is_public());
        assert!(acl.is_authorized(&id("anyone-not-previously-granted")));
    }

    #[test]
    fn test_make_public_idempotent() {
        let mut acl = Acl::new();
        assert!(acl.make_public());
        assert!(!acl.make_public());
        assert!(acl.is_public());
    }

    #[test]
    fn test_sets_are_independent() {
        let mut acl = Acl::new();
        acl.grant_permanent(id("contract"));
        assert!(acl.has_permanent(&id("contract")));
        assert!(!acl.has_transient(&id("contract")));
    }
}
