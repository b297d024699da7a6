//! Test fixtures and helpers.
//!
//! Common setup code for integration and property tests.

use aclsim_core::{CiphertextId, Role};

use aclsim::{Simulator, SimulatorConfig};

/// A test fixture wrapping a simulator.
pub struct SimFixture {
    pub sim: Simulator,
}

impl SimFixture {
    /// Create a fixture with an empty simulator.
    pub fn new() -> Self {
        Self {
            sim: Simulator::new(),
        }
    }

    /// Create a fixture with an explicit event-log capacity.
    pub fn with_event_capacity(capacity: usize) -> Self {
        Self {
            sim: Simulator::with_config(SimulatorConfig {
                event_capacity: capacity,
            }),
        }
    }

    /// Create a fixture holding one ciphertext owned by owner-alice.
    ///
    /// The standard starting point of the walkthrough: payload
    /// `balance:1000`, default grants applied, nothing else.
    pub fn with_ciphertext() -> (Self, CiphertextId) {
        let mut fixture = Self::new();
        let id = fixture
            .sim
            .create_ciphertext(Role::OwnerAlice.identity(), "balance:1000");
        (fixture, id)
    }

    /// Create `count` ciphertexts, one per call, all owned by owner-alice.
    pub fn with_ciphertexts(count: usize) -> (Self, Vec<CiphertextId>) {
        let mut fixture = Self::new();
        let ids = (0..count)
            .map(|n| {
                fixture
                    .sim
                    .create_ciphertext(Role::OwnerAlice.identity(), format!("value {n}"))
            })
            .collect();
        (fixture, ids)
    }
}

impl Default for SimFixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aclsim_core::contract_identity;
    use aclsim_engine::DecryptOutcome;

    #[test]
    fn test_fixture_with_ciphertext() {
        let (mut fixture, id) = SimFixture::with_ciphertext();

        assert!(fixture
            .sim
            .is_authorized(id, Role::OwnerAlice.identity())
            .unwrap());
        assert!(fixture.sim.is_authorized(id, contract_identity()).unwrap());
        assert_eq!(
            fixture
                .sim
                .attempt_decrypt(id, Role::Unauthorized.identity())
                .unwrap(),
            DecryptOutcome::Denied
        );
    }

    #[test]
    fn test_fixture_with_many_ciphertexts() {
        let (fixture, ids) = SimFixture::with_ciphertexts(3);

        assert_eq!(fixture.sim.list_ciphertexts().count(), 3);
        for id in &ids {
            assert!(fixture.sim.get_ciphertext(*id).is_some());
        }
    }

    #[test]
    fn test_fixture_capacity_override() {
        let fixture = SimFixture::with_event_capacity(5);
        assert_eq!(fixture.sim.list_events().count(), 0);
    }
}
