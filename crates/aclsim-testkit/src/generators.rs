//! Proptest generators for property-based testing.

use proptest::prelude::*;

use aclsim_core::{CiphertextId, Identity, Role};

use aclsim::Simulator;

/// Generate an arbitrary identity name.
pub fn identity() -> impl Strategy<Value = Identity> {
    "[a-z][a-z0-9-]{0,15}".prop_map(Identity::new)
}

/// Generate an identity from the fixed role cast.
pub fn role() -> impl Strategy<Value = Role> {
    prop_oneof![
        Just(Role::GenericUser),
        Just(Role::OwnerAlice),
        Just(Role::Contract),
        Just(Role::Gateway),
        Just(Role::Unauthorized),
    ]
}

/// Generate a payload string.
pub fn payload() -> impl Strategy<Value = String> {
    "[a-z]{1,8}:[a-z0-9]{1,12}".prop_map(String::from)
}

/// One in-scope operation against a single record.
#[derive(Debug, Clone)]
pub enum Op {
    GrantPermanent(Identity),
    GrantTransient(Identity),
    MakePublic,
    AttemptDecrypt(Identity),
}

impl Op {
    /// Run this operation against a live record.
    pub fn apply(&self, sim: &mut Simulator, id: CiphertextId) {
        match self {
            Op::GrantPermanent(who) => sim.grant_permanent(id, who.clone()).unwrap(),
            Op::GrantTransient(who) => sim.grant_transient(id, who.clone()).unwrap(),
            Op::MakePublic => sim.make_public(id).unwrap(),
            Op::AttemptDecrypt(who) => {
                sim.attempt_decrypt(id, who.clone()).unwrap();
            }
        }
    }
}

/// Generate a single operation.
pub fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        identity().prop_map(Op::GrantPermanent),
        identity().prop_map(Op::GrantTransient),
        Just(Op::MakePublic),
        identity().prop_map(Op::AttemptDecrypt),
    ]
}

/// Generate a sequence of operations of the given maximum length.
pub fn op_sequence(max_len: usize) -> impl Strategy<Value = Vec<Op>> {
    prop::collection::vec(op(), 0..=max_len)
}
