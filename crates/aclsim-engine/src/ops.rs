//! State-transition operations.
//!
//! Each operation mutates a record's ACL and returns the events describing
//! what happened, in production order. None of them can fail: inputs come
//! from a controlled UI and grants are idempotent set unions.

use aclsim_core::{
    contract_identity, CiphertextId, CiphertextRecord, Event, EventKind, Identity,
};

/// Create a ciphertext record and apply the fixed default policy.
///
/// The fresh record starts with an empty ACL, then receives two permanent
/// grants: the managing contract first (the "allow this" convenience),
/// then the owner. Returns the record and exactly two events - one for
/// the creation, one describing the default grants.
pub fn create_ciphertext(
    id: CiphertextId,
    owner: Identity,
    payload: impl Into<String>,
) -> (CiphertextRecord, Vec<Event>) {
    let mut record = CiphertextRecord::new(id, owner.clone(), payload);

    let created = Event::new(
        EventKind::Created,
        id,
        owner.clone(),
        format!("{owner} encrypted a new value ({id})"),
    );

    // Default policy: contract first, then owner.
    let contract = contract_identity();
    record.acl_mut().grant_permanent(contract.clone());
    record.acl_mut().grant_permanent(owner.clone());

    let defaults = Event::new(
        EventKind::GrantPermanent,
        id,
        owner,
        format!(
            "default grants applied to {id}: {contract} and {} may decrypt",
            record.owner()
        ),
    );

    (record, vec![created, defaults])
}

/// Grant an identity indefinite authorization. Idempotent.
pub fn grant_permanent(record: &mut CiphertextRecord, identity: &Identity) -> Event {
    record.acl_mut().grant_permanent(identity.clone());
    Event::new(
        EventKind::GrantPermanent,
        record.id(),
        identity.clone(),
        format!("{identity} granted permanent access to {}", record.id()),
    )
}

/// Grant an identity authorization for the current unit of work.
///
/// Idempotent. Never auto-revoked: the simulation has no transaction
/// boundary, so the grant persists for the session.
pub fn grant_transient(record: &mut CiphertextRecord, identity: &Identity) -> Event {
    record.acl_mut().grant_transient(identity.clone());
    Event::new(
        EventKind::GrantTransient,
        record.id(),
        identity.clone(),
        format!("{identity} granted transient access to {}", record.id()),
    )
}

/// Grant the managing contract permanent access.
///
/// Convenience mirroring the platform's `allowThis`: contracts re-grant
/// themselves after producing a new ciphertext.
pub fn allow_this(record: &mut CiphertextRecord) -> Event {
    grant_permanent(record, &contract_identity())
}

/// Make the record decryptable by every principal.
///
/// Monotonic and idempotent on state; an event is emitted either way.
pub fn make_public(record: &mut CiphertextRecord) -> Event {
    record.acl_mut().make_public();
    Event::new(
        EventKind::MakePublic,
        record.id(),
        record.owner().clone(),
        format!("{} is now publicly decryptable", record.id()),
    )
}
