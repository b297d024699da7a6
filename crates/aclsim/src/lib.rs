//! # aclsim
//!
//! An in-memory simulation of the access-control model used by
//! fully-homomorphic-encryption smart-contract platforms. Simulated
//! encrypted values ("ciphertexts") accumulate permissions - permanent
//! grants, transient grants, a public flag - and decryption requests are
//! evaluated against that state while a rolling audit log records every
//! step.
//!
//! Nothing here is real cryptography: payloads are plain strings and the
//! KMS is a symbolic actor. The point is the rule engine - who may
//! decrypt what, and why.
//!
//! ## Key Concepts
//!
//! - **Ciphertext record**: immutable id/payload/owner plus a growing ACL.
//! - **Default policy**: a new ciphertext is immediately usable by the
//!   managing contract and its owner.
//! - **Transient grant**: named for a single unit of work but never
//!   auto-expired - the simulation has no transaction boundary.
//! - **Monotonicity**: no operation revokes. Authorization only grows.
//!
//! ## Usage
//!
//! ```rust
//! use aclsim::{DecryptOutcome, Simulator};
//!
//! let mut sim = Simulator::new();
//! let id = sim.create_ciphertext("owner-alice", "balance:1000");
//!
//! // The owner can decrypt right away; a stranger cannot.
//! assert_eq!(sim.attempt_decrypt(id, "owner-alice").unwrap(), DecryptOutcome::Granted);
//! assert_eq!(sim.attempt_decrypt(id, "unauthorized").unwrap(), DecryptOutcome::Denied);
//!
//! // Grants open the door.
//! sim.grant_transient(id, "gateway").unwrap();
//! assert_eq!(sim.attempt_decrypt(id, "gateway").unwrap(), DecryptOutcome::Granted);
//!
//! // The audit log reads newest-first.
//! for event in sim.list_events() {
//!     println!("[{}] {}", event.timestamp_display(), event.message());
//! }
//! ```
//!
//! ## Re-exports
//!
//! The component crates are re-exported for convenience:
//!
//! - `aclsim::core` - domain types (records, ACLs, events, roles)
//! - `aclsim::engine` - the stateless permission engine
//! - `aclsim::store` - the in-memory entity store

pub mod error;
pub mod simulator;

// Re-export component crates
pub use aclsim_core as core;
pub use aclsim_engine as engine;
pub use aclsim_store as store;

// Re-export main types for convenience
pub use error::{Result, SimulatorError};
pub use simulator::{Simulator, SimulatorConfig, Snapshot};

// Re-export commonly used component types
pub use aclsim_core::{
    contract_identity, kms_identity, Acl, CiphertextId, CiphertextRecord, Event, EventKind,
    Identity, Role,
};
pub use aclsim_engine::DecryptOutcome;
pub use aclsim_store::DEFAULT_EVENT_CAPACITY;
