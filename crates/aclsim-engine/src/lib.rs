//! # aclsim Engine
//!
//! The permission engine: the rule-based heart of the simulation.
//!
//! ## Overview
//!
//! Every operation is a deterministic function of the current record and
//! its arguments - no hidden state, no failure modes. Mutating operations
//! take the record by `&mut` and return the audit events they produced;
//! the authorization check and decrypt evaluation are read-only.
//!
//! ## Key Concepts
//!
//! - **Default policy**: a new ciphertext is immediately usable by the
//!   managing contract and by its owner, without an extra round trip.
//! - **Transient grants**: scoped to "the current unit of work" in name
//!   only. The simulation has no transaction boundary, so they persist
//!   for the session. This is deliberate and preserved.
//! - **No revocation**: nothing removes a grantee or clears the public
//!   flag. Authorization only ever grows.
//!
//! ## Usage
//!
//! ```rust
//! use aclsim_core::{CiphertextId, Identity};
//! use aclsim_engine::{attempt_decrypt, create_ciphertext, DecryptOutcome};
//!
//! let owner = Identity::new("owner-alice");
//! let id = CiphertextId::derive(&owner, 0);
//! let (record, _events) = create_ciphertext(id, owner.clone(), "balance:1000");
//!
//! let (outcome, _log) = attempt_decrypt(&record, &owner);
//! assert_eq!(outcome, DecryptOutcome::Granted);
//! ```

pub mod authorize;
pub mod ops;

pub use authorize::{attempt_decrypt, is_authorized, DecryptOutcome};
pub use ops::{allow_this, create_ciphertext, grant_permanent, grant_transient, make_public};
