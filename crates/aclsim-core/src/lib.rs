//! # aclsim Core
//!
//! Pure domain types for the aclsim permission simulation: ciphertext
//! records, access-control lists, audit events, and the fixed cast of
//! principals.
//!
//! This crate contains no I/O and no engine logic. It is plain data with
//! the invariants the simulation relies on (set-semantic grantee lists,
//! immutable record fields, a monotonic public flag).
//!
//! ## Key Types
//!
//! - [`CiphertextRecord`] - One simulated encrypted value and its ACL
//! - [`CiphertextId`] - Identifier for a record (domain-separated Blake3)
//! - [`Acl`] - Permanent/transient grantee sets plus the public flag
//! - [`Event`] - An immutable audit-log entry
//! - [`Role`] - The fixed principal cast the presentation layer offers

pub mod acl;
pub mod error;
pub mod event;
pub mod record;
pub mod roles;
pub mod types;

pub use acl::Acl;
pub use error::{CoreError, Result};
pub use event::{Event, EventKind};
pub use record::CiphertextRecord;
pub use roles::{contract_identity, kms_identity, Role};
pub use types::{CiphertextId, Identity};
