//! Error types for the simulator facade.

use aclsim_core::CiphertextId;
use thiserror::Error;

/// Errors that can occur during simulator operations.
///
/// A denied decryption is NOT an error - it is a normal
/// [`DecryptOutcome`](aclsim_engine::DecryptOutcome) value. The only
/// failure here is a contract violation: an operation referencing an id
/// that was never created, which the controlled UI boundary guarantees
/// cannot happen in correct usage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulatorError {
    /// No record with this id exists.
    #[error("unknown ciphertext: {0}")]
    UnknownCiphertext(CiphertextId),
}

/// Result type for simulator operations.
pub type Result<T> = std::result::Result<T, SimulatorError>;
