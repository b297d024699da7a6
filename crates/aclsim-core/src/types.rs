//! Strong identifier types for the simulation.
//!
//! Identifiers are newtypes to prevent misuse at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 32-byte ciphertext identifier.
///
/// Derived from the owner identity and a per-simulator handle counter, so
/// ids are unique across all live records, stable for a record's lifetime,
/// and never reused.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CiphertextId(pub [u8; 32]);

impl CiphertextId {
    /// Derive an id from the owning principal and an allocation handle.
    pub fn derive(owner: &Identity, handle: u64) -> Self {
        let mut hasher = blake3::Hasher::new();
        hasher.update(b"aclsim-ciphertext-v0:");
        hasher.update(owner.as_str().as_bytes());
        hasher.update(b":");
        hasher.update(&handle.to_le_bytes());
        Self(*hasher.finalize().as_bytes())
    }

    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from hex string.
    pub fn from_hex(s: &str) -> std::result::Result<Self, hex::FromHexError> {
        let bytes = hex::decode(s)?;
        if bytes.len() != 32 {
            return Err(hex::FromHexError::InvalidStringLength);
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }

    /// The zero id (sentinel).
    pub const ZERO: Self = Self([0u8; 32]);
}

impl fmt::Debug for CiphertextId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CiphertextId({})", &self.to_hex()[..16])
    }
}

impl fmt::Display for CiphertextId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.to_hex()[..16])
    }
}

impl AsRef<[u8]> for CiphertextId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 32]> for CiphertextId {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

/// The identity of a principal.
///
/// Plain strings drawn from a fixed set in the UI, but any string is a
/// valid identity as far as the engine is concerned. Ordered so grantee
/// sets iterate deterministically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(String);

impl Identity {
    /// Construct an identity from any string-like value.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the identity as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Identity {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Identity {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for Identity {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ciphertext_id_hex_roundtrip() {
        let id = CiphertextId::from_bytes([0x42; 32]);
        let hex = id.to_hex();
        let recovered = CiphertextId::from_hex(&hex).unwrap();
        assert_eq!(id, recovered);
    }

    #[test]
    fn test_ciphertext_id_display_truncated() {
        let id = CiphertextId::from_bytes([0xab; 32]);
        assert_eq!(format!("{}", id), "abababababababab");
    }

    #[test]
    fn test_ciphertext_id_derive_deterministic() {
        let owner = Identity::new("owner-alice");
        let a = CiphertextId::derive(&owner, 7);
        let b = CiphertextId::derive(&owner, 7);
        assert_eq!(a, b);
    }

    #[test]
    fn test_ciphertext_id_derive_unique_per_handle() {
        let owner = Identity::new("owner-alice");
        assert_ne!(
            CiphertextId::derive(&owner, 0),
            CiphertextId::derive(&owner, 1)
        );
    }

    #[test]
    fn test_ciphertext_id_derive_unique_per_owner() {
        assert_ne!(
            CiphertextId::derive(&Identity::new("owner-alice"), 0),
            CiphertextId::derive(&Identity::new("gateway"), 0)
        );
    }

    #[test]
    fn test_identity_display() {
        let id = Identity::new("gateway");
        assert_eq!(id.to_string(), "gateway");
        assert_eq!(id.as_str(), "gateway");
    }

    #[test]
    fn test_from_hex_rejects_wrong_length() {
        assert!(CiphertextId::from_hex("abcd").is_err());
    }
}
