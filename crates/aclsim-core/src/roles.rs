//! The fixed cast of principals.
//!
//! The presentation layer offers role selection from this enumerated set;
//! the engine itself accepts any [`Identity`]. Two identities are special:
//! the managing contract (target of the default "allow this" grant at
//! creation) and the symbolic KMS actor named in decrypt outcome events.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::Identity;

/// A selectable principal in the simulation UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    /// An ordinary user with no special standing.
    GenericUser,
    /// The principal that creates ciphertexts in the walkthrough.
    OwnerAlice,
    /// The smart contract managing the encrypted values.
    Contract,
    /// The decryption gateway service.
    Gateway,
    /// A principal that never receives a grant.
    Unauthorized,
}

impl Role {
    /// Every selectable role, in display order.
    pub const ALL: [Role; 5] = [
        Role::GenericUser,
        Role::OwnerAlice,
        Role::Contract,
        Role::Gateway,
        Role::Unauthorized,
    ];

    /// Stable kebab-case name, matching the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::GenericUser => "generic-user",
            Role::OwnerAlice => "owner-alice",
            Role::Contract => "contract",
            Role::Gateway => "gateway",
            Role::Unauthorized => "unauthorized",
        }
    }

    /// The identity string this role acts under.
    pub fn identity(self) -> Identity {
        Identity::new(self.as_str())
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "generic-user" => Ok(Role::GenericUser),
            "owner-alice" => Ok(Role::OwnerAlice),
            "contract" => Ok(Role::Contract),
            "gateway" => Ok(Role::Gateway),
            "unauthorized" => Ok(Role::Unauthorized),
            other => Err(CoreError::UnknownRole(other.to_string())),
        }
    }
}

/// Identity of the managing contract.
///
/// Newly created ciphertexts grant this identity permanent access as part
/// of the fixed default policy.
pub fn contract_identity() -> Identity {
    Role::Contract.identity()
}

/// Symbolic actor for the authorization service / KMS.
///
/// Used as the actor on decrypt outcome events: the entity that would
/// perform real decryption after the check passes.
pub fn kms_identity() -> Identity {
    Identity::new("kms")
}
