use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque caller identity (account handle, encoded public key, ...).
///
/// The registry never authenticates an identity; it only compares identities
/// for equality and table membership.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(pub String);

impl Identity {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Identity {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Identity {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Registry-assigned credential identifier. The first issued credential is 1.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CredentialId(pub u64);

impl CredentialId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for CredentialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for CredentialId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Reference to off-registry credential content (e.g. an IPFS CID).
///
/// Compared byte-for-byte; the registry enforces uniqueness, not authenticity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CredentialHash(pub String);

impl CredentialHash {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Exact byte comparison against a candidate presented for verification.
    pub fn matches(&self, candidate: &str) -> bool {
        self.0.as_bytes() == candidate.as_bytes()
    }
}

impl fmt::Display for CredentialHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CredentialHash {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for CredentialHash {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// An institution authorized by the registry owner to issue credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Institution {
    /// Display name. Replaced only by an overwriting re-add.
    pub name: String,
    /// Cleared by the owner on deactivation. Only a re-add under
    /// `DuplicateInstitutionPolicy::Overwrite` sets it back to true.
    pub is_active: bool,
}

impl Institution {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_active: true,
        }
    }
}

/// An issued academic credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub id: CredentialId,
    pub student_name: String,
    pub course_name: String,
    pub credential_hash: CredentialHash,
    /// Institution that issued the credential; the only identity allowed to revoke it.
    pub issuer: Identity,
    /// Cleared on revocation. Never set back to true.
    pub is_valid: bool,
}

impl Credential {
    /// Whether `candidate` matches this record and the record is still valid.
    pub fn verifies(&self, candidate: &str) -> bool {
        self.is_valid && self.credential_hash.matches(candidate)
    }
}
