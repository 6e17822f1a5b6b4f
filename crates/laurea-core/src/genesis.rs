//! Deploy-time registry configuration.
//!
//! A genesis names the registry owner, the registry policy, and the
//! institutions the owner adds right after deployment.

use serde::{Deserialize, Serialize};

use crate::types::Identity;

/// What `add_institution` does when the identity is already registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateInstitutionPolicy {
    /// Fail with a conflict and keep the existing record.
    #[default]
    Reject,
    /// Replace the record with a fresh, active one.
    Overwrite,
}

/// Tunable registry behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RegistryPolicy {
    #[serde(default)]
    pub on_duplicate_institution: DuplicateInstitutionPolicy,
}

/// An institution added by the owner at deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisInstitution {
    pub id: Identity,
    pub name: String,
}

/// Everything needed to deploy a registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisConfig {
    /// Registry owner identity. Required.
    pub owner: Identity,

    #[serde(default)]
    pub policy: RegistryPolicy,

    /// Institutions added, in order, by the owner at deployment.
    #[serde(default)]
    pub institutions: Vec<GenesisInstitution>,
}

impl GenesisConfig {
    pub fn new(owner: impl Into<Identity>) -> Self {
        Self {
            owner: owner.into(),
            policy: RegistryPolicy::default(),
            institutions: Vec::new(),
        }
    }

    /// Append an institution to the deployment list.
    pub fn with_institution(mut self, id: impl Into<Identity>, name: impl Into<String>) -> Self {
        self.institutions.push(GenesisInstitution {
            id: id.into(),
            name: name.into(),
        });
        self
    }

    pub fn with_policy(mut self, policy: RegistryPolicy) -> Self {
        self.policy = policy;
        self
    }
}
