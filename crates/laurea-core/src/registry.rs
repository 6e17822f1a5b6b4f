use std::collections::{BTreeMap, HashMap, HashSet};

use crate::error::{RegistryError, Result};
use crate::events::{EventLog, EventSink, RegistryEvent};
use crate::genesis::{DuplicateInstitutionPolicy, GenesisConfig, RegistryPolicy};
use crate::types::{Credential, CredentialHash, CredentialId, Identity, Institution};

/// Access-controlled registry of academic credentials.
///
/// Every mutating operation takes the already-authenticated caller identity,
/// checks all of its preconditions first, and only then applies its changes
/// and publishes its event. A rejected operation leaves the registry untouched.
///
/// Authorization rules:
/// - owner: add and deactivate institutions
/// - active institution: issue credentials
/// - issuing institution: revoke its own credentials
/// - anyone: verify
pub struct CredentialRegistry<S: EventSink = EventLog> {
    owner: Identity,
    policy: RegistryPolicy,
    institutions: HashMap<Identity, Institution>,
    credentials: BTreeMap<CredentialId, Credential>,
    /// Every hash ever issued, revoked or not.
    hash_index: HashSet<CredentialHash>,
    /// Id of the most recently issued credential (0 before the first issuance).
    last_id: u64,
    sink: S,
}

impl CredentialRegistry<EventLog> {
    /// Create an empty registry that records its events in an [`EventLog`].
    pub fn new(owner: impl Into<Identity>) -> Self {
        Self::with_sink(owner, EventLog::new())
    }

    /// Events emitted so far, oldest first.
    pub fn events(&self) -> &[RegistryEvent] {
        self.sink.events()
    }
}

impl<S: EventSink> CredentialRegistry<S> {
    /// Create an empty registry publishing its events to `sink`.
    pub fn with_sink(owner: impl Into<Identity>, sink: S) -> Self {
        let owner = owner.into();
        tracing::debug!(owner = %owner, "credential registry created");
        Self {
            owner,
            policy: RegistryPolicy::default(),
            institutions: HashMap::new(),
            credentials: BTreeMap::new(),
            hash_index: HashSet::new(),
            last_id: 0,
            sink,
        }
    }

    /// Deploy a registry from a genesis: construct it, then have the owner add
    /// each listed institution in order through [`Self::add_institution`].
    pub fn from_genesis(genesis: &GenesisConfig, sink: S) -> Result<Self> {
        let mut registry = Self::with_sink(genesis.owner.clone(), sink).with_policy(genesis.policy);
        let owner = registry.owner.clone();
        for institution in &genesis.institutions {
            registry.add_institution(&owner, institution.id.clone(), institution.name.clone())?;
        }
        tracing::info!(
            owner = %owner,
            institutions = registry.institutions.len(),
            "credential registry deployed"
        );
        Ok(registry)
    }

    pub fn with_policy(mut self, policy: RegistryPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn owner(&self) -> &Identity {
        &self.owner
    }

    pub fn policy(&self) -> RegistryPolicy {
        self.policy
    }

    pub fn institution(&self, id: &Identity) -> Option<&Institution> {
        self.institutions.get(id)
    }

    pub fn institution_count(&self) -> usize {
        self.institutions.len()
    }

    pub fn credential(&self, id: CredentialId) -> Option<&Credential> {
        self.credentials.get(&id)
    }

    /// Credentials in issuance order.
    pub fn credentials(&self) -> impl Iterator<Item = &Credential> {
        self.credentials.values()
    }

    pub fn credential_count(&self) -> usize {
        self.credentials.len()
    }

    /// Whether `hash` was ever issued, including by a since-revoked credential.
    pub fn contains_hash(&self, hash: &str) -> bool {
        self.hash_index.contains(&CredentialHash::from(hash))
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Whether `id` names an institution that may currently issue.
    pub fn is_active_institution(&self, id: &Identity) -> bool {
        self.institutions.get(id).is_some_and(|inst| inst.is_active)
    }

    /// Register `institution` as an active issuer. Owner only.
    pub fn add_institution(
        &mut self,
        caller: &Identity,
        institution: Identity,
        name: impl Into<String>,
    ) -> Result<()> {
        self.require_owner(caller, "add_institution")?;

        if self.institutions.contains_key(&institution)
            && self.policy.on_duplicate_institution == DuplicateInstitutionPolicy::Reject
        {
            tracing::warn!(
                institution = %institution,
                "add_institution rejected: already registered"
            );
            return Err(RegistryError::conflict(format!(
                "institution {} already exists",
                institution
            )));
        }

        let name = name.into();
        let replaced = self
            .institutions
            .insert(institution.clone(), Institution::new(name.clone()))
            .is_some();

        tracing::info!(
            institution = %institution,
            institution_name = %name,
            replaced,
            "institution added"
        );
        self.sink
            .publish(RegistryEvent::InstitutionAdded { institution, name });
        Ok(())
    }

    /// Stop `institution` from issuing. Owner only; idempotent.
    pub fn deactivate_institution(
        &mut self,
        caller: &Identity,
        institution: &Identity,
    ) -> Result<()> {
        self.require_owner(caller, "deactivate_institution")?;

        let record = match self.institutions.get_mut(institution) {
            Some(record) => record,
            None => {
                tracing::warn!(
                    institution = %institution,
                    "deactivate_institution rejected: unknown institution"
                );
                return Err(RegistryError::not_found(format!(
                    "institution {} does not exist",
                    institution
                )));
            }
        };

        if !record.is_active {
            tracing::debug!(institution = %institution, "institution already inactive");
            return Ok(());
        }
        record.is_active = false;

        tracing::info!(institution = %institution, "institution deactivated");
        self.sink.publish(RegistryEvent::InstitutionDeactivated {
            institution: institution.clone(),
        });
        Ok(())
    }

    /// Issue a credential from an active institution and return its new id.
    pub fn issue_credential(
        &mut self,
        caller: &Identity,
        student_name: impl Into<String>,
        course_name: impl Into<String>,
        credential_hash: impl Into<CredentialHash>,
    ) -> Result<CredentialId> {
        if !self.is_active_institution(caller) {
            tracing::warn!(
                caller = %caller,
                "issue_credential rejected: caller is not an active institution"
            );
            return Err(RegistryError::unauthorized(
                "caller is not an active institution",
            ));
        }

        let credential_hash = credential_hash.into();
        if self.hash_index.contains(&credential_hash) {
            tracing::warn!(
                caller = %caller,
                hash = %credential_hash,
                "issue_credential rejected: duplicate hash"
            );
            return Err(RegistryError::conflict("credential hash already exists"));
        }

        let next = self
            .last_id
            .checked_add(1)
            .ok_or(RegistryError::IdSpaceExhausted)?;
        let id = CredentialId(next);

        let credential = Credential {
            id,
            student_name: student_name.into(),
            course_name: course_name.into(),
            credential_hash: credential_hash.clone(),
            issuer: caller.clone(),
            is_valid: true,
        };
        let student_name = credential.student_name.clone();

        self.last_id = next;
        self.hash_index.insert(credential_hash);
        self.credentials.insert(id, credential);

        tracing::info!(credential_id = %id, issuer = %caller, "credential issued");
        self.sink.publish(RegistryEvent::CredentialIssued {
            id,
            student_name,
            issuer: caller.clone(),
        });
        Ok(id)
    }

    /// Revoke a credential. Only its issuing institution may do this; revoking
    /// an already-revoked credential is a silent no-op.
    pub fn revoke_credential(
        &mut self,
        caller: &Identity,
        credential_id: CredentialId,
    ) -> Result<()> {
        let credential = match self.credentials.get_mut(&credential_id) {
            Some(credential) => credential,
            None => {
                tracing::warn!(
                    credential_id = %credential_id,
                    "revoke_credential rejected: unknown credential"
                );
                return Err(RegistryError::not_found(format!(
                    "credential {} does not exist",
                    credential_id
                )));
            }
        };

        if credential.issuer != *caller {
            tracing::warn!(
                credential_id = %credential_id,
                caller = %caller,
                "revoke_credential rejected: caller is not the issuer"
            );
            return Err(RegistryError::unauthorized(
                "only issuing institution can revoke",
            ));
        }

        if !credential.is_valid {
            tracing::debug!(credential_id = %credential_id, "credential already revoked");
            return Ok(());
        }
        credential.is_valid = false;

        tracing::info!(credential_id = %credential_id, issuer = %caller, "credential revoked");
        self.sink
            .publish(RegistryEvent::CredentialRevoked { id: credential_id });
        Ok(())
    }

    /// True iff the credential exists, is valid, and its hash equals
    /// `candidate_hash` exactly. Never reveals which condition failed.
    pub fn verify_credential(&self, credential_id: CredentialId, candidate_hash: &str) -> bool {
        self.credentials
            .get(&credential_id)
            .is_some_and(|credential| credential.verifies(candidate_hash))
    }

    fn require_owner(&self, caller: &Identity, operation: &str) -> Result<()> {
        if *caller != self.owner {
            tracing::warn!(caller = %caller, operation, "rejected: caller is not the owner");
            return Err(RegistryError::unauthorized("caller is not the owner"));
        }
        Ok(())
    }
}
