//! Laurea Core — Access-controlled registry of academic credentials.
//!
//! A single registry owner authorizes institutions; active institutions issue
//! credentials keyed by a globally unique content hash, revoke the ones they
//! issued, and anyone can verify a hash against an active record.

pub mod error;
pub mod events;
pub mod genesis;
pub mod registry;
pub mod types;

pub use error::{ErrorKind, RegistryError, Result};
pub use events::{EventLog, EventSink, NoopSink, RegistryEvent, TracingSink};
pub use genesis::{DuplicateInstitutionPolicy, GenesisConfig, GenesisInstitution, RegistryPolicy};
pub use registry::CredentialRegistry;
pub use types::{Credential, CredentialHash, CredentialId, Identity, Institution};
