//! Registry notifications for external observers.
//!
//! Events are handed to an [`EventSink`] only after the state transition that
//! produced them has been applied. Delivery cannot fail the operation.

use serde::{Deserialize, Serialize};

use crate::types::{CredentialId, Identity};

/// Notifications emitted by the credential registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum RegistryEvent {
    /// The owner added (or, under the overwrite policy, replaced) an institution.
    InstitutionAdded { institution: Identity, name: String },

    /// The owner deactivated an institution.
    InstitutionDeactivated { institution: Identity },

    /// An active institution issued a credential.
    CredentialIssued {
        id: CredentialId,
        student_name: String,
        issuer: Identity,
    },

    /// The issuing institution revoked a credential.
    CredentialRevoked { id: CredentialId },
}

impl RegistryEvent {
    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::InstitutionAdded { .. } => "InstitutionAdded",
            Self::InstitutionDeactivated { .. } => "InstitutionDeactivated",
            Self::CredentialIssued { .. } => "CredentialIssued",
            Self::CredentialRevoked { .. } => "CredentialRevoked",
        }
    }
}

/// Receiver for registry notifications. Fire-and-forget.
pub trait EventSink {
    fn publish(&mut self, event: RegistryEvent);
}

/// Append-only in-memory event log.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<RegistryEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[RegistryEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn last(&self) -> Option<&RegistryEvent> {
        self.events.last()
    }

    /// Consume the log, returning the recorded events in emission order.
    pub fn into_events(self) -> Vec<RegistryEvent> {
        self.events
    }
}

impl EventSink for EventLog {
    fn publish(&mut self, event: RegistryEvent) {
        self.events.push(event);
    }
}

/// Forwards every event to `tracing` at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn publish(&mut self, event: RegistryEvent) {
        match &event {
            RegistryEvent::InstitutionAdded { institution, name } => {
                tracing::info!(
                    event = event.name(),
                    institution = %institution,
                    institution_name = %name
                );
            }
            RegistryEvent::InstitutionDeactivated { institution } => {
                tracing::info!(event = event.name(), institution = %institution);
            }
            RegistryEvent::CredentialIssued {
                id,
                student_name,
                issuer,
            } => {
                tracing::info!(
                    event = event.name(),
                    credential_id = %id,
                    student = %student_name,
                    issuer = %issuer
                );
            }
            RegistryEvent::CredentialRevoked { id } => {
                tracing::info!(event = event.name(), credential_id = %id);
            }
        }
    }
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl EventSink for NoopSink {
    fn publish(&mut self, _event: RegistryEvent) {}
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn publish(&mut self, event: RegistryEvent) {
        (**self).publish(event);
    }
}

impl<S: EventSink + ?Sized> EventSink for Box<S> {
    fn publish(&mut self, event: RegistryEvent) {
        (**self).publish(event);
    }
}

/// Delivers every event to both sinks, first `A` then `B`.
impl<A: EventSink, B: EventSink> EventSink for (A, B) {
    fn publish(&mut self, event: RegistryEvent) {
        self.0.publish(event.clone());
        self.1.publish(event);
    }
}
