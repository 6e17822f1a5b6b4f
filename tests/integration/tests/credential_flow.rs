//! Integration test: Full credential lifecycle through the public API.
//!
//! Owner → institution → credential issuance → verification → revocation,
//! with events observed through the registry's sink.

use laurea_core::{
    CredentialId, CredentialRegistry, ErrorKind, EventLog, GenesisConfig, Identity, RegistryEvent,
};

fn owner() -> Identity {
    Identity::from("0xOwner")
}

fn university(n: u8) -> Identity {
    Identity::new(format!("0xUniversity{}", n))
}

/// Helper: a registry with the given institutions already added by the owner.
fn deployed(institutions: &[(Identity, &str)]) -> CredentialRegistry {
    let mut genesis = GenesisConfig::new(owner());
    for (id, name) in institutions {
        genesis = genesis.with_institution(id.clone(), *name);
    }
    CredentialRegistry::from_genesis(&genesis, EventLog::new()).expect("genesis should deploy")
}

// =========================================================================
// Reference scenario
// =========================================================================

#[test]
fn test_reference_scenario() {
    let i1 = university(1);
    let i2 = university(2);

    let mut registry = CredentialRegistry::new(owner());
    registry
        .add_institution(&owner(), i1.clone(), "Test University")
        .unwrap();
    assert!(registry.institution(&i1).unwrap().is_active);

    let id = registry
        .issue_credential(&i1, "John Doe", "Computer Science", "QmHash123")
        .unwrap();
    assert_eq!(id, CredentialId(1));
    assert!(registry.verify_credential(id, "QmHash123"));

    registry.revoke_credential(&i1, id).unwrap();
    assert!(!registry.verify_credential(id, "QmHash123"));

    registry
        .add_institution(&owner(), i2.clone(), "Another University")
        .unwrap();
    for issuer in [&i1, &i2] {
        let err = registry
            .issue_credential(issuer, "Jane Doe", "Mathematics", "QmHash123")
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Conflict);
    }

    let err = registry.revoke_credential(&i2, id).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unauthorized);

    assert_eq!(
        registry.events(),
        &[
            RegistryEvent::InstitutionAdded {
                institution: i1.clone(),
                name: "Test University".into(),
            },
            RegistryEvent::CredentialIssued {
                id,
                student_name: "John Doe".into(),
                issuer: i1.clone(),
            },
            RegistryEvent::CredentialRevoked { id },
            RegistryEvent::InstitutionAdded {
                institution: i2,
                name: "Another University".into(),
            },
        ]
    );
}

// =========================================================================
// Multi-institution flows
// =========================================================================

#[test]
fn test_ids_are_shared_across_institutions() {
    let (a, b) = (university(1), university(2));
    let mut registry = deployed(&[(a.clone(), "A"), (b.clone(), "B")]);

    let ids: Vec<CredentialId> = [(&a, "h1"), (&b, "h2"), (&a, "h3"), (&b, "h4")]
        .into_iter()
        .map(|(issuer, hash)| {
            registry
                .issue_credential(issuer, "Student", "Course", hash)
                .unwrap()
        })
        .collect();

    assert_eq!(
        ids,
        vec![CredentialId(1), CredentialId(2), CredentialId(3), CredentialId(4)]
    );
    assert_eq!(registry.credential(CredentialId(2)).unwrap().issuer, b);
    assert_eq!(registry.credential(CredentialId(3)).unwrap().issuer, a);
}

#[test]
fn test_deactivation_stops_issuance_but_keeps_records() {
    let a = university(1);
    let mut registry = deployed(&[(a.clone(), "A")]);

    let id = registry
        .issue_credential(&a, "John Doe", "Computer Science", "QmHash123")
        .unwrap();
    registry.deactivate_institution(&owner(), &a).unwrap();

    let err = registry
        .issue_credential(&a, "Jane Doe", "Physics", "QmOther")
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unauthorized);

    // Existing credentials stay verifiable.
    assert!(registry.verify_credential(id, "QmHash123"));
    assert_eq!(registry.credential_count(), 1);
}

#[test]
fn test_rejected_operations_leave_no_trace() {
    let (a, b) = (university(1), university(2));
    let mut registry = deployed(&[(a.clone(), "A"), (b.clone(), "B")]);
    let id = registry
        .issue_credential(&a, "John Doe", "Computer Science", "QmHash123")
        .unwrap();
    let events_before = registry.events().len();

    assert!(registry
        .add_institution(&a, university(3), "Rogue")
        .is_err());
    assert!(registry.deactivate_institution(&b, &a).is_err());
    assert!(registry
        .deactivate_institution(&owner(), &university(9))
        .is_err());
    assert!(registry
        .issue_credential(&university(3), "X", "Y", "QmNew")
        .is_err());
    assert!(registry
        .issue_credential(&b, "X", "Y", "QmHash123")
        .is_err());
    assert!(registry.revoke_credential(&b, id).is_err());
    assert!(registry.revoke_credential(&a, CredentialId(5)).is_err());

    assert_eq!(registry.events().len(), events_before);
    assert_eq!(registry.institution_count(), 2);
    assert!(registry.institution(&a).unwrap().is_active);
    assert_eq!(registry.credential_count(), 1);
    assert!(!registry.contains_hash("QmNew"));
    assert!(registry.verify_credential(id, "QmHash123"));
}

#[test]
fn test_events_serialize_for_observers() {
    let a = university(1);
    let mut registry = deployed(&[(a.clone(), "A")]);
    let id = registry
        .issue_credential(&a, "John Doe", "Computer Science", "QmHash123")
        .unwrap();
    registry.revoke_credential(&a, id).unwrap();

    let json = serde_json::to_value(registry.events()).unwrap();
    assert_eq!(json[0]["event"], "institution_added");
    assert_eq!(json[1]["event"], "credential_issued");
    assert_eq!(json[1]["id"], 1);
    assert_eq!(json[1]["issuer"], "0xUniversity1");
    assert_eq!(json[2]["event"], "credential_revoked");
    assert_eq!(json[2]["id"], 1);
}
