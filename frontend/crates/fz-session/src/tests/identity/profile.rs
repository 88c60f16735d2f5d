use crate::{ClientProfile, FreelancerProfile, Profile, Role};

use serde_json::json;

#[test]
fn given_numeric_id_when_deserialize_client_then_id_is_string() {
    let profile: ClientProfile = serde_json::from_value(json!({
        "clientId": 12,
        "name": "Acme",
        "email": "ops@acme.test",
        "professionalTitle": "CTO",
        "skills": ["rust"],
        "location": "Berlin",
        "bio": null
    }))
    .unwrap();

    assert_eq!(profile.client_id, "12");
    assert_eq!(profile.professional_title.as_deref(), Some("CTO"));
    assert!(profile.bio.is_none());
}

#[test]
fn given_sparse_freelancer_when_deserialize_then_defaults() {
    let profile: FreelancerProfile =
        serde_json::from_value(json!({ "freelancerId": "fl-5" })).unwrap();

    assert_eq!(profile.freelancer_id, "fl-5");
    assert!(profile.skills.is_empty());
    assert!(profile.hourly_rate.is_none());
}

#[test]
fn given_boolean_id_when_deserialize_then_error() {
    let result = serde_json::from_value::<ClientProfile>(json!({ "clientId": true }));
    assert!(result.is_err());
}

#[test]
fn given_profile_variants_when_role_then_matches() {
    assert_eq!(
        Profile::Client(ClientProfile::default()).role(),
        Some(Role::Client)
    );
    assert_eq!(
        Profile::Freelancer(FreelancerProfile::default()).role(),
        Some(Role::Freelancer)
    );
    assert_eq!(Profile::Other.role(), None);
}

#[test]
fn given_freelancer_profile_when_accessors_then_reads_fields() {
    let profile = Profile::Freelancer(FreelancerProfile {
        freelancer_id: String::from("42"),
        name: Some(String::from("Alice")),
        email: Some(String::from("alice@x.com")),
        ..FreelancerProfile::default()
    });

    assert_eq!(profile.id(), Some("42"));
    assert_eq!(profile.name(), Some("Alice"));
    assert_eq!(profile.email(), Some("alice@x.com"));
}

#[test]
fn given_profile_when_serialize_then_tagged_by_role() {
    let json = serde_json::to_value(Profile::Client(ClientProfile {
        client_id: String::from("3"),
        ..ClientProfile::default()
    }))
    .unwrap();

    assert_eq!(json["role"], "client");
    assert_eq!(json["clientId"], "3");
    assert_eq!(serde_json::to_value(Profile::Other).unwrap()["role"], "other");
}
