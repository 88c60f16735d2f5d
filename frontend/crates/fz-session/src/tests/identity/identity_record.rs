use crate::{IdentityRecord, IdentityUpdate, Role};

use serde_json::json;

fn alice() -> IdentityRecord {
    IdentityRecord {
        id: String::from("fl-5"),
        auth_id: String::from("acc-9"),
        name: String::from("Alice"),
        email: String::from("alice@x.com"),
        role: Role::Freelancer,
        user_role: String::from("FREELANCER"),
    }
}

#[test]
fn given_identity_when_serialize_then_uses_camel_case_keys() {
    let json = serde_json::to_value(alice()).unwrap();
    assert_eq!(
        json,
        json!({
            "id": "fl-5",
            "authId": "acc-9",
            "name": "Alice",
            "email": "alice@x.com",
            "role": "freelancer",
            "userRole": "FREELANCER"
        })
    );
}

#[test]
fn given_cached_json_when_deserialize_then_preserves_all_fields() {
    let json = serde_json::to_string(&alice()).unwrap();
    let restored: IdentityRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, alice());
}

#[test]
fn given_update_when_merged_then_only_given_fields_change() {
    let update = IdentityUpdate {
        name: Some(String::from("Alice Smith")),
        email: None,
    };

    let merged = alice().merged(&update);

    assert_eq!(merged.name, "Alice Smith");
    assert_eq!(merged.email, "alice@x.com");
    assert_eq!(merged.id, "fl-5");
    assert_eq!(merged.role, Role::Freelancer);
}

#[test]
fn given_empty_update_when_merged_then_unchanged() {
    let update = IdentityUpdate::default();
    assert!(update.is_empty());
    assert_eq!(alice().merged(&update), alice());
}

#[test]
fn given_fallback_id_when_uses_account_id_then_true() {
    let mut record = alice();
    assert!(!record.uses_account_id());
    record.id = record.auth_id.clone();
    assert!(record.uses_account_id());
}
