use crate::{Capabilities, IdentityRecord, Role};

fn identity_with_role(role: Role) -> IdentityRecord {
    IdentityRecord {
        id: String::from("7"),
        auth_id: String::from("3"),
        name: String::from("Test User"),
        email: String::from("test@example.com"),
        user_role: role.backend_name(),
        role,
    }
}

#[test]
fn given_no_identity_when_capabilities_then_all_false() {
    let caps = Capabilities::from_identity(None);
    assert_eq!(caps, Capabilities::default());
    assert!(!caps.is_authenticated);
}

#[test]
fn given_client_when_capabilities_then_only_client() {
    let identity = identity_with_role(Role::Client);
    let caps = Capabilities::from_identity(Some(&identity));
    assert!(caps.is_authenticated);
    assert!(caps.is_client);
    assert!(!caps.is_freelancer);
}

#[test]
fn given_freelancer_when_capabilities_then_only_freelancer() {
    let identity = identity_with_role(Role::Freelancer);
    let caps = Capabilities::from_identity(Some(&identity));
    assert!(caps.is_authenticated);
    assert!(!caps.is_client);
    assert!(caps.is_freelancer);
}

#[test]
fn given_other_role_when_capabilities_then_neither_role_flag() {
    for role in ["admin", "moderator", ""] {
        let identity = identity_with_role(Role::parse(role));
        let caps = Capabilities::from_identity(Some(&identity));
        assert!(caps.is_authenticated);
        assert!(!caps.is_client, "role {role:?} must not be a client");
        assert!(!caps.is_freelancer, "role {role:?} must not be a freelancer");
    }
}

#[test]
fn given_capabilities_when_serialize_then_camel_case_flags() {
    let identity = identity_with_role(Role::Client);
    let json = serde_json::to_value(Capabilities::from_identity(Some(&identity))).unwrap();
    assert_eq!(json["isAuthenticated"], true);
    assert_eq!(json["isClient"], true);
    assert_eq!(json["isFreelancer"], false);
}
