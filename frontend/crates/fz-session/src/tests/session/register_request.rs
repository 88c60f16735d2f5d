use crate::{RegisterRequest, Role};

use serde_json::json;

#[test]
fn given_request_without_name_when_serialize_then_backend_shape() {
    let request = RegisterRequest::new("bob@x.com", "pw", Role::Client);
    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(
        json,
        json!({ "username": "bob@x.com", "password": "pw", "userRole": "CLIENT" })
    );
}

#[test]
fn given_request_with_name_when_serialize_then_name_included() {
    let request = RegisterRequest::new("alice@x.com", "pw", Role::Freelancer).with_name("Alice");
    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(json["userRole"], "FREELANCER");
    assert_eq!(json["name"], "Alice");
}
