use crate::api::ApiClient;
use crate::api::client::{extract_error_message, extract_token};

use std::time::Duration;

#[test]
fn given_trailing_slash_when_endpoint_then_no_double_slash() {
    let client = ApiClient::new("http://localhost:8080/", None).unwrap();
    let url = client.endpoint(&["api", "auth", "token"]).unwrap();
    assert_eq!(url.as_str(), "http://localhost:8080/api/auth/token");
}

#[test]
fn given_no_trailing_slash_when_endpoint_then_joined() {
    let client = ApiClient::new("http://localhost:8080", None).unwrap();
    let url = client.endpoint(&["api", "clients", "7"]).unwrap();
    assert_eq!(url.as_str(), "http://localhost:8080/api/clients/7");
}

#[test]
fn given_path_prefix_when_endpoint_then_prefix_kept() {
    let client = ApiClient::new("https://example.com/freelanza/", None).unwrap();
    let url = client.endpoint(&["api", "auth", "user"]).unwrap();
    assert_eq!(url.as_str(), "https://example.com/freelanza/api/auth/user");
}

#[test]
fn given_email_segment_when_endpoint_then_slash_is_encoded() {
    let client = ApiClient::new("http://localhost:8080", None).unwrap();
    let url = client
        .endpoint(&["api", "freelancers", "email", "a/b@x.com"])
        .unwrap();
    assert_eq!(url.path(), "/api/freelancers/email/a%2Fb@x.com");
}

#[test]
fn given_garbage_base_url_when_new_then_error() {
    assert!(ApiClient::new("not a url", None).is_err());
}

#[test]
fn given_non_base_url_when_new_then_error() {
    assert!(ApiClient::new("mailto:someone@example.com", None).is_err());
}

#[test]
fn given_timeout_when_new_then_ok() {
    let client = ApiClient::new("http://localhost:8080", Some(Duration::from_secs(3)));
    assert!(client.is_ok());
}

#[test]
fn given_api_config_when_from_config_then_uses_base_url() {
    let config = fz_config::ApiConfig {
        base_url: String::from("http://api.test:9000"),
        timeout_secs: Some(10),
    };
    let client = ApiClient::from_config(&config).unwrap();
    assert_eq!(client.base_url().as_str(), "http://api.test:9000/");
}

// =============================================================================
// Body parsing
// =============================================================================

#[test]
fn given_json_token_object_when_extract_token_then_token() {
    assert_eq!(extract_token(r#"{"token":"t1"}"#), Some(String::from("t1")));
}

#[test]
fn given_plain_text_token_when_extract_token_then_token() {
    assert_eq!(extract_token("eyJhbGciOi.abc.def\n"), Some(String::from("eyJhbGciOi.abc.def")));
}

#[test]
fn given_missing_or_empty_token_when_extract_token_then_none() {
    assert_eq!(extract_token(""), None);
    assert_eq!(extract_token("{}"), None);
    assert_eq!(extract_token(r#"{"token":""}"#), None);
    assert_eq!(extract_token(r#"{"token":null}"#), None);
}

#[test]
fn given_message_field_when_extract_error_message_then_message() {
    let body = r#"{"message":"Email already registered","error":"Conflict"}"#;
    assert_eq!(
        extract_error_message(body),
        Some(String::from("Email already registered"))
    );
}

#[test]
fn given_empty_message_when_extract_error_message_then_falls_back_to_error() {
    let body = r#"{"timestamp":"2024-01-01","status":401,"error":"Unauthorized","message":""}"#;
    assert_eq!(extract_error_message(body), Some(String::from("Unauthorized")));
}

#[test]
fn given_plain_text_when_extract_error_message_then_text() {
    assert_eq!(
        extract_error_message("Bad credentials"),
        Some(String::from("Bad credentials"))
    );
}

#[test]
fn given_empty_body_when_extract_error_message_then_none() {
    assert_eq!(extract_error_message("   "), None);
    assert_eq!(extract_error_message(r#"{"status":500}"#), None);
}
