use crate::{ApiError, SessionError, StorageError};

#[test]
fn given_auth_error_when_user_message_then_message_verbatim() {
    let err = SessionError::auth("Bad credentials");
    assert_eq!(err.user_message(), "Bad credentials");
}

#[test]
fn given_api_error_with_message_when_auth_from_api_then_uses_backend_message() {
    let api = ApiError::api_error(409, Some(String::from("Email already registered")));
    let err = SessionError::auth_from_api(&api, "Failed to register");
    assert_eq!(err.user_message(), "Email already registered");
}

#[test]
fn given_api_error_without_message_when_auth_from_api_then_uses_fallback() {
    let api = ApiError::api_error(500, None);
    let err = SessionError::auth_from_api(&api, "Failed to login");
    assert_eq!(err.user_message(), "Failed to login");
}

#[test]
fn given_session_expired_when_user_message_then_asks_to_log_in_again() {
    let message = SessionError::session_expired().user_message();
    assert!(message.contains("log in again"));
}

#[test]
fn given_storage_error_when_into_session_error_then_storage_variant() {
    let err: SessionError = StorageError::invalid_key("x").into();
    assert!(matches!(err, SessionError::Storage { .. }));
    assert!(!err.user_message().is_empty());
}

#[test]
fn given_api_error_when_into_session_error_then_api_variant() {
    let err: SessionError = ApiError::api_error(404, None).into();
    assert!(matches!(err, SessionError::Api { .. }));
    assert_eq!(err.user_message(), "Request failed");
}
