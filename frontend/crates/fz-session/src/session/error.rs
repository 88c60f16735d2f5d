use crate::api::ApiError;
use crate::storage::StorageError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

pub(crate) const LOGIN_FAILED: &str = "Failed to login";
pub(crate) const REGISTER_FAILED: &str = "Failed to register";
pub(crate) const UPDATE_FAILED: &str = "Failed to update profile";
pub(crate) const PROFILE_FAILED: &str = "Failed to load profile";
pub(crate) const NOT_LOGGED_IN: &str = "No user is logged in";
const SESSION_EXPIRED: &str = "Your session has expired. Please log in again.";

/// Errors surfaced by session operations.
#[derive(Error, Debug)]
pub enum SessionError {
    /// Login, register or update rejected, or required data missing
    #[error("Authentication error: {message} {location}")]
    Auth {
        message: String,
        location: ErrorLocation,
    },

    /// Stored token rejected by the backend. Handled internally by logging out.
    #[error("Session expired {location}")]
    SessionExpired { location: ErrorLocation },

    #[error("API error: {source} {location}")]
    Api {
        #[source]
        source: ApiError,
        location: ErrorLocation,
    },

    #[error("Storage error: {source} {location}")]
    Storage {
        #[source]
        source: StorageError,
        location: ErrorLocation,
    },
}

impl SessionError {
    #[track_caller]
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Auth error carrying the backend's message, or `fallback` when the
    /// response had none (network failure, empty body).
    #[track_caller]
    pub fn auth_from_api(err: &ApiError, fallback: &str) -> Self {
        Self::auth(err.backend_message().unwrap_or(fallback))
    }

    #[track_caller]
    pub fn session_expired() -> Self {
        Self::SessionExpired {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Text for the view layer to show.
    pub fn user_message(&self) -> String {
        match self {
            Self::Auth { message, .. } => message.clone(),
            Self::SessionExpired { .. } => String::from(SESSION_EXPIRED),
            Self::Api { source, .. } => source
                .backend_message()
                .map(String::from)
                .unwrap_or_else(|| String::from("Request failed")),
            Self::Storage { source, .. } => source.recovery_hint().to_string(),
        }
    }
}

impl From<ApiError> for SessionError {
    #[track_caller]
    fn from(source: ApiError) -> Self {
        Self::Api {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<StorageError> for SessionError {
    #[track_caller]
    fn from(source: StorageError) -> Self {
        Self::Storage {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for SessionError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::from(StorageError::from(source))
    }
}

pub type Result<T> = std::result::Result<T, SessionError>;
