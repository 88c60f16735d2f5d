use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] fz_config::ConfigError),

    #[error("Session error: {source} {location}")]
    Session {
        #[source]
        source: fz_session::SessionError,
        location: ErrorLocation,
    },

    #[error("API client error: {source} {location}")]
    Api {
        #[source]
        source: fz_session::ApiError,
        location: ErrorLocation,
    },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("{message} {location}")]
    Usage {
        message: String,
        location: ErrorLocation,
    },

    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),
}

impl CliError {
    #[track_caller]
    pub fn logger(message: impl Into<String>) -> Self {
        Self::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Message printed after `Error:`. Session failures show what the
    /// backend said; everything else shows the full error.
    pub fn user_message(&self) -> String {
        match self {
            Self::Session { source, .. } => source.user_message(),
            Self::Usage { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

impl From<fz_session::SessionError> for CliError {
    #[track_caller]
    fn from(source: fz_session::SessionError) -> Self {
        Self::Session {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<fz_session::ApiError> for CliError {
    #[track_caller]
    fn from(source: fz_session::ApiError) -> Self {
        Self::Api {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
