use std::fmt;

use serde::{Deserialize, Serialize};

/// Account role.
///
/// Parsing is case-insensitive and never fails: anything other than client
/// or freelancer is kept, lowercased, as `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Client,
    Freelancer,
    Other(String),
}

impl Role {
    pub fn parse(value: &str) -> Self {
        let lowered = value.trim().to_lowercase();
        match lowered.as_str() {
            "client" => Self::Client,
            "freelancer" => Self::Freelancer,
            _ => Self::Other(lowered),
        }
    }

    /// Lowercase form used for capability checks
    pub fn as_str(&self) -> &str {
        match self {
            Self::Client => "client",
            Self::Freelancer => "freelancer",
            Self::Other(other) => other,
        }
    }

    /// Uppercase form the backend expects in request payloads
    pub fn backend_name(&self) -> String {
        match self {
            Self::Client => String::from("CLIENT"),
            Self::Freelancer => String::from("FREELANCER"),
            Self::Other(other) => other.to_uppercase(),
        }
    }

    /// Whether the role owns a role-specific identifier (client or freelancer ID)
    pub fn has_profile(&self) -> bool {
        matches!(self, Self::Client | Self::Freelancer)
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        Role::parse(&value)
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
