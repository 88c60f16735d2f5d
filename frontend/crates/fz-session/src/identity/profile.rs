use crate::identity::{Role, deserialize_identifier};

use serde::{Deserialize, Serialize};

/// Business profile of a client account
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientProfile {
    #[serde(default, deserialize_with = "deserialize_identifier")]
    pub client_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub professional_title: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
}

/// Business profile of a freelancer account
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FreelancerProfile {
    #[serde(default, deserialize_with = "deserialize_identifier")]
    pub freelancer_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub hourly_rate: Option<f64>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub bio: Option<String>,
}

/// Role-shaped profile payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum Profile {
    Client(ClientProfile),
    Freelancer(FreelancerProfile),
    /// Roles without a business profile (e.g. admin accounts)
    Other,
}

impl Profile {
    pub fn role(&self) -> Option<Role> {
        match self {
            Self::Client(_) => Some(Role::Client),
            Self::Freelancer(_) => Some(Role::Freelancer),
            Self::Other => None,
        }
    }

    /// Role-specific identifier carried by the profile
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Client(profile) => Some(&profile.client_id),
            Self::Freelancer(profile) => Some(&profile.freelancer_id),
            Self::Other => None,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Client(profile) => profile.name.as_deref(),
            Self::Freelancer(profile) => profile.name.as_deref(),
            Self::Other => None,
        }
    }

    pub fn email(&self) -> Option<&str> {
        match self {
            Self::Client(profile) => profile.email.as_deref(),
            Self::Freelancer(profile) => profile.email.as_deref(),
            Self::Other => None,
        }
    }
}
