use crate::identity::deserialize_identifier;

use serde::Deserialize;

/// Account-level record returned by `GET /api/auth/user`.
///
/// `id` is the authentication-account identifier, not the client or
/// freelancer identifier business endpoints are keyed by.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountRecord {
    #[serde(deserialize_with = "deserialize_identifier")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub user_role: Option<String>,
}

impl AccountRecord {
    pub fn username(&self) -> &str {
        self.username.as_deref().unwrap_or_default().trim()
    }

    pub fn user_role(&self) -> &str {
        self.user_role.as_deref().unwrap_or_default().trim()
    }

    /// Display name, falling back to the username when the backend omits it.
    pub fn display_name(&self) -> String {
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => self.username().to_string(),
        }
    }
}
