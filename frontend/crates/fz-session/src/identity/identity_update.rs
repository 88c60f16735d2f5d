use serde::Deserialize;

/// Partial identity fields for a local profile update
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct IdentityUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl IdentityUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }
}
