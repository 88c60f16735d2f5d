use crate::identity::{IdentityUpdate, Role};

use serde::{Deserialize, Serialize};

/// Locally cached view of the signed-in user.
///
/// `id` is the role-specific identifier (client or freelancer ID) that every
/// job, proposal and profile endpoint is keyed by. `auth_id` is the
/// underlying account identifier and is kept for reference only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityRecord {
    pub id: String,
    pub auth_id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    /// Role exactly as the backend spelled it
    pub user_role: String,
}

impl IdentityRecord {
    pub fn is_client(&self) -> bool {
        self.role == Role::Client
    }

    pub fn is_freelancer(&self) -> bool {
        self.role == Role::Freelancer
    }

    /// True when `id` fell back to the account identifier.
    pub fn uses_account_id(&self) -> bool {
        self.id == self.auth_id
    }

    /// Returns a copy with the update's fields merged in.
    pub fn merged(&self, update: &IdentityUpdate) -> Self {
        let mut merged = self.clone();
        if let Some(ref name) = update.name {
            merged.name = name.clone();
        }
        if let Some(ref email) = update.email {
            merged.email = email.clone();
        }
        merged
    }
}
