use crate::identity::IdentityRecord;

use serde::Serialize;

/// Capability flags derived purely from the current identity's role.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Capabilities {
    pub is_authenticated: bool,
    pub is_client: bool,
    pub is_freelancer: bool,
}

impl Capabilities {
    pub fn from_identity(identity: Option<&IdentityRecord>) -> Self {
        match identity {
            Some(record) => Self {
                is_authenticated: true,
                is_client: record.is_client(),
                is_freelancer: record.is_freelancer(),
            },
            None => Self::default(),
        }
    }
}
