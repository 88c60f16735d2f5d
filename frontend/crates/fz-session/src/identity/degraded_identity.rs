use crate::identity::Role;

use serde::Serialize;

/// Recorded when the role-specific identifier could not be resolved and the
/// account identifier was used instead. Login still succeeds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DegradedIdentity {
    pub account_id: String,
    pub email: String,
    pub role: Role,
    pub reason: String,
}
