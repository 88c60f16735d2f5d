pub(crate) mod capabilities;
pub(crate) mod degraded_identity;
pub(crate) mod identifier;
pub(crate) mod identity_record;
pub(crate) mod identity_update;
pub(crate) mod profile;
pub(crate) mod role;

pub use capabilities::Capabilities;
pub use degraded_identity::DegradedIdentity;
pub(crate) use identifier::{deserialize_identifier, deserialize_optional_identifier};
pub use identity_record::IdentityRecord;
pub use identity_update::IdentityUpdate;
pub use profile::{ClientProfile, FreelancerProfile, Profile};
pub use role::Role;
