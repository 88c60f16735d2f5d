//! Client-side session and authorization model for the Freelanza marketplace.
//!
//! [`SessionManager`] owns the credential token and the cached
//! [`IdentityRecord`], restores them on load, and derives the capability
//! flags a view layer uses to gate client-only and freelancer-only UI.
//! Persistent data lives behind the [`SessionStore`] trait; the backend is
//! reached through [`ApiClient`].

pub(crate) mod api;
pub(crate) mod identity;
pub(crate) mod session;
pub(crate) mod storage;

#[cfg(test)]
mod tests;

pub use api::{AccountRecord, ApiClient, ApiError, Result as ApiResult};
pub use identity::{
    Capabilities, ClientProfile, DegradedIdentity, FreelancerProfile, IdentityRecord,
    IdentityUpdate, Profile, Role,
};
pub use session::{
    RegisterRequest, Result as SessionResult, SessionError, SessionManager, SessionState,
};
pub use storage::{
    FileStore, MemoryStore, Result as StorageResult, SessionStore, StorageError, TOKEN_KEY,
    USER_KEY,
};
