use crate::api::{AccountRecord, ApiClient};
use crate::identity::{
    Capabilities, DegradedIdentity, IdentityRecord, IdentityUpdate, Profile, Role,
};
use crate::session::error::{
    LOGIN_FAILED, NOT_LOGGED_IN, PROFILE_FAILED, REGISTER_FAILED, UPDATE_FAILED,
};
use crate::session::{RegisterRequest, Result as SessionResult, SessionError, SessionState};
use crate::storage::{SessionStore, TOKEN_KEY, USER_KEY};

use log::{debug, info, warn};

const RESTORED_UNRESOLVED: &str =
    "role-specific id was not resolved when this session was created";

/// Owns the credential token and identity record for one application session.
///
/// Construct one per application load, call [`initialize`](Self::initialize)
/// once, then hand it (or snapshots of it) to the view layer. Every
/// state-changing operation takes `&mut self`, so at most one of them can be
/// in flight at a time.
pub struct SessionManager<S: SessionStore> {
    api: ApiClient,
    store: S,
    identity: Option<IdentityRecord>,
    state: SessionState,
    degraded: Option<DegradedIdentity>,
}

impl<S: SessionStore> SessionManager<S> {
    pub fn new(api: ApiClient, store: S) -> Self {
        Self {
            api,
            store,
            identity: None,
            state: SessionState::Initializing,
            degraded: None,
        }
    }

    // =========================================================================
    // Exposed state
    // =========================================================================

    pub fn identity(&self) -> Option<&IdentityRecord> {
        self.identity.as_ref()
    }

    /// Owned copy of the current identity for the view layer
    pub fn snapshot(&self) -> Option<IdentityRecord> {
        self.identity.clone()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// True until the initial restore sequence has resolved. Role-gated UI
    /// must not render while this is set.
    pub fn is_loading(&self) -> bool {
        self.state == SessionState::Initializing
    }

    pub fn capabilities(&self) -> Capabilities {
        Capabilities::from_identity(self.identity.as_ref())
    }

    pub fn is_authenticated(&self) -> bool {
        self.capabilities().is_authenticated
    }

    pub fn is_client(&self) -> bool {
        self.capabilities().is_client
    }

    pub fn is_freelancer(&self) -> bool {
        self.capabilities().is_freelancer
    }

    /// Set when the last identity resolution fell back to the account id.
    pub fn degraded(&self) -> Option<&DegradedIdentity> {
        self.degraded.as_ref()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    // =========================================================================
    // Restore
    // =========================================================================

    /// Restore the session from storage.
    ///
    /// 1. No stored token: anonymous.
    /// 2. Token rejected or unreachable backend: storage cleared, anonymous.
    /// 3. Token valid: cached identity if present, else fetched from the
    ///    backend; a failed fetch clears storage and goes anonymous.
    ///
    /// Never fails. Problems are logged and the user is treated as logged out.
    pub async fn initialize(&mut self) -> SessionState {
        self.state = SessionState::Initializing;
        self.identity = None;
        self.degraded = None;

        let token = match self.store.get(TOKEN_KEY) {
            Ok(Some(token)) if !token.trim().is_empty() => token,
            Ok(_) => {
                debug!("No stored token, starting anonymous");
                self.clear();
                return self.state;
            }
            Err(e) => {
                warn!("Unable to read stored token: {e}");
                self.clear();
                return self.state;
            }
        };

        match self.api.validate_token(&token).await {
            Ok(true) => {}
            Ok(false) => {
                info!("{}", SessionError::session_expired());
                self.clear();
                return self.state;
            }
            Err(e) => {
                info!("Stored token failed validation: {e}");
                self.clear();
                return self.state;
            }
        }

        if let Some(cached) = self.cached_identity() {
            debug!("Restored cached identity {} ({})", cached.id, cached.role);
            self.degraded = restored_degraded(&cached);
            self.identity = Some(cached);
            self.state = SessionState::Authenticated;
            return self.state;
        }

        match self.fetch_details(&token).await {
            Ok(record) => debug!("Restored identity {} from backend", record.id),
            Err(e) => {
                warn!("Unable to resolve identity for stored token: {e}");
                self.clear();
            }
        }

        self.state
    }

    fn cached_identity(&self) -> Option<IdentityRecord> {
        let raw = match self.store.get(USER_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!("Unable to read cached identity: {e}");
                return None;
            }
        };

        match serde_json::from_str::<IdentityRecord>(&raw) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("Cached identity is corrupted, refetching: {e}");
                None
            }
        }
    }

    // =========================================================================
    // Identity resolution
    // =========================================================================

    /// Resolve the identity behind `token`, persist it together with the
    /// token, and hold it in memory.
    ///
    /// The role-specific identifier replaces the account id for clients and
    /// freelancers. If that lookup fails the account id is used and a
    /// [`DegradedIdentity`] is recorded; the call still succeeds.
    pub async fn fetch_details(&mut self, token: &str) -> SessionResult<IdentityRecord> {
        let account = self.api.fetch_account(token).await?;
        if account.user_role().is_empty() {
            warn!(
                "Account {} has no role, signing in without client or freelancer access",
                account.id
            );
        }
        let role = Role::parse(account.user_role());
        let (id, degraded) = self.resolve_role_id(&account, &role).await;

        let record = IdentityRecord {
            id,
            auth_id: account.id.clone(),
            name: account.display_name(),
            email: account.username().to_string(),
            role,
            user_role: account.user_role().to_string(),
        };

        self.persist(token, &record)?;

        self.identity = Some(record.clone());
        self.degraded = degraded;
        self.state = SessionState::Authenticated;

        Ok(record)
    }

    async fn resolve_role_id(
        &self,
        account: &AccountRecord,
        role: &Role,
    ) -> (String, Option<DegradedIdentity>) {
        let email = account.username();

        let lookup = match role {
            Role::Other(_) => return (account.id.clone(), None),
            _ if email.is_empty() => Err(String::from("account has no username")),
            Role::Client => self
                .api
                .client_id_by_email(email)
                .await
                .map_err(|e| e.to_string()),
            Role::Freelancer => self
                .api
                .freelancer_id_by_email(email)
                .await
                .map_err(|e| e.to_string()),
        };

        match lookup {
            Ok(id) => (id, None),
            Err(reason) => {
                warn!(
                    "Degraded identity: no {} id for account {}, using account id ({reason})",
                    role, account.id
                );
                let degraded = DegradedIdentity {
                    account_id: account.id.clone(),
                    email: email.to_string(),
                    role: role.clone(),
                    reason,
                };
                (account.id.clone(), Some(degraded))
            }
        }
    }

    /// Identity first, then token. A failed token write rolls the identity
    /// back so the two keys never disagree.
    fn persist(&mut self, token: &str, record: &IdentityRecord) -> SessionResult<()> {
        let json = serde_json::to_string(record)?;
        self.store.set(USER_KEY, &json)?;

        if let Err(e) = self.store.set(TOKEN_KEY, token) {
            if let Err(rollback) = self.store.remove(USER_KEY) {
                warn!("Unable to roll back cached identity: {rollback}");
            }
            return Err(SessionError::from(e));
        }

        Ok(())
    }

    /// Drop token, identity and degraded flag, in memory and in storage.
    fn clear(&mut self) {
        for key in [TOKEN_KEY, USER_KEY] {
            if let Err(e) = self.store.remove(key) {
                warn!("Unable to remove stored '{key}': {e}");
            }
        }

        self.identity = None;
        self.degraded = None;
        self.state = SessionState::Anonymous;
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Authenticate and resolve the identity. A failed login leaves the
    /// current session untouched.
    pub async fn login(&mut self, username: &str, password: &str) -> SessionResult<IdentityRecord> {
        let token = match self.api.issue_token(username, password).await {
            Ok(Some(token)) => token,
            Ok(None) => return Err(SessionError::auth("No token received")),
            Err(e) => {
                debug!("Token request rejected: {e}");
                return Err(SessionError::auth_from_api(&e, LOGIN_FAILED));
            }
        };

        match self.fetch_details(&token).await {
            Ok(record) => {
                info!("Logged in as {} ({})", record.email, record.role);
                Ok(record)
            }
            Err(SessionError::Api { source, .. }) => {
                debug!("Identity fetch after login failed: {source}");
                Err(SessionError::auth_from_api(&source, LOGIN_FAILED))
            }
            Err(other) => Err(other),
        }
    }

    /// Create an account. Does not authenticate.
    pub async fn register(&self, request: &RegisterRequest) -> SessionResult<String> {
        if !request.user_role.has_profile() {
            return Err(SessionError::auth(format!(
                "Cannot register an account with role '{}'",
                request.user_role
            )));
        }

        match self.api.register(request).await {
            Ok(message) => {
                info!("Registered {} as {}", request.username, request.user_role);
                Ok(message)
            }
            Err(e) => Err(SessionError::auth_from_api(&e, REGISTER_FAILED)),
        }
    }

    /// Clear token, identity and storage. No backend call.
    pub fn logout(&mut self) {
        self.clear();
        info!("Logged out");
    }

    /// Merge partial fields into the current identity and persist locally.
    pub fn update_profile(&mut self, update: &IdentityUpdate) -> SessionResult<IdentityRecord> {
        let current = self
            .identity
            .as_ref()
            .ok_or_else(|| SessionError::auth(NOT_LOGGED_IN))?;

        let updated = current.merged(update);
        self.store_identity(&updated)?;

        Ok(updated)
    }

    fn store_identity(&mut self, record: &IdentityRecord) -> SessionResult<()> {
        let json = serde_json::to_string(record)?;
        self.store.set(USER_KEY, &json)?;
        self.identity = Some(record.clone());
        Ok(())
    }

    /// Load the role-scoped business profile of the signed-in user.
    pub async fn fetch_profile(&self) -> SessionResult<Profile> {
        let identity = self
            .identity
            .as_ref()
            .ok_or_else(|| SessionError::auth(NOT_LOGGED_IN))?;
        self.ensure_resolved()?;

        let profile = match identity.role {
            Role::Client => self.api.get_client(&identity.id).await.map(Profile::Client),
            Role::Freelancer => self
                .api
                .get_freelancer(&identity.id)
                .await
                .map(Profile::Freelancer),
            Role::Other(_) => Ok(Profile::Other),
        };

        profile.map_err(|e| SessionError::auth_from_api(&e, PROFILE_FAILED))
    }

    /// Save the business profile, then mirror its name and email into the
    /// identity record.
    ///
    /// Refused while degraded: the account id would address another user's
    /// profile row.
    pub async fn save_profile(&mut self, profile: Profile) -> SessionResult<Profile> {
        let identity = self
            .identity
            .clone()
            .ok_or_else(|| SessionError::auth(NOT_LOGGED_IN))?;
        self.ensure_resolved()?;

        if let Some(id) = profile.id()
            && !id.is_empty()
            && id != identity.id
        {
            return Err(SessionError::auth(format!(
                "Profile {id} does not belong to the signed-in account"
            )));
        }

        let profile_role = profile.role();
        let saved = match (&identity.role, profile) {
            (Role::Client, Profile::Client(mut client)) => {
                client.client_id = identity.id.clone();
                self.api
                    .update_client(&identity.id, &client)
                    .await
                    .map(Profile::Client)
            }
            (Role::Freelancer, Profile::Freelancer(mut freelancer)) => {
                freelancer.freelancer_id = identity.id.clone();
                self.api
                    .update_freelancer(&identity.id, &freelancer)
                    .await
                    .map(Profile::Freelancer)
            }
            (Role::Other(_), Profile::Other) => return Ok(Profile::Other),
            (role, _) => {
                let kind = profile_role
                    .map(|r| r.to_string())
                    .unwrap_or_else(|| String::from("roleless"));
                return Err(SessionError::auth(format!(
                    "Cannot save a {kind} profile for the signed-in {role} account"
                )));
            }
        }
        .map_err(|e| SessionError::auth_from_api(&e, UPDATE_FAILED))?;

        let update = IdentityUpdate {
            name: saved.name().filter(|n| !n.trim().is_empty()).map(String::from),
            email: saved.email().filter(|e| !e.trim().is_empty()).map(String::from),
        };
        if !update.is_empty() {
            self.store_identity(&identity.merged(&update))?;
        }

        Ok(saved)
    }

    fn ensure_resolved(&self) -> SessionResult<()> {
        match self.degraded {
            Some(ref degraded) => Err(SessionError::auth(format!(
                "No {} id is linked to this account, profile is unavailable",
                degraded.role
            ))),
            None => Ok(()),
        }
    }
}

/// A cached client or freelancer identity still keyed by the account id was
/// saved from a degraded login.
fn restored_degraded(record: &IdentityRecord) -> Option<DegradedIdentity> {
    if !(record.role.has_profile() && record.uses_account_id()) {
        return None;
    }

    warn!(
        "Restored identity for account {} has no {} id",
        record.auth_id, record.role
    );
    Some(DegradedIdentity {
        account_id: record.auth_id.clone(),
        email: record.email.clone(),
        role: record.role.clone(),
        reason: String::from(RESTORED_UNRESOLVED),
    })
}
