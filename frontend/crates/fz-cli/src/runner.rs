use crate::commands::Commands;
use crate::error::{CliError, Result as CliResult};
use crate::profile_commands::ProfileCommands;

use fz_session::{
    ApiClient, Capabilities, DegradedIdentity, FileStore, IdentityRecord, IdentityUpdate,
    RegisterRequest, SessionManager, SessionState, SessionStore,
};

use log::debug;
use serde::Serialize;
use serde_json::Value;

/// What `login` and `whoami` print.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView<'a> {
    pub state: SessionState,
    pub identity: Option<&'a IdentityRecord>,
    pub capabilities: Capabilities,
    pub degraded: Option<&'a DegradedIdentity>,
}

impl<'a> SessionView<'a> {
    pub fn of<S: SessionStore>(session: &'a SessionManager<S>) -> Self {
        Self {
            state: session.state(),
            identity: session.identity(),
            capabilities: session.capabilities(),
            degraded: session.degraded(),
        }
    }
}

/// Build the session manager for this invocation and restore whatever the
/// previous invocation left in the storage directory.
pub async fn open_session(
    config: &fz_config::Config,
    server: Option<&str>,
) -> CliResult<SessionManager<FileStore>> {
    let api = match server {
        Some(url) => ApiClient::new(url, config.api.timeout())?,
        None => ApiClient::from_config(&config.api)?,
    };
    let store = FileStore::new(config.storage_path()?);
    debug!("Session storage at {}", store.dir().display());

    let mut session = SessionManager::new(api, store);
    let state = session.initialize().await;
    debug!("Session restored: {state}");

    Ok(session)
}

/// Run one command against an initialized session and return its JSON output.
pub async fn execute<S: SessionStore>(
    session: &mut SessionManager<S>,
    command: Commands,
) -> CliResult<Value> {
    let output = match command {
        Commands::Login { username, password } => {
            session.login(&username, &password).await?;
            serde_json::to_value(SessionView::of(session))?
        }

        Commands::Register {
            username,
            password,
            role,
            name,
        } => {
            let mut request = RegisterRequest::new(username, password, role.into());
            if let Some(name) = name {
                request = request.with_name(name);
            }
            let message = session.register(&request).await?;
            serde_json::json!({ "message": message })
        }

        Commands::Logout => {
            session.logout();
            serde_json::json!({ "authenticated": false })
        }

        Commands::Whoami => serde_json::to_value(SessionView::of(session))?,

        Commands::Profile { action } => match action {
            ProfileCommands::Show => serde_json::to_value(session.fetch_profile().await?)?,

            ProfileCommands::Update { name, email } => {
                let update = IdentityUpdate { name, email };
                if update.is_empty() {
                    return Err(CliError::usage("Nothing to update: pass --name or --email"));
                }
                serde_json::to_value(session.update_profile(&update)?)?
            }

            ProfileCommands::Save { edits } => {
                if edits.is_empty() {
                    return Err(CliError::usage("Nothing to save: pass at least one field"));
                }
                let mut profile = session.fetch_profile().await?;
                edits.apply(&mut profile)?;
                serde_json::to_value(session.save_profile(profile).await?)?
            }
        },
    };

    Ok(output)
}
