//! fz-cli library
//!
//! Command definitions and the runner behind the `freelanza` binary,
//! exported so integration tests can drive commands against a mock backend.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod profile_commands;
pub mod runner;


pub use cli::Cli;
pub use commands::{Commands, RoleArg};
pub use error::{CliError, Result as CliResult};
pub use profile_commands::{ProfileCommands, ProfileEdits};
pub use runner::{SessionView, execute, open_session};
