use crate::profile_commands::ProfileCommands;

use clap::{Subcommand, ValueEnum};
use fz_session::Role;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in and cache the resolved identity
    Login {
        /// Account email
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },

    /// Create an account (does not log in)
    Register {
        /// Account email
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
        #[arg(long, value_enum)]
        role: RoleArg,
        /// Display name
        #[arg(long)]
        name: Option<String>,
    },

    /// Clear the stored session
    Logout,

    /// Show the current identity and capabilities
    Whoami,

    /// Business profile operations
    Profile {
        #[command(subcommand)]
        action: ProfileCommands,
    },
}

/// Roles an account can be registered with
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoleArg {
    Client,
    Freelancer,
}

impl From<RoleArg> for Role {
    fn from(role: RoleArg) -> Self {
        match role {
            RoleArg::Client => Role::Client,
            RoleArg::Freelancer => Role::Freelancer,
        }
    }
}
