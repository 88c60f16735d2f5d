//! freelanza - Freelanza marketplace session client
//!
//! Each invocation restores the session stored by the previous one, runs a
//! single command, and prints the result as JSON.
//!
//! # Examples
//!
//! ```bash
//! freelanza login --username alice@x.com --password secret
//! freelanza whoami --pretty
//! freelanza profile save --skills rust,sql --hourly-rate 55
//! freelanza logout
//! ```

use fz_cli::{Cli, CliResult, Commands, execute, logger, open_session};

use std::process::ExitCode;

use clap::Parser;
use serde_json::Value;

#[tokio::main]
async fn main() -> ExitCode {
    let Cli {
        command,
        server,
        pretty,
    } = Cli::parse();

    let result = run(command, server.as_deref()).await;

    match result {
        Ok(value) => {
            let output = if pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e.user_message());
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Commands, server: Option<&str>) -> CliResult<Value> {
    // Load and validate configuration
    let config = fz_config::Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;
    config.log_summary();

    let mut session = open_session(&config, server).await?;
    execute(&mut session, command).await
}
