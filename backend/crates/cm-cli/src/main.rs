//! cm - contact board client
//!
//! # Examples
//!
//! ```bash
//! # List all users
//! cm user list --pretty
//!
//! # Create a user
//! cm user create --name Bob --email b@y.com --number 555
//!
//! # Interactive board
//! cm board
//! ```

mod cli;
mod commands;
mod repl;
mod user_commands;

use crate::{cli::Cli, commands::Commands, user_commands::UserCommands};

use cm_cli::{Client, DEFAULT_SERVER_URL};
use cm_core::UserFields;

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Server URL: explicit flag > port file > default
    let server_url = match cli.server {
        Some(url) => url,
        None => discover_server_url(),
    };

    let client = Client::new(&server_url);

    let result = match cli.command {
        Commands::Board => return repl::run(client).await,
        Commands::User { action } => match action {
            UserCommands::List => client.list_users().await,
            UserCommands::Get { id } => client.get_user(&id).await,
            UserCommands::Create {
                name,
                email,
                number,
            } => {
                client
                    .create_user(&UserFields::new(name, email, number))
                    .await
            }
            UserCommands::Update {
                id,
                name,
                email,
                number,
            } => {
                client
                    .update_user(&id, &UserFields::new(name, email, number))
                    .await
            }
            UserCommands::Delete { id } => client.delete_user(&id).await,
        },
    };

    match result {
        Ok(value) => {
            let output = if cli.pretty {
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
            eprintln!("Error: {}", e.summary());
            ExitCode::FAILURE
        }
    }
}

/// Discover the server URL from the port discovery file.
///
/// cm-server writes `server.json` after binding; a file whose PID is gone
/// is ignored. Without one the default local server is assumed.
fn discover_server_url() -> String {
    match cm_config::PortFileInfo::read_live() {
        Ok(Some(info)) => info.base_url(),
        Ok(None) => DEFAULT_SERVER_URL.to_string(),
        Err(e) => {
            let port_path = cm_config::PortFileInfo::path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| ".cm/server.json".to_string());

            eprintln!(
                "Warning: ignoring unreadable port file ({}): {}",
                port_path, e
            );
            DEFAULT_SERVER_URL.to_string()
        }
    }
}
