use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "cm")]
#[command(about = "Contact board client for cm-server")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Server URL (auto-discovered from server.json, else http://localhost:5000)
    #[arg(long, global = true)]
    pub(crate) server: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}
