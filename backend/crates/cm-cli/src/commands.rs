use crate::user_commands::UserCommands;

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// User operations (one API call, JSON output)
    User {
        #[command(subcommand)]
        action: UserCommands,
    },

    /// Interactive contact board
    Board,
}
