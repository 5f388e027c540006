use clap::Subcommand;

#[derive(Subcommand)]
pub enum UserCommands {
    /// List all users
    List,
    /// Get a user by ID
    Get {
        /// User ID (UUID)
        id: String,
    },
    /// Create a user
    Create {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        number: Option<String>,
    },
    /// Update the given fields of a user
    Update {
        /// User ID (UUID)
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        number: Option<String>,
    },
    /// Delete a user
    Delete {
        /// User ID (UUID)
        id: String,
    },
}
