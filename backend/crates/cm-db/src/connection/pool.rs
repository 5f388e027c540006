//! SQLite pool construction for the contact store.

use crate::{MIGRATOR, Result as DbErrorResult};

use std::path::PathBuf;
use std::time::Duration;

use log::{debug, info};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};

/// How to open the database file
#[derive(Debug, Clone)]
pub struct ConnectionSettings {
    pub path: PathBuf,
    pub max_connections: u32,
    pub busy_timeout: Duration,
}

/// Open (creating if missing) the SQLite database in WAL mode.
pub async fn open_pool(settings: &ConnectionSettings) -> DbErrorResult<SqlitePool> {
    debug!(
        "Opening database {} (max {} connections, busy timeout {:?})",
        settings.path.display(),
        settings.max_connections,
        settings.busy_timeout
    );

    let pool = SqlitePoolOptions::new()
        .max_connections(settings.max_connections)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(&settings.path)
                .create_if_missing(true)
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal)
                .busy_timeout(settings.busy_timeout),
        )
        .await?;

    Ok(pool)
}

/// Apply all pending migrations.
pub async fn run_migrations(pool: &SqlitePool) -> DbErrorResult<()> {
    info!("Running database migrations...");
    MIGRATOR.run(pool).await?;
    info!("Migrations complete");
    Ok(())
}
