use cm_server::{AppState, ServerErrorResult, build_router, logger};

use cm_config::{Config, PortFileInfo};
use cm_db::{ConnectionSettings, UserRepository, open_pool, run_migrations};

use std::sync::Arc;

use log::{error, info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> ServerErrorResult<()> {
    // A missing .env file is fine
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    let log_file_path = config.log_file_path();
    if let Some(dir) = log_file_path.as_ref().and_then(|p| p.parent()) {
        std::fs::create_dir_all(dir)?;
    }

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting cm-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool
    let settings = ConnectionSettings {
        path: config.database_path(),
        max_connections: config.database.max_connections,
        busy_timeout: config.database_busy_timeout(),
    };
    info!("Connecting to database: {}", settings.path.display());
    let pool = open_pool(&settings).await?;
    info!("Database connection established");

    run_migrations(&pool).await?;

    let app = build_router(AppState::new(Arc::new(UserRepository::new(pool.clone()))));

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Actual bound address matters when port is 0 / auto-assigned
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    // Port discovery file for the cm client
    match PortFileInfo::write_in(config.dir(), actual_addr.port(), &config.server.host) {
        Ok(path) => info!("Port file written: {}", path.display()),
        Err(e) => warn!(
            "Failed to write port file (client auto-discovery may not work): {}",
            e
        ),
    }

    info!("Server ready to accept connections");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    info!("Graceful shutdown complete");

    if let Err(e) = PortFileInfo::remove_in(config.dir()) {
        warn!("Failed to remove port file: {}", e);
    }

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
            // Without a signal source, run until killed
            std::future::pending::<()>().await;
        }
    }
}
