use tg_server::{AppState, build_router, logger};

use tg_auth::TokenSettings;
use tg_config::Config;
use tg_db::UserRepository;

use std::error::Error;
use std::path::PathBuf;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // A missing .env is fine; a broken one is not
    if let Err(e) = dotenvy::dotenv()
        && !e.not_found()
    {
        return Err(e.into());
    }

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path: Option<PathBuf> = if let Some(ref filename) = config.logging.file {
        let log_dir = Config::config_dir()?.join(&config.logging.dir);

        // Ensure log directory exists
        std::fs::create_dir_all(&log_dir)?;

        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting tg-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let settings = TokenSettings::from_raw(
        config.auth.access_secret.as_deref(),
        config.auth.refresh_secret.as_deref(),
        Some(config.auth.access_expiration.as_str()),
        Some(config.auth.refresh_expiration.as_str()),
    )?;

    // Initialize database pool
    let pool = tg_db::open_pool(&config.database_path()?).await?;
    tg_db::run_migrations(&pool).await?;
    info!("Database ready");

    let app_state = AppState::new(&settings, UserRepository::new(pool.clone()))?;
    let app = build_router(app_state);

    // Create TCP listener
    let listener = TcpListener::bind(config.bind_addr()).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    info!("Graceful shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
