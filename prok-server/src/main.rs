use prok_auth::{JwtValidator, TokenIssuer};
use prok_media::{ImagePipeline, MediaConfig};
use prok_server::{AppState, build_router, logger};

use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;

use log::{error, info};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = prok_config::Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path: Option<PathBuf> = if let Some(ref filename) = config.logging.file {
        let config_dir = prok_config::Config::config_dir()?;
        let log_dir = config_dir.join(&config.logging.dir);

        // Ensure log directory exists
        std::fs::create_dir_all(&log_dir)?;

        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting prok-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());

    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(database_path)
                .create_if_missing(true)
                .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
                .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
                .busy_timeout(std::time::Duration::from_secs(5)),
        )
        .await?;

    info!("Database connection established");

    // Run migrations
    info!("Running database migrations...");
    prok_db::MIGRATOR.run(&pool).await?;
    info!("Migrations complete");

    // Ensure the upload directory exists before anything is served from it
    let upload_dir = PathBuf::from(&config.upload.dir);
    std::fs::create_dir_all(&upload_dir)?;

    let media = ImagePipeline::new(MediaConfig {
        upload_dir: upload_dir.clone(),
        max_upload_bytes: config.upload.max_upload_bytes,
        allowed_extensions: config.upload.allowed_extensions.clone(),
        primary_bounds: (
            config.upload.primary_max_width,
            config.upload.primary_max_height,
        ),
        thumbnail_bounds: (
            config.upload.thumbnail_max_width,
            config.upload.thumbnail_max_height,
        ),
        primary_quality: config.upload.primary_quality,
        thumbnail_quality: config.upload.thumbnail_quality,
    });

    // Build application state
    let secret = config.auth.jwt_secret.as_bytes();
    let app_state = AppState {
        pool,
        token_issuer: Arc::new(TokenIssuer::new(secret, config.auth.token_ttl_secs)),
        jwt_validator: Arc::new(JwtValidator::with_hs256(secret)),
        media: Arc::new(media),
        upload_dir,
    };

    // Build router
    let app = build_router(app_state);

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    // Start server with graceful shutdown on SIGINT
    info!("Server ready to accept connections");
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
                Err(e) => error!("Failed to listen for SIGINT: {}", e),
            }
        })
        .await?;

    info!("Graceful shutdown complete");

    Ok(())
}
