//! NoteCrunch Server: study folders, flashcard sets and AI-generated
//! flashcards and summaries.
//!
//! Main entry point that loads configuration, prepares the database and
//! starts the HTTP server.

use tracing_subscriber::{EnvFilter, fmt};

use notecrunch_core::config::AppConfig;
use notecrunch_core::error::AppError;
use notecrunch_database::DatabasePool;
use notecrunch_database::connection::mask_password;

#[tokio::main]
async fn main() {
    let env = std::env::var("NOTECRUNCH_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);
    tracing::info!(env = %env, "Configuration loaded");

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging. `RUST_LOG` wins over the configured level.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting NoteCrunch v{}", env!("CARGO_PKG_VERSION"));

    tracing::info!(url = %mask_password(&config.database.url), "Connecting to database...");
    let db = DatabasePool::connect(&config.database).await?;

    if config.database.run_migrations {
        tracing::info!("Running database migrations...");
        notecrunch_database::migration::run_migrations(db.pool()).await?;
        tracing::info!("Database migrations complete");
    }

    notecrunch_api::app::run_server(config, db).await
}
