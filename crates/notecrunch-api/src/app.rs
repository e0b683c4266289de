//! Application builder: wires router, middleware and state into an Axum
//! app, and runs the HTTP server.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware as axum_middleware;
use tokio::sync::watch;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use notecrunch_auth::TokenVerifier;
use notecrunch_core::config::AppConfig;
use notecrunch_core::error::AppError;
use notecrunch_core::traits::GenerationGateway;
use notecrunch_database::DatabasePool;
use notecrunch_gateway::HttpGenerationGateway;

use crate::middleware::compression::build_compression_layer;
use crate::middleware::cors::build_cors_layer;
use crate::middleware::logging::request_logging;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    let max_upload = usize::try_from(state.config.gateway.max_upload_bytes).unwrap_or(usize::MAX);
    let cors = build_cors_layer(&state.config.server.cors);

    build_router(state)
        .layer(DefaultBodyLimit::max(max_upload))
        .layer(build_compression_layer())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(request_logging))
}

/// Runs the NoteCrunch server until Ctrl-C or SIGTERM.
pub async fn run_server(config: AppConfig, db: DatabasePool) -> Result<(), AppError> {
    info!("Starting NoteCrunch server...");

    let verifier = TokenVerifier::from_config(&config.auth)?;
    info!(mode = ?config.auth.mode, "Token verification configured");

    let gateway: Arc<dyn GenerationGateway> =
        Arc::new(HttpGenerationGateway::from_config(&config.gateway)?);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);

    let state = AppState::new(config, db.clone(), verifier, gateway);
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    info!("NoteCrunch server listening on {}", addr);

    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        shutdown_signal().await;
        let _ = shutdown_tx.send(true);
    });

    tokio::select! {
        result = async move { server.await } => {
            result.map_err(|e| AppError::internal(format!("Server error: {e}")))?;
        }
        _ = grace_deadline(shutdown_rx, grace) => {
            warn!(grace_seconds = grace.as_secs(), "Shutdown grace period elapsed; dropping open connections");
        }
    }

    db.close().await;
    info!("NoteCrunch server stopped");
    Ok(())
}

/// Resolves once shutdown has been requested and `grace` has passed.
async fn grace_deadline(mut rx: watch::Receiver<bool>, grace: Duration) {
    while !*rx.borrow() {
        if rx.changed().await.is_err() {
            std::future::pending::<()>().await;
        }
    }
    tokio::time::sleep(grace).await;
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
