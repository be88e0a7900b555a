//! Serve command - Starts the HTTP server.

use std::sync::Arc;

use crate::api::{build_app, AppState};
use crate::cli::args::ServeArgs;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::{shutdown_signal, Database};

/// Execute the serve command
pub async fn execute(args: ServeArgs, config: Config) -> AppResult<()> {
    tracing::info!("Starting server...");

    // Initialize database (migrations run on connect)
    let database = Database::connect(&config)
        .await
        .map_err(|e| AppError::internal(format!("Database connection failed: {}", e)))?;
    let database = Arc::new(database);

    let app_state = AppState::from_config(database.clone(), &config);

    let app = build_app(app_state, &config);

    // Start server
    let host = args.host.unwrap_or_else(|| config.server_host.clone());
    let port = args.port.unwrap_or(config.server_port);
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", addr, e)))?;

    tracing::info!("Server running on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(config.shutdown_grace()))
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    tracing::info!("HTTP server closed");

    database
        .close()
        .await
        .map_err(|e| AppError::internal(format!("Failed to close database: {}", e)))?;

    tracing::info!("Database connection closed");

    Ok(())
}
