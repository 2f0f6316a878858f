// src/main.rs
use std::process::ExitCode;

use dotenvy::dotenv;
use tienda_backend::{build_app, config::AppConfig, database, state::AppState};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables
    dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    // Create database pool
    let db_pool = match database::create_pool(&config.database).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!(error = %e, "Failed to create database pool");
            return ExitCode::FAILURE;
        }
    };

    // Create application state
    let app_state = AppState::new(db_pool, config.bcrypt_cost);

    let app = match build_app(app_state, &config.session) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "Invalid session configuration");
            return ExitCode::FAILURE;
        }
    };

    let addr = config.socket_addr();
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(%addr, error = %e, "Failed to bind");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!("Server running on {}", addr);

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "Server error");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
