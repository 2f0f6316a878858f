//! Store back office: session login, product catalog CRUD and read-only
//! reporting views over PostgreSQL.

pub mod auth;
pub mod config;
pub mod database;
pub mod dtos;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use tower_sessions::cookie::{time, Key, SameSite};
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

use crate::config::{ConfigError, SessionConfig};
use crate::state::AppState;

pub const SESSION_COOKIE_NAME: &str = "tienda_session";

/// Full application: routes, signed cookie sessions and request tracing.
pub fn build_app(state: AppState, session: &SessionConfig) -> Result<Router, ConfigError> {
    let key = Key::try_from(session.secret.as_slice()).map_err(|e| ConfigError::Invalid {
        name: "SESSION_SECRET",
        reason: e.to_string(),
    })?;
    let idle_timeout = time::Duration::try_from(session.idle_timeout).map_err(|e| ConfigError::Invalid {
        name: "SESSION_IDLE_TIMEOUT_SECS",
        reason: e.to_string(),
    })?;

    // MemoryStore keeps expired records, but they no longer load.
    let session_layer = SessionManagerLayer::new(MemoryStore::default())
        .with_name(SESSION_COOKIE_NAME)
        .with_secure(session.secure_cookie)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(idle_timeout))
        .with_signed(key);

    let app = routes::create_router(&state)
        .route("/health", get(health_check))
        .layer(session_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(app)
}

async fn health_check() -> &'static str {
    "OK"
}
