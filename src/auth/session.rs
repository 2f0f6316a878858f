//! Session payload helpers on top of `tower-sessions`.
//!
//! The cookie only carries a signed session id. The session record holds the
//! authenticated user id under [`SESSION_USER_ID_KEY`] and a queue of flash
//! messages under [`FLASHES_KEY`] that the next rendered page drains.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::error::AppError;

/// Key for storing user ID in session.
pub const SESSION_USER_ID_KEY: &str = "user_id";

/// Key for the pending flash messages.
pub const FLASHES_KEY: &str = "_flashes";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub level: FlashLevel,
    pub message: String,
}

pub async fn flash(session: &Session, level: FlashLevel, message: impl Into<String>) -> Result<(), AppError> {
    let mut pending: Vec<Flash> = session.get(FLASHES_KEY).await?.unwrap_or_default();
    pending.push(Flash { level, message: message.into() });
    session.insert(FLASHES_KEY, pending).await?;
    Ok(())
}

/// Returns and clears the queued messages; each one is shown once.
pub async fn take_flashes(session: &Session) -> Result<Vec<Flash>, AppError> {
    Ok(session.remove::<Vec<Flash>>(FLASHES_KEY).await?.unwrap_or_default())
}

pub async fn current_user_id(session: &Session) -> Result<Option<i64>, AppError> {
    Ok(session.get::<i64>(SESSION_USER_ID_KEY).await?)
}

/// Binds the session to `user_id` under a fresh session id.
pub async fn sign_in(session: &Session, user_id: i64) -> Result<(), AppError> {
    session.cycle_id().await?;
    session.insert(SESSION_USER_ID_KEY, user_id).await?;
    Ok(())
}

/// Drops the identity and rotates the id. Other keys (pending flashes) survive
/// so the logout notice still reaches the login page.
pub async fn sign_out(session: &Session) -> Result<(), AppError> {
    session.remove::<i64>(SESSION_USER_ID_KEY).await?;
    session.cycle_id().await?;
    Ok(())
}
