use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use tower_sessions::Session;
use tracing::{debug, info};

use crate::auth::session::current_user_id;
use crate::error::AppError;
use crate::state::AppState;

pub const LOGIN_PATH: &str = "/login";

/// Request-scoped identity, resolved once per request by [`require_auth`] and
/// handed to handlers through an `Extension`.
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub user_id: i64,
    pub username: String,
}

/// Gate for every protected route: anonymous requests, and sessions whose
/// user no longer exists, are sent to the login page.
pub async fn require_auth(
    State(state): State<AppState>,
    session: Session,
    mut req: Request,
    next: Next,
) -> Response {
    let user_id = match current_user_id(&session).await {
        Ok(Some(id)) => id,
        Ok(None) => {
            debug!(path = %req.uri().path(), "anonymous request to protected route");
            return Redirect::to(LOGIN_PATH).into_response();
        }
        Err(e) => return e.into_response(),
    };

    let user = match state.users.find_by_id(user_id).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            info!(user_id, "session refers to a missing user, clearing it");
            if let Err(e) = session.flush().await {
                return AppError::from(e).into_response();
            }
            return Redirect::to(LOGIN_PATH).into_response();
        }
        Err(e) => return e.into_response(),
    };

    req.extensions_mut().insert(AuthContext {
        user_id: user.id,
        username: user.username,
    });

    next.run(req).await
}
