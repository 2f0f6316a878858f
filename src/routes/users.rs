use axum::{Router, routing::get, middleware};
use crate::state::AppState;
use crate::handlers::home::index;
use crate::handlers::user::{login_page, login_user, register_page, register_user, logout_user};
use crate::middleware::auth::require_auth;

pub fn routes(state: &AppState) -> Router<AppState> {
    let open = Router::new()
        .route("/login", get(login_page).post(login_user))
        .route("/register", get(register_page).post(register_user));

    let protected = Router::new()
        .route("/", get(index))
        .route("/logout", get(logout_user))
        .layer(middleware::from_fn_with_state(state.clone(), require_auth));

    open.merge(protected)
}
