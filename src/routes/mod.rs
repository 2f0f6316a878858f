pub mod products;
pub mod reports;
pub mod users;

use axum::Router;
use crate::state::AppState;

pub fn create_router(state: &AppState) -> Router<AppState> {
    Router::new()
        .merge(users::routes(state))
        .merge(products::routes(state))
        .merge(reports::routes(state))
}
