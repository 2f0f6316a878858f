pub mod home;
pub mod product;
pub mod report;
pub mod user;

use axum::Json;
use serde::Serialize;
use tower_sessions::Session;

use crate::auth::session::take_flashes;
use crate::dtos::page::Page;
use crate::error::AppError;

/// Wraps page data with the flashes pending in `session`, draining them.
pub(crate) async fn render_page<T: Serialize>(
    session: &Session,
    page: &'static str,
    data: T,
) -> Result<Json<Page<T>>, AppError> {
    let flashes = take_flashes(session).await?;
    Ok(Json(Page { page, flashes, data }))
}
