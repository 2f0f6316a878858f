use axum::{extract::Extension, Json};
use tower_sessions::Session;

use crate::dtos::page::Page;
use crate::dtos::user::{IndexView, NavLink};
use crate::error::AppError;
use crate::handlers::render_page;
use crate::middleware::auth::AuthContext;
use crate::models::report::ReportView;

// GET / - landing page
pub async fn index(
    session: Session,
    Extension(auth): Extension<AuthContext>,
) -> Result<Json<Page<IndexView>>, AppError> {
    let mut links: Vec<NavLink> = ReportView::ALL
        .iter()
        .map(|view| NavLink { title: view.title(), path: view.path() })
        .collect();
    links.push(NavLink { title: "Productos", path: "/productos_completos" });
    links.push(NavLink { title: "Nuevo Producto", path: "/nuevo_producto" });
    links.push(NavLink { title: "Cerrar sesión", path: "/logout" });

    render_page(&session, "index", IndexView { username: auth.username, links }).await
}
