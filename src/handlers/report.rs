use axum::{extract::State, Json};
use tower_sessions::Session;
use tracing::instrument;

use crate::dtos::page::Page;
use crate::dtos::report::ReportPageView;
use crate::error::AppError;
use crate::handlers::render_page;
use crate::models::report::ReportView;
use crate::state::AppState;

type ReportPage = Result<Json<Page<ReportPageView>>, AppError>;

/// Read failures are not caught here; they surface as the error response.
#[instrument(skip(state, session), fields(view = view.view_name()))]
async fn show_report(state: &AppState, session: &Session, view: ReportView) -> ReportPage {
    let table = state.reports.fetch(view).await?;
    render_page(session, "tabla_generica", ReportPageView::new(view, table)).await
}

// GET /pedidos_detalles
pub async fn pedidos_detalles(State(state): State<AppState>, session: Session) -> ReportPage {
    show_report(&state, &session, ReportView::PedidosDetalles).await
}

// GET /clientes_pedidos
pub async fn clientes_pedidos(State(state): State<AppState>, session: Session) -> ReportPage {
    show_report(&state, &session, ReportView::ClientesConPedidos).await
}

// GET /ventas_resumen
pub async fn ventas_resumen(State(state): State<AppState>, session: Session) -> ReportPage {
    show_report(&state, &session, ReportView::VentasResumen).await
}

// GET /inventario_actual
pub async fn inventario_actual(State(state): State<AppState>, session: Session) -> ReportPage {
    show_report(&state, &session, ReportView::InventarioActual).await
}
