use axum::{routing::get, Router, middleware};
use crate::handlers::report::{pedidos_detalles, clientes_pedidos, ventas_resumen, inventario_actual};
use crate::middleware::auth::require_auth;
use crate::state::AppState;

pub fn routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/pedidos_detalles", get(pedidos_detalles))
        .route("/clientes_pedidos", get(clientes_pedidos))
        .route("/ventas_resumen", get(ventas_resumen))
        .route("/inventario_actual", get(inventario_actual))
        .layer(middleware::from_fn_with_state(state.clone(), require_auth))
}
