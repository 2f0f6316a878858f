use axum::{
    routing::{get, post},
    Router, middleware,
};
use crate::handlers::product::{
    new_product_page, create_product, list_products, edit_product_page, update_product, delete_product
};
use crate::middleware::auth::require_auth;
use crate::state::AppState;

pub fn routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/nuevo_producto", get(new_product_page).post(create_product))
        .route("/productos_completos", get(list_products))
        .route("/editar_producto/{id}", get(edit_product_page).post(update_product))
        .route("/eliminar_producto/{id}", post(delete_product))
        .layer(middleware::from_fn_with_state(state.clone(), require_auth))
}
