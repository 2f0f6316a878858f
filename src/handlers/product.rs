// src/handlers/product.rs
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Redirect, Response};
use axum::{Form, Json};
use tower_sessions::Session;
use tracing::{info, instrument};

use crate::auth::session::{flash, FlashLevel};
use crate::dtos::page::Page;
use crate::dtos::product::{ProductForm, ProductListView, ProductView};
use crate::error::AppError;
use crate::handlers::render_page;
use crate::models::product::ProductFields;
use crate::state::AppState;

pub const PRODUCT_LIST_PATH: &str = "/productos_completos";

// GET /nuevo_producto - empty form
pub async fn new_product_page(session: Session) -> Result<Json<Page<()>>, AppError> {
    render_page(&session, "nuevo_producto", ()).await
}

// POST /nuevo_producto - Create new product
#[instrument(skip(state, session))]
pub async fn create_product(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<ProductForm>,
) -> Result<Response, AppError> {
    let created = match ProductFields::try_from(form) {
        Ok(fields) => state.products.create(&fields).await,
        Err(e) => Err(e),
    };

    match created {
        Ok(product) => {
            info!(id = product.id, "Product created");
            flash(&session, FlashLevel::Info, "Producto creado exitosamente.").await?;
            Ok(Redirect::to(PRODUCT_LIST_PATH).into_response())
        }
        Err(e) => {
            e.log();
            flash(&session, FlashLevel::Error, "Error al crear el producto. Intenta nuevamente.").await?;
            let page = render_page(&session, "nuevo_producto", ()).await?;
            Ok((e.status_code(), page).into_response())
        }
    }
}

// GET /productos_completos - List all products
#[instrument(skip(state, session))]
pub async fn list_products(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<Page<ProductListView>>, AppError> {
    let productos = state.products.list().await?;
    render_page(&session, "productos_completos", ProductListView { productos }).await
}

// GET /editar_producto/{id} - current values
#[instrument(skip(state, session))]
pub async fn edit_product_page(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<Page<ProductView>>, AppError> {
    let producto = state
        .products
        .find(id)
        .await?
        .ok_or_else(|| AppError::not_found("Producto no encontrado"))?;

    render_page(&session, "editar_producto", ProductView { producto }).await
}

// POST /editar_producto/{id} - overwrite all fields
#[instrument(skip(state, session))]
pub async fn update_product(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<ProductForm>,
) -> Result<Redirect, AppError> {
    let updated = match ProductFields::try_from(form) {
        Ok(fields) => state.products.update(id, &fields).await,
        Err(e) => Err(e),
    };

    match updated {
        Ok(_) => {
            info!(id, "Product updated");
            flash(&session, FlashLevel::Info, "Producto actualizado correctamente.").await?;
        }
        Err(e @ AppError::NotFound(_)) => return Err(e),
        Err(e) => {
            e.log();
            flash(&session, FlashLevel::Error, "Error al actualizar el producto.").await?;
        }
    }

    Ok(Redirect::to(PRODUCT_LIST_PATH))
}

// POST /eliminar_producto/{id} - always back to the listing
#[instrument(skip(state, session))]
pub async fn delete_product(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    session: Session,
) -> Result<Redirect, AppError> {
    match state.products.delete(id).await {
        Ok(()) => {
            info!(id, "Product deleted");
            flash(&session, FlashLevel::Info, "Producto eliminado correctamente.").await?;
        }
        Err(AppError::NotFound(_)) => {
            flash(&session, FlashLevel::Error, "Producto no encontrado.").await?;
        }
        Err(e) => {
            e.log();
            flash(&session, FlashLevel::Error, "No se pudo eliminar el producto.").await?;
        }
    }

    Ok(Redirect::to(PRODUCT_LIST_PATH))
}
