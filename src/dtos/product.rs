// src/dtos/product.rs
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::product::{Product, ProductFields};

/// Body of `POST /nuevo_producto` and `POST /editar_producto/{id}`.
#[derive(Debug, Deserialize)]
pub struct ProductForm {
    pub nombre: String,
    pub descripcion: String,
    // Parsed by `TryFrom<ProductForm>`.
    #[serde(default)]
    pub precio_unitario: String,
}

impl TryFrom<ProductForm> for ProductFields {
    type Error = AppError;

    fn try_from(form: ProductForm) -> Result<Self, Self::Error> {
        let precio_unitario = Decimal::from_str(form.precio_unitario.trim())
            .map_err(|_| AppError::validation("Precio unitario inválido"))?;

        Ok(Self {
            nombre: form.nombre,
            descripcion: form.descripcion,
            precio_unitario,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct ProductListView {
    pub productos: Vec<Product>,
}

#[derive(Debug, Serialize)]
pub struct ProductView {
    pub producto: Product,
}
