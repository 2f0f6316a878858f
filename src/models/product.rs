use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Product {
    pub id: i64,
    pub nombre: String,
    pub descripcion: String,
    pub precio_unitario: Decimal,
}

/// The three mutable columns, used for both insert and full overwrite.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductFields {
    pub nombre: String,
    pub descripcion: String,
    pub precio_unitario: Decimal,
}
