use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{error, instrument};

use super::ProductRepository;
use crate::error::AppError;
use crate::models::product::{Product, ProductFields};

// Casts keep the row decodable whether the schema uses SERIAL or BIGSERIAL ids
// and NUMERIC or floating point prices.
const PRODUCT_COLUMNS: &str = "id::INT8 AS id, nombre,
    COALESCE(descripcion, '') AS descripcion,
    precio_unitario::NUMERIC AS precio_unitario";

#[derive(Clone)]
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<Product>, AppError> {
        match sqlx::query_as::<_, Product>(&format!("SELECT {PRODUCT_COLUMNS} FROM productos"))
            .fetch_all(&self.pool)
            .await
        {
            Ok(products) => Ok(products),
            Err(e) => {
                error!(?e, "Failed to fetch products");
                Err(e.into())
            }
        }
    }

    #[instrument(skip(self))]
    async fn find(&self, id: i64) -> Result<Option<Product>, AppError> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM productos WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    #[instrument(skip(self))]
    async fn create(&self, fields: &ProductFields) -> Result<Product, AppError> {
        let mut tx = self.pool.begin().await?;

        let product = sqlx::query_as::<_, Product>(&format!(
            "INSERT INTO productos (nombre, descripcion, precio_unitario)
             VALUES ($1, $2, $3) RETURNING {PRODUCT_COLUMNS}"
        ))
        .bind(&fields.nombre)
        .bind(&fields.descripcion)
        .bind(fields.precio_unitario)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(product)
    }

    #[instrument(skip(self))]
    async fn update(&self, id: i64, fields: &ProductFields) -> Result<Product, AppError> {
        let mut tx = self.pool.begin().await?;

        let product = sqlx::query_as::<_, Product>(&format!(
            "UPDATE productos
             SET nombre = $1, descripcion = $2, precio_unitario = $3
             WHERE id = $4 RETURNING {PRODUCT_COLUMNS}"
        ))
        .bind(&fields.nombre)
        .bind(&fields.descripcion)
        .bind(fields.precio_unitario)
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::not_found("Producto no encontrado"))?;

        tx.commit().await?;
        Ok(product)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM productos WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Producto no encontrado"));
        }

        tx.commit().await?;
        Ok(())
    }
}
