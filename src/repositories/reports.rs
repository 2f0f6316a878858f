use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde_json::Value;
use sqlx::postgres::PgRow;
use sqlx::{Column, Executor, PgPool, Row, Statement, TypeInfo, ValueRef};
use tracing::{debug, instrument};

use super::ReportRepository;
use crate::error::AppError;
use crate::models::report::{ReportTable, ReportView};

#[derive(Clone)]
pub struct PgReportRepository {
    pool: PgPool,
}

impl PgReportRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReportRepository for PgReportRepository {
    #[instrument(skip(self), fields(view = view.view_name()))]
    async fn fetch(&self, view: ReportView) -> Result<ReportTable, AppError> {
        let sql = view.select_all();
        let mut conn = self.pool.acquire().await?;

        // Preparing first gives the column descriptor even for an empty view.
        let statement = (&mut *conn).prepare(sql.as_str()).await?;
        let columns = statement
            .columns()
            .iter()
            .map(|c| c.name().to_string())
            .collect();

        let rows = statement.query().fetch_all(&mut *conn).await?;
        let rows = rows.iter().map(row_to_json).collect();

        Ok(ReportTable { columns, rows })
    }
}

fn row_to_json(row: &PgRow) -> Vec<Value> {
    (0..row.len()).map(|index| cell_to_json(row, index)).collect()
}

/// Converts one cell by its Postgres type. Types without a mapping are read
/// as text when the driver allows it and fall back to `null` otherwise.
fn cell_to_json(row: &PgRow, index: usize) -> Value {
    match row.try_get_raw(index) {
        Ok(raw) if raw.is_null() => return Value::Null,
        Ok(_) => {}
        Err(e) => {
            debug!(?e, index, "unreadable report cell");
            return Value::Null;
        }
    }

    let type_name = row.column(index).type_info().name().to_string();
    let converted = match type_name.as_str() {
        "BOOL" => row.try_get::<bool, _>(index).map(Value::from),
        "INT2" => row.try_get::<i16, _>(index).map(Value::from),
        "INT4" => row.try_get::<i32, _>(index).map(Value::from),
        "INT8" => row.try_get::<i64, _>(index).map(Value::from),
        "FLOAT4" => row.try_get::<f32, _>(index).map(Value::from),
        "FLOAT8" => row.try_get::<f64, _>(index).map(Value::from),
        "NUMERIC" => row
            .try_get::<Decimal, _>(index)
            .map(|d| Value::String(d.to_string())),
        "DATE" => row
            .try_get::<NaiveDate, _>(index)
            .map(|d| Value::String(d.format("%Y-%m-%d").to_string())),
        "TIME" => row
            .try_get::<NaiveTime, _>(index)
            .map(|t| Value::String(t.format("%H:%M:%S%.f").to_string())),
        "TIMESTAMP" => row
            .try_get::<NaiveDateTime, _>(index)
            .map(|t| Value::String(t.format("%Y-%m-%dT%H:%M:%S%.f").to_string())),
        "TIMESTAMPTZ" => row
            .try_get::<DateTime<Utc>, _>(index)
            .map(|t| Value::String(t.to_rfc3339())),
        "JSON" | "JSONB" => row.try_get::<Value, _>(index),
        _ => row.try_get::<String, _>(index).map(Value::String),
    };

    converted.unwrap_or_else(|e| {
        debug!(?e, index, %type_name, "report cell fell back to null");
        Value::Null
    })
}
