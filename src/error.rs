// src/error.rs
use axum::{http::StatusCode, response::{IntoResponse, Response}, Json};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

const INVALID_DATA_MESSAGE: &str = "Datos fuera de rango o con formato inválido";

/// Every failure a handler can report. Driver errors are classified on the
/// way in so callers can give precise feedback without leaking SQL details.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("database unavailable: {0}")]
    Unavailable(String),
    #[error("database error: {0}")]
    Database(sqlx::Error),
    #[error("validation error: {0}")]
    Validation(String),
    #[error("unauthorized")]
    Unauthorized,
    #[error("session error: {0}")]
    Session(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn conflict(msg: impl Into<String>) -> Self {
        AppError::ConstraintViolation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        AppError::NotFound(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::ConstraintViolation(_) => StatusCode::CONFLICT,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Database(_) | AppError::Session(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message that is safe to show to the end user.
    pub fn public_message(&self) -> &str {
        match self {
            AppError::ConstraintViolation(_) => "El registro entra en conflicto con datos existentes",
            AppError::NotFound(msg) | AppError::Validation(msg) => msg.as_str(),
            AppError::Unavailable(_) => "Servicio no disponible, intenta más tarde",
            AppError::Unauthorized => "Acceso no autorizado",
            AppError::Database(_) => "Error de base de datos",
            AppError::Session(_) | AppError::Internal(_) => "Error interno del servidor",
        }
    }

    /// Logs the full cause; client-side kinds at warn, the rest at error.
    pub fn log(&self) {
        if self.status_code().is_server_error() {
            error!(error = %self, "request failed");
        } else {
            warn!(error = %self, "request rejected");
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log();
        let body = Json(json!({
            "error": self.public_message(),
        }));

        (self.status_code(), body).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => {
                // SQLSTATE class 23: integrity constraint violation
                let class = db_err.code().map(|code| code.chars().take(2).collect::<String>());
                if class.as_deref() == Some("23") {
                    AppError::ConstraintViolation(db_err.message().to_string())
                } else if class.as_deref() == Some("22") {
                    // SQLSTATE class 22: data exception (too long, out of range, bad format)
                    warn!(error = %db_err.message(), "rejected value");
                    AppError::Validation(INVALID_DATA_MESSAGE.to_string())
                } else {
                    AppError::Database(sqlx::Error::Database(db_err))
                }
            }
            sqlx::Error::RowNotFound => AppError::NotFound("row not found".to_string()),
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::Protocol(_) => AppError::Unavailable(err.to_string()),
            other => AppError::Database(other),
        }
    }
}

impl From<tower_sessions::session::Error> for AppError {
    fn from(err: tower_sessions::session::Error) -> Self {
        AppError::Session(err.to_string())
    }
}
