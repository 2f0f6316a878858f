//! Persistence seams. Handlers only see these traits; the Postgres
//! implementations live next to them and are wired up in `AppState`.

pub mod products;
pub mod reports;
pub mod users;

use async_trait::async_trait;

use crate::error::AppError;
use crate::models::product::{Product, ProductFields};
use crate::models::report::{ReportTable, ReportView};
use crate::models::user::User;

pub use products::PgProductRepository;
pub use reports::PgReportRepository;
pub use users::PgUserRepository;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError>;

    /// Inserts a user. A taken username surfaces as `ConstraintViolation`.
    async fn create(&self, username: &str, password_hash: &str) -> Result<User, AppError>;
}

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products in storage order.
    async fn list(&self) -> Result<Vec<Product>, AppError>;

    async fn find(&self, id: i64) -> Result<Option<Product>, AppError>;

    async fn create(&self, fields: &ProductFields) -> Result<Product, AppError>;

    /// Overwrites every mutable field. `NotFound` when the id does not exist.
    async fn update(&self, id: i64, fields: &ProductFields) -> Result<Product, AppError>;

    /// `NotFound` when the id does not exist.
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}

#[async_trait]
pub trait ReportRepository: Send + Sync {
    async fn fetch(&self, view: ReportView) -> Result<ReportTable, AppError>;
}
