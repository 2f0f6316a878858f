// src/state.rs
use std::sync::Arc;

use sqlx::PgPool;

use crate::repositories::{
    PgProductRepository, PgReportRepository, PgUserRepository, ProductRepository,
    ReportRepository, UserRepository,
};

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub products: Arc<dyn ProductRepository>,
    pub reports: Arc<dyn ReportRepository>,
    pub bcrypt_cost: u32,
}

impl AppState {
    /// Wires every repository to the same Postgres pool.
    pub fn new(db_pool: PgPool, bcrypt_cost: u32) -> Self {
        Self {
            users: Arc::new(PgUserRepository::new(db_pool.clone())),
            products: Arc::new(PgProductRepository::new(db_pool.clone())),
            reports: Arc::new(PgReportRepository::new(db_pool)),
            bcrypt_cost,
        }
    }
}
