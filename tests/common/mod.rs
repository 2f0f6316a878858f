#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::http::StatusCode;
use axum_test::{TestResponse, TestServer};
use serde_json::Value;

use tienda_backend::build_app;
use tienda_backend::config::SessionConfig;
use tienda_backend::error::AppError;
use tienda_backend::models::product::{Product, ProductFields};
use tienda_backend::models::report::{ReportTable, ReportView};
use tienda_backend::models::user::User;
use tienda_backend::repositories::{ProductRepository, ReportRepository, UserRepository};
use tienda_backend::state::AppState;

#[derive(Default)]
pub struct InMemoryUsers {
    rows: Mutex<Vec<User>>,
}

impl InMemoryUsers {
    pub fn remove(&self, id: i64) {
        self.rows.lock().unwrap().retain(|u| u.id != id);
    }

    pub fn by_username(&self, username: &str) -> Option<User> {
        self.rows.lock().unwrap().iter().find(|u| u.username == username).cloned()
    }
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        Ok(self.by_username(username))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        Ok(self.rows.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn create(&self, username: &str, password_hash: &str) -> Result<User, AppError> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|u| u.username == username) {
            return Err(AppError::conflict(
                "duplicate key value violates unique constraint \"users_username_key\"",
            ));
        }
        let id = rows.iter().map(|u| u.id).max().unwrap_or(0) + 1;
        let user = User {
            id,
            username: username.to_string(),
            password_hash: password_hash.to_string(),
        };
        rows.push(user.clone());
        Ok(user)
    }
}

#[derive(Default)]
pub struct InMemoryProducts {
    rows: Mutex<(i64, Vec<Product>)>,
    pub fail_writes: AtomicBool,
}

impl InMemoryProducts {
    pub fn fail_writes(&self) {
        self.fail_writes.store(true, Ordering::SeqCst);
    }

    pub fn list_is_empty(&self) -> bool {
        self.rows.lock().unwrap().1.is_empty()
    }

    fn check_writable(&self) -> Result<(), AppError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(AppError::conflict("violates check constraint \"precio_positivo\""));
        }
        Ok(())
    }
}

#[async_trait]
impl ProductRepository for InMemoryProducts {
    async fn list(&self) -> Result<Vec<Product>, AppError> {
        Ok(self.rows.lock().unwrap().1.clone())
    }

    async fn find(&self, id: i64) -> Result<Option<Product>, AppError> {
        Ok(self.rows.lock().unwrap().1.iter().find(|p| p.id == id).cloned())
    }

    async fn create(&self, fields: &ProductFields) -> Result<Product, AppError> {
        self.check_writable()?;
        let mut guard = self.rows.lock().unwrap();
        guard.0 += 1;
        let product = Product {
            id: guard.0,
            nombre: fields.nombre.clone(),
            descripcion: fields.descripcion.clone(),
            precio_unitario: fields.precio_unitario,
        };
        guard.1.push(product.clone());
        Ok(product)
    }

    async fn update(&self, id: i64, fields: &ProductFields) -> Result<Product, AppError> {
        self.check_writable()?;
        let mut guard = self.rows.lock().unwrap();
        let product = guard
            .1
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| AppError::not_found("Producto no encontrado"))?;
        product.nombre = fields.nombre.clone();
        product.descripcion = fields.descripcion.clone();
        product.precio_unitario = fields.precio_unitario;
        Ok(product.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.check_writable()?;
        let mut guard = self.rows.lock().unwrap();
        let before = guard.1.len();
        guard.1.retain(|p| p.id != id);
        if guard.1.len() == before {
            return Err(AppError::not_found("Producto no encontrado"));
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryReports {
    tables: Mutex<HashMap<&'static str, ReportTable>>,
    pub unavailable: AtomicBool,
}

impl InMemoryReports {
    pub fn set(&self, view: ReportView, table: ReportTable) {
        self.tables.lock().unwrap().insert(view.view_name(), table);
    }
}

#[async_trait]
impl ReportRepository for InMemoryReports {
    async fn fetch(&self, view: ReportView) -> Result<ReportTable, AppError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(AppError::from(sqlx::Error::PoolTimedOut));
        }
        self.tables
            .lock()
            .unwrap()
            .get(view.view_name())
            .cloned()
            .ok_or_else(|| {
                AppError::Database(sqlx::Error::Configuration(
                    format!("relation \"{}\" does not exist", view.view_name()).into(),
                ))
            })
    }
}

pub struct TestApp {
    pub server: TestServer,
    pub users: Arc<InMemoryUsers>,
    pub products: Arc<InMemoryProducts>,
    pub reports: Arc<InMemoryReports>,
}

pub fn spawn_app() -> TestApp {
    spawn_app_with(SessionConfig {
        secret: vec![7u8; 64],
        secure_cookie: false,
        idle_timeout: Duration::from_secs(3600),
    })
}

pub fn spawn_app_with(session: SessionConfig) -> TestApp {
    let users = Arc::new(InMemoryUsers::default());
    let products = Arc::new(InMemoryProducts::default());
    let reports = Arc::new(InMemoryReports::default());

    let state = AppState {
        users: users.clone(),
        products: products.clone(),
        reports: reports.clone(),
        bcrypt_cost: 4,
    };
    let app = build_app(state, &session).unwrap();
    let server = TestServer::builder().save_cookies().build(app).unwrap();

    TestApp { server, users, products, reports }
}

impl TestApp {
    pub async fn register(&self, username: &str, password: &str) -> TestResponse {
        self.server
            .post("/register")
            .form(&[("username", username), ("password", password)])
            .await
    }

    pub async fn login(&self, username: &str, password: &str) -> TestResponse {
        self.server
            .post("/login")
            .form(&[("username", username), ("password", password)])
            .await
    }

    /// Registers `username` and leaves the server's cookie jar logged in.
    pub async fn signed_in(&self, username: &str) {
        assert_redirect(&self.register(username, "clave-segura").await, "/login");
        assert_redirect(&self.login(username, "clave-segura").await, "/");
    }

    pub async fn create_product(&self, nombre: &str, descripcion: &str, precio: &str) -> TestResponse {
        self.server
            .post("/nuevo_producto")
            .form(&[
                ("nombre", nombre),
                ("descripcion", descripcion),
                ("precio_unitario", precio),
            ])
            .await
    }

    pub async fn listing(&self) -> Vec<Value> {
        let response = self.server.get("/productos_completos").await;
        response.assert_status_ok();
        let body: Value = response.json();
        body["data"]["productos"].as_array().cloned().unwrap_or_default()
    }
}

pub fn assert_redirect(response: &TestResponse, location: &str) {
    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), location);
}

pub fn flash_messages(body: &Value) -> Vec<String> {
    body["flashes"]
        .as_array()
        .map(|flashes| {
            flashes
                .iter()
                .filter_map(|f| f["message"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}
