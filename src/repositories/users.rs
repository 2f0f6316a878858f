use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use super::UserRepository;
use crate::error::AppError;
use crate::models::user::User;

#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id::INT8 AS id, username, password FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id::INT8 AS id, username, password FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    #[instrument(skip(self, password_hash))]
    async fn create(&self, username: &str, password_hash: &str) -> Result<User, AppError> {
        // Dropping the transaction without commit rolls it back.
        let mut tx = self.pool.begin().await?;

        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (username, password) VALUES ($1, $2)
             RETURNING id::INT8 AS id, username, password",
        )
        .bind(username)
        .bind(password_hash)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(user)
    }
}
