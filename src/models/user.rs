use sqlx::FromRow;

/// Row of the `users` table. The hash lives in the `password` column.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[sqlx(rename = "password")]
    pub password_hash: String,
}
