use sqlx::PgPool;

use super::types::{Account, NewAccount};

pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<Account>, sqlx::Error> {
    sqlx::query_as::<_, Account>(
        "SELECT id::text AS id, name, email, password FROM users WHERE email = $1",
    )
    .bind(email)
    .fetch_optional(pool)
    .await
}

pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await
}

pub async fn create(pool: &PgPool, new: &NewAccount) -> Result<String, sqlx::Error> {
    sqlx::query_scalar(
        "INSERT INTO users (name, email, password) VALUES ($1, $2, $3) RETURNING id::text",
    )
    .bind(&new.name)
    .bind(&new.email)
    .bind(&new.password)
    .fetch_one(pool)
    .await
}
