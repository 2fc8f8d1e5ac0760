use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::auth::password;
use crate::errors::AppError;
use crate::models::account::{self, NewAccount};

pub const MIGRATIONS: &str = include_str!("schema.sql");

const MAX_CONNECTIONS: u32 = 8;

pub async fn init_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect(database_url)
        .await
}

pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(MIGRATIONS).execute(pool).await?;
    log::info!("Database migrations complete");
    Ok(())
}

/// Create the first dashboard account when `users` is empty.
pub async fn seed_admin(pool: &PgPool, email: &str, plain_password: &str) -> Result<(), AppError> {
    let count = account::count(pool).await?;
    if count > 0 {
        log::info!("Database already has {count} user(s), skipping admin seed");
        return Ok(());
    }

    let new = NewAccount {
        name: "Admin".to_string(),
        email: email.to_string(),
        password: password::hash_password(plain_password)?,
    };
    let id = account::create(pool, &new).await?;
    log::info!("Seeded admin user {email} ({id})");
    Ok(())
}
