use sqlx::PgPool;

/// Customer choice for the invoice form's select box.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CustomerOption {
    pub id: String,
    pub name: String,
}

pub async fn find_options(pool: &PgPool) -> Result<Vec<CustomerOption>, sqlx::Error> {
    sqlx::query_as::<_, CustomerOption>(
        "SELECT id::text AS id, name FROM customers ORDER BY name ASC",
    )
    .fetch_all(pool)
    .await
}
