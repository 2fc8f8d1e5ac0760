use sqlx::PgPool;

use super::types::{InvoiceChanges, InvoiceRecord, InvoiceSummary, NewInvoice};

pub async fn insert(pool: &PgPool, new: &NewInvoice) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO invoices (customer_id, amount, status, date) \
         VALUES ($1::uuid, $2, $3, $4)",
    )
    .bind(&new.customer_id)
    .bind(new.amount)
    .bind(new.status.as_str())
    .bind(new.date)
    .execute(pool)
    .await?;
    Ok(())
}

/// Update customer, amount and status. The invoice date is left as created.
pub async fn update(pool: &PgPool, id: &str, changes: &InvoiceChanges) -> Result<(), sqlx::Error> {
    sqlx::query(
        "UPDATE invoices \
         SET customer_id = $1::uuid, amount = $2, status = $3 \
         WHERE id = $4::uuid",
    )
    .bind(&changes.customer_id)
    .bind(changes.amount)
    .bind(changes.status.as_str())
    .bind(id)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn delete(pool: &PgPool, id: &str) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM invoices WHERE id = $1::uuid")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

/// All invoices with their customer, newest first.
pub async fn find_summaries(pool: &PgPool) -> Result<Vec<InvoiceSummary>, sqlx::Error> {
    sqlx::query_as::<_, InvoiceSummary>(
        "SELECT i.id::text AS id, c.name AS customer_name, c.email AS customer_email, \
                i.amount, i.status, i.date \
         FROM invoices i \
         JOIN customers c ON i.customer_id = c.id \
         ORDER BY i.date DESC, c.name",
    )
    .fetch_all(pool)
    .await
}

/// Find one invoice by id. A malformed id is reported as not found.
pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<InvoiceRecord>, sqlx::Error> {
    sqlx::query_as::<_, InvoiceRecord>(
        "SELECT id::text AS id, customer_id::text AS customer_id, amount, status \
         FROM invoices \
         WHERE id::text = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}
