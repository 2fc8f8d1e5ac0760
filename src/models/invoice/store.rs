use sqlx::PgPool;

use super::queries;
use super::types::{InvoiceChanges, NewInvoice};

/// The write side of invoice persistence: one statement per call.
#[allow(async_fn_in_trait)]
pub trait InvoiceStore {
    async fn insert_invoice(&self, new: &NewInvoice) -> Result<(), sqlx::Error>;
    async fn update_invoice(&self, id: &str, changes: &InvoiceChanges) -> Result<(), sqlx::Error>;
    async fn delete_invoice(&self, id: &str) -> Result<(), sqlx::Error>;
}

impl InvoiceStore for PgPool {
    async fn insert_invoice(&self, new: &NewInvoice) -> Result<(), sqlx::Error> {
        queries::insert(self, new).await
    }

    async fn update_invoice(&self, id: &str, changes: &InvoiceChanges) -> Result<(), sqlx::Error> {
        queries::update(self, id, changes).await
    }

    async fn delete_invoice(&self, id: &str) -> Result<(), sqlx::Error> {
        queries::delete(self, id).await
    }
}
