//! Invoice form actions: validate, write once, revalidate the list, redirect.
//!
//! These take the store and cache as parameters so the HTTP handlers can
//! pass the real pool while tests pass in-memory fakes.

use chrono::Utc;

use crate::cache::{INVOICES_PATH, ViewCache};
use crate::errors::AppError;
use crate::models::invoice::{
    FormState, InvoiceChanges, InvoiceFormInput, InvoiceStore, NewInvoice, schema,
};

pub const CREATE_INVALID: &str = "Missing fields, failed to create invoice";
pub const CREATE_DB_FAILED: &str = "Database error. Failed to create an invoice.";
pub const UPDATE_INVALID: &str = "Missing fields, failed to update invoice";
pub const UPDATE_DB_FAILED: &str = "Database error. Failed to update the invoice.";
pub const DELETE_FAILED: &str = "Failed!";

/// How a form action ended. A redirect is terminal: nothing else is returned.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome {
    Redirect(&'static str),
    Rejected(FormState),
}

pub async fn create_invoice<S: InvoiceStore>(
    store: &S,
    cache: &ViewCache,
    input: &InvoiceFormInput,
) -> ActionOutcome {
    log::debug!("create invoice input: {}", raw_json(input));

    let validated = match schema::safe_parse(input) {
        Ok(v) => v,
        Err(errors) => return ActionOutcome::Rejected(FormState::invalid(errors, CREATE_INVALID)),
    };

    let new = NewInvoice {
        amount: validated.amount_in_cents(),
        customer_id: validated.customer_id,
        status: validated.status,
        date: Utc::now().date_naive(),
    };

    if let Err(e) = store.insert_invoice(&new).await {
        log::error!("Create invoice error: {e}");
        return ActionOutcome::Rejected(FormState::message(CREATE_DB_FAILED));
    }

    cache.revalidate(INVOICES_PATH);
    ActionOutcome::Redirect(INVOICES_PATH)
}

pub async fn update_invoice<S: InvoiceStore>(
    store: &S,
    cache: &ViewCache,
    id: &str,
    input: &InvoiceFormInput,
) -> ActionOutcome {
    log::debug!("update invoice {id} input: {}", raw_json(input));

    let validated = match schema::safe_parse(input) {
        Ok(v) => v,
        Err(errors) => return ActionOutcome::Rejected(FormState::invalid(errors, UPDATE_INVALID)),
    };

    let changes = InvoiceChanges {
        amount: validated.amount_in_cents(),
        customer_id: validated.customer_id,
        status: validated.status,
    };

    if let Err(e) = store.update_invoice(id, &changes).await {
        log::error!("Update invoice {id} error: {e}");
        return ActionOutcome::Rejected(FormState::message(UPDATE_DB_FAILED));
    }

    cache.revalidate(INVOICES_PATH);
    ActionOutcome::Redirect(INVOICES_PATH)
}

/// Always fails before reaching the store; deletion is disabled.
// TODO: once deletion is re-enabled, call `store.delete_invoice(id)`, map its
// error to "Database Error. Failed to delete the invoice." and revalidate
// INVOICES_PATH.
pub async fn delete_invoice<S: InvoiceStore>(
    _store: &S,
    _cache: &ViewCache,
    id: &str,
) -> Result<ActionOutcome, AppError> {
    log::info!("deleting invoice of id {id}");
    Err(AppError::Failed(DELETE_FAILED.to_string()))
}

fn raw_json(input: &InvoiceFormInput) -> String {
    serde_json::to_string(input).unwrap_or_else(|_| format!("{input:?}"))
}
