//! Invoice form schema.
//!
//! `safe_parse` reports every failing field; `parse` is the strict variant
//! that turns the same report into an `AppError`.

use super::types::{
    FIELD_AMOUNT, FIELD_CUSTOMER_ID, FIELD_STATUS, FieldErrors, InvoiceFormInput, InvoiceStatus,
    MAX_AMOUNT_CENTS, ValidatedInvoice, to_cents,
};
use crate::errors::AppError;

pub const CUSTOMER_REQUIRED: &str = "Please select a customer";
pub const AMOUNT_NOT_POSITIVE: &str = "Please enter an amount greater than 0.";
pub const STATUS_INVALID: &str = "Please select an invoice status";

/// Validate a raw submission, collecting a message for each failing field.
pub fn safe_parse(input: &InvoiceFormInput) -> Result<ValidatedInvoice, FieldErrors> {
    let mut errors = FieldErrors::default();

    let customer_id = match input.customer_id.as_deref().map(str::trim) {
        Some(id) if !id.is_empty() => Some(id.to_string()),
        _ => {
            errors.add(FIELD_CUSTOMER_ID, CUSTOMER_REQUIRED);
            None
        }
    };

    // Checked on the stored value: a sub-cent amount would round to zero.
    let amount = match coerce_amount(input.amount.as_deref()) {
        Some(n) if to_cents(n).is_some_and(|c| (1..=MAX_AMOUNT_CENTS).contains(&c)) => Some(n),
        _ => {
            errors.add(FIELD_AMOUNT, AMOUNT_NOT_POSITIVE);
            None
        }
    };

    let status = match input.status.as_deref().and_then(InvoiceStatus::parse) {
        Some(s) => Some(s),
        None => {
            errors.add(FIELD_STATUS, STATUS_INVALID);
            None
        }
    };

    match (customer_id, amount, status) {
        (Some(customer_id), Some(amount), Some(status)) => Ok(ValidatedInvoice {
            customer_id,
            amount,
            status,
        }),
        _ => Err(errors),
    }
}

/// Strict variant of `safe_parse`.
pub fn parse(input: &InvoiceFormInput) -> Result<ValidatedInvoice, AppError> {
    safe_parse(input).map_err(AppError::Validation)
}

/// Number coercion for form text: blank (or missing) text counts as zero,
/// anything that is not a finite decimal number is rejected.
fn coerce_amount(raw: Option<&str>) -> Option<f64> {
    let trimmed = raw.unwrap_or("").trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}
