use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Form field names as submitted by the invoice forms.
pub const FIELD_CUSTOMER_ID: &str = "customerId";
pub const FIELD_AMOUNT: &str = "amount";
pub const FIELD_STATUS: &str = "status";

/// Raw invoice submission. A field is `None` when the browser did not send it.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct InvoiceFormInput {
    #[serde(rename = "customerId")]
    pub customer_id: Option<String>,
    pub amount: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvoiceStatus {
    Pending,
    Paid,
}

impl InvoiceStatus {
    pub const ALL: [InvoiceStatus; 2] = [InvoiceStatus::Pending, InvoiceStatus::Paid];

    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Paid => "paid",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == raw)
    }
}

/// Largest amount, in cents, that still fits the `BIGINT` column.
pub const MAX_AMOUNT_CENTS: i64 = i64::MAX;

/// Constraint-checked projection of an `InvoiceFormInput`.
///
/// `amount` always converts to at least one cent and at most
/// `MAX_AMOUNT_CENTS`.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedInvoice {
    pub customer_id: String,
    pub amount: f64,
    pub status: InvoiceStatus,
}

impl ValidatedInvoice {
    /// Amounts are stored as integer cents.
    pub fn amount_in_cents(&self) -> i64 {
        to_cents(self.amount).unwrap_or(0)
    }
}

/// Per-field validation messages, keyed by form field name.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn add(&mut self, field: &str, message: &str) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.to_string());
    }

    pub fn get(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

/// What a rejected invoice action hands back to the form for re-display.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FormState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl FormState {
    pub fn invalid(errors: FieldErrors, message: &str) -> Self {
        Self { errors: Some(errors), message: Some(message.to_string()) }
    }

    pub fn message(message: &str) -> Self {
        Self { errors: None, message: Some(message.to_string()) }
    }

    /// Messages for one field; empty when the field passed.
    pub fn field_errors(&self, field: &str) -> &[String] {
        self.errors.as_ref().map(|e| e.get(field)).unwrap_or(&[])
    }
}

/// Row written by the create action.
#[derive(Debug, Clone, PartialEq)]
pub struct NewInvoice {
    pub customer_id: String,
    pub amount: i64, // cents
    pub status: InvoiceStatus,
    pub date: NaiveDate,
}

/// Columns the update action may change. The invoice date is not one of them.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceChanges {
    pub customer_id: String,
    pub amount: i64, // cents
    pub status: InvoiceStatus,
}

/// Invoice joined with its customer, for the dashboard list.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct InvoiceSummary {
    pub id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub amount: i64,
    pub status: String,
    pub date: NaiveDate,
}

impl InvoiceSummary {
    pub fn amount_display(&self) -> String {
        format_cents(self.amount)
    }

    pub fn date_display(&self) -> String {
        self.date.format("%b %-d, %Y").to_string()
    }
}

/// Stored invoice fields needed to pre-fill the edit form.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct InvoiceRecord {
    pub id: String,
    pub customer_id: String,
    pub amount: i64,
    pub status: String,
}

impl InvoiceRecord {
    /// The edit form shows dollars, not cents.
    pub fn to_form_input(&self) -> InvoiceFormInput {
        InvoiceFormInput {
            customer_id: Some(self.customer_id.clone()),
            amount: Some(format!("{:.2}", self.amount as f64 / 100.0)),
            status: Some(self.status.clone()),
        }
    }
}

/// Round a dollar amount to whole cents. `None` when the result does not
/// fit in an `i64` or the input is not finite.
pub fn to_cents(amount: f64) -> Option<i64> {
    let cents = (amount * 100.0).round();
    // i64::MAX as f64 rounds up to 2^63, which is itself out of range.
    if cents.is_finite() && cents >= i64::MIN as f64 && cents < i64::MAX as f64 {
        Some(cents as i64)
    } else {
        None
    }
}

/// Format integer cents as `$1,234.50`.
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    let dollars = (cents / 100).to_string();
    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, ch) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}${grouped}.{:02}", cents % 100)
}
