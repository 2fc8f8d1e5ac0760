use std::sync::Arc;

use askama::Template;

use crate::models::customer::CustomerOption;
use crate::models::invoice::{FormState, InvoiceFormInput, InvoiceSummary};
use super::PageContext;

#[derive(Template)]
#[template(path = "invoices/list.html")]
pub struct InvoiceListTemplate {
    pub ctx: PageContext,
    pub invoices: Arc<Vec<InvoiceSummary>>,
}

#[derive(Template)]
#[template(path = "invoices/form.html")]
pub struct InvoiceFormTemplate {
    pub ctx: PageContext,
    pub form_action: String,
    pub form_title: String,
    pub submit_label: String,
    pub customers: Vec<CustomerOption>,
    pub values: InvoiceFormInput,
    pub state: FormState,
}

impl InvoiceFormTemplate {
    pub fn create(
        ctx: PageContext,
        customers: Vec<CustomerOption>,
        values: InvoiceFormInput,
        state: FormState,
    ) -> Self {
        Self {
            ctx,
            form_action: "/dashboard/invoices".to_string(),
            form_title: "Create Invoice".to_string(),
            submit_label: "Create Invoice".to_string(),
            customers,
            values,
            state,
        }
    }

    pub fn edit(
        ctx: PageContext,
        id: &str,
        customers: Vec<CustomerOption>,
        values: InvoiceFormInput,
        state: FormState,
    ) -> Self {
        Self {
            ctx,
            form_action: format!("/dashboard/invoices/{id}"),
            form_title: "Edit Invoice".to_string(),
            submit_label: "Edit Invoice".to_string(),
            customers,
            values,
            state,
        }
    }

    pub fn is_selected_customer(&self, id: &str) -> bool {
        self.values.customer_id.as_deref() == Some(id)
    }

    pub fn is_status(&self, status: &str) -> bool {
        self.values.status.as_deref() == Some(status)
    }

    pub fn amount_value(&self) -> &str {
        self.values.amount.as_deref().unwrap_or("")
    }

    pub fn field_errors(&self, field: &str) -> &[String] {
        self.state.field_errors(field)
    }
}
