//! Form bodies posted by the invoice pages.

use serde::Deserialize;

use crate::models::invoice::InvoiceFormInput;

#[derive(Deserialize)]
pub struct InvoiceForm {
    pub csrf_token: String,
    #[serde(flatten)]
    pub input: InvoiceFormInput,
}

#[derive(Deserialize)]
pub struct CsrfOnly {
    pub csrf_token: String,
}
