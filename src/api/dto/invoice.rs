//! DTOs for invoice endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::entities::{Invoice, InvoiceStatus};
use crate::utils::currency::{format_currency, is_supported};

fn validate_currency(code: &str) -> Result<(), ValidationError> {
    if is_supported(&code.trim().to_ascii_uppercase()) {
        Ok(())
    } else {
        Err(ValidationError::new("unsupported_currency"))
    }
}

/// Request body for `POST /api/invoices`.
///
/// `currency` defaults to the configured currency when absent.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateInvoiceRequest {
    #[validate(range(min = 1, message = "Invalid patient id"))]
    pub patient_id: i64,

    #[validate(range(min = 1, message = "Invalid appointment id"))]
    pub appointment_id: Option<i64>,

    #[validate(range(min = 0.0, max = 1_000_000_000.0, message = "Amount out of range"))]
    pub amount: f64,

    #[validate(custom(function = "validate_currency"))]
    pub currency: Option<String>,
}

/// JSON representation of an invoice.
///
/// `amount_display` is `null` when the currency has no display rule.
#[derive(Debug, Serialize, Deserialize)]
pub struct InvoiceItem {
    pub id: i64,
    pub patient_id: i64,
    pub patient_name: Option<String>,
    pub appointment_id: Option<i64>,
    pub amount: f64,
    pub currency: String,
    pub amount_display: Option<String>,
    pub status: InvoiceStatus,
    pub issued_at: DateTime<Utc>,
}

impl From<Invoice> for InvoiceItem {
    fn from(i: Invoice) -> Self {
        let amount_display = format_currency(i.amount, &i.currency).ok();
        InvoiceItem {
            id: i.id,
            patient_id: i.patient_id,
            patient_name: i.patient_name,
            appointment_id: i.appointment_id,
            amount: i.amount,
            currency: i.currency,
            amount_display,
            status: i.status,
            issued_at: i.issued_at,
        }
    }
}
