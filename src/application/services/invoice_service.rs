//! Invoice issuing and lookups.

use std::sync::Arc;

use serde_json::json;
use tracing::info;

use crate::application::services::RevalidationService;
use crate::domain::entities::{Invoice, InvoiceStatus, NewInvoice};
use crate::domain::repositories::InvoiceRepository;
use crate::domain::views::EntityKind;
use crate::error::AppError;
use crate::utils::currency::is_supported;

/// Service for invoices.
///
/// Payment goes through [`crate::application::services::StatusService`].
pub struct InvoiceService {
    repository: Arc<dyn InvoiceRepository>,
    revalidation: RevalidationService,
    default_currency: String,
}

impl InvoiceService {
    pub fn new(
        repository: Arc<dyn InvoiceRepository>,
        revalidation: RevalidationService,
        default_currency: String,
    ) -> Self {
        Self {
            repository,
            revalidation,
            default_currency,
        }
    }

    /// Currency applied to invoices issued without one.
    pub fn default_currency(&self) -> &str {
        &self.default_currency
    }

    pub async fn list(
        &self,
        status: Option<InvoiceStatus>,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Invoice>, AppError> {
        self.repository.list(status, offset, limit).await
    }

    pub async fn count(&self, status: Option<InvoiceStatus>) -> Result<i64, AppError> {
        self.repository.count(status).await
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no invoice has this id.
    pub async fn get(&self, id: i64) -> Result<Invoice, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Invoice not found", json!({ "id": id })))
    }

    /// Issues an unpaid invoice.
    ///
    /// `currency` is matched case-insensitively against the catalog; `None`
    /// falls back to the configured default.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a currency outside the catalog or
    /// an unknown patient or appointment.
    pub async fn issue(
        &self,
        patient_id: i64,
        appointment_id: Option<i64>,
        amount: f64,
        currency: Option<&str>,
    ) -> Result<Invoice, AppError> {
        let currency = currency
            .map(|c| c.trim().to_ascii_uppercase())
            .unwrap_or_else(|| self.default_currency.clone());

        if !is_supported(&currency) {
            return Err(AppError::bad_request(
                "Unsupported currency",
                json!({ "currency": currency }),
            ));
        }

        let invoice = self
            .repository
            .create(NewInvoice {
                patient_id,
                appointment_id,
                amount,
                currency,
            })
            .await?;
        info!(
            invoice_id = invoice.id,
            patient_id,
            currency = %invoice.currency,
            "Invoice issued"
        );

        self.revalidation.revalidate(EntityKind::Invoice).await;
        Ok(invoice)
    }
}
