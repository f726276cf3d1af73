//! Repository trait for invoice data access.

use crate::domain::entities::{Invoice, InvoiceStatus, NewInvoice};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for invoices.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgInvoiceRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InvoiceRepository: Send + Sync {
    /// Issues an invoice with status `unpaid`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the patient or appointment does not exist.
    async fn create(&self, new_invoice: NewInvoice) -> Result<Invoice, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Invoice>, AppError>;

    /// Lists invoices, most recently issued first.
    async fn list(
        &self,
        status: Option<InvoiceStatus>,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Invoice>, AppError>;

    async fn count(&self, status: Option<InvoiceStatus>) -> Result<i64, AppError>;

    /// Overwrites the status of one invoice.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no row has this id.
    async fn update_status(&self, id: i64, status: InvoiceStatus) -> Result<(), AppError>;
}
