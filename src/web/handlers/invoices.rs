//! Invoices page.

use askama::Template;
use axum::{extract::State, response::Html};

use super::{PAGE_ROWS, cached_page, display_datetime};
use crate::domain::entities::Invoice;
use crate::domain::views;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::currency::format_currency;

struct InvoiceRow {
    id: i64,
    patient_name: String,
    issued_at: String,
    amount: String,
    status_label: &'static str,
    status_class: &'static str,
    can_pay: bool,
}

impl InvoiceRow {
    /// Fails if the invoice currency has no display rule.
    fn try_from_invoice(invoice: Invoice) -> Result<Self, AppError> {
        Ok(InvoiceRow {
            id: invoice.id,
            amount: format_currency(invoice.amount, &invoice.currency)?,
            can_pay: !invoice.is_paid(),
            patient_name: invoice
                .patient_name
                .unwrap_or_else(|| format!("Patient #{}", invoice.patient_id)),
            issued_at: display_datetime(invoice.issued_at),
            status_label: invoice.status.label(),
            status_class: invoice.status.as_str(),
        })
    }
}

#[derive(Template)]
#[template(path = "invoices.html")]
struct InvoicesTemplate {
    total: i64,
    rows: Vec<InvoiceRow>,
}

/// `GET /invoices`
pub async fn invoices_handler(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    cached_page(&state, views::INVOICES, || async {
        let (invoices, total) = tokio::try_join!(
            state.invoice_service.list(None, 0, PAGE_ROWS),
            state.invoice_service.count(None)
        )?;

        let rows = invoices
            .into_iter()
            .map(InvoiceRow::try_from_invoice)
            .collect::<Result<Vec<_>, _>>()?;

        Ok::<_, AppError>(InvoicesTemplate { total, rows }.render()?)
    })
    .await
}
