//! Handlers for invoice endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::action::ActionResponse;
use crate::api::dto::invoice::{CreateInvoiceRequest, InvoiceItem};
use crate::api::dto::pagination::{ListResponse, PaginationMeta, StatusQueryParams};
use crate::domain::entities::InvoiceStatus;
use crate::error::AppError;
use crate::state::AppState;

/// Lists invoices, newest first.
///
/// # Endpoint
///
/// `GET /api/invoices?status=unpaid&page=1`
pub async fn invoice_list_handler(
    State(state): State<AppState>,
    Query(params): Query<StatusQueryParams<InvoiceStatus>>,
) -> Result<Json<ListResponse<InvoiceItem>>, AppError> {
    let (offset, limit) = params
        .pagination
        .validate_and_get_offset_limit()
        .map_err(|e| AppError::bad_request(e, json!({})))?;

    let (invoices, total_items) = tokio::try_join!(
        state.invoice_service.list(params.status, offset, limit),
        state.invoice_service.count(params.status)
    )?;

    Ok(Json(ListResponse {
        pagination: PaginationMeta::new(&params.pagination, total_items),
        items: invoices.into_iter().map(InvoiceItem::from).collect(),
    }))
}

/// Issues an unpaid invoice.
///
/// # Endpoint
///
/// `POST /api/invoices`
///
/// # Request Body
///
/// ```json
/// { "patient_id": 1, "appointment_id": 4, "amount": 350.0, "currency": "EGP" }
/// ```
///
/// # Errors
///
/// Returns 400 if validation fails, the currency is not in the catalog, or
/// the patient does not exist.
pub async fn create_invoice_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateInvoiceRequest>,
) -> Result<(StatusCode, Json<InvoiceItem>), AppError> {
    payload.validate()?;

    let invoice = state
        .invoice_service
        .issue(
            payload.patient_id,
            payload.appointment_id,
            payload.amount,
            payload.currency.as_deref(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(invoice.into())))
}

/// Marks an invoice as paid.
///
/// # Endpoint
///
/// `POST /api/invoices/{id}/pay`
///
/// Paying an already paid invoice succeeds without changing anything.
/// Always `200 OK` with `{ "success": bool, "error"?: string }`.
pub async fn pay_invoice_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Json<ActionResponse> {
    Json(state.status_service.mark_invoice_as_paid(id).await.into())
}
