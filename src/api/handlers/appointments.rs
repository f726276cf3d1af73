//! Handlers for appointment endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::action::{ActionResponse, UpdateAppointmentStatusRequest};
use crate::api::dto::appointment::{AppointmentItem, CreateAppointmentRequest};
use crate::api::dto::pagination::{ListResponse, PaginationMeta, StatusQueryParams};
use crate::domain::entities::AppointmentStatus;
use crate::error::AppError;
use crate::state::AppState;

/// Lists appointments, newest first.
///
/// # Endpoint
///
/// `GET /api/appointments?status=scheduled&page=1`
pub async fn appointment_list_handler(
    State(state): State<AppState>,
    Query(params): Query<StatusQueryParams<AppointmentStatus>>,
) -> Result<Json<ListResponse<AppointmentItem>>, AppError> {
    let (offset, limit) = params
        .pagination
        .validate_and_get_offset_limit()
        .map_err(|e| AppError::bad_request(e, json!({})))?;

    let (appointments, total_items) = tokio::try_join!(
        state.appointment_service.list(params.status, offset, limit),
        state.appointment_service.count(params.status)
    )?;

    Ok(Json(ListResponse {
        pagination: PaginationMeta::new(&params.pagination, total_items),
        items: appointments.into_iter().map(AppointmentItem::from).collect(),
    }))
}

/// Schedules an appointment.
///
/// # Endpoint
///
/// `POST /api/appointments`
///
/// # Errors
///
/// Returns 400 if validation fails or the patient does not exist.
pub async fn create_appointment_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateAppointmentRequest>,
) -> Result<(StatusCode, Json<AppointmentItem>), AppError> {
    payload.validate()?;

    let appointment = state.appointment_service.schedule(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(appointment.into())))
}

/// Sets the status of an appointment.
///
/// # Endpoint
///
/// `POST /api/appointments/{id}/status`
///
/// # Request Body
///
/// ```json
/// { "status": "completed" }
/// ```
///
/// # Response
///
/// Always `200 OK`; the body tells success from failure:
///
/// ```json
/// { "success": false, "error": "Appointment not found" }
/// ```
pub async fn update_appointment_status_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateAppointmentStatusRequest>,
) -> Json<ActionResponse> {
    let outcome = state
        .status_service
        .update_appointment_status(id, payload.status)
        .await;

    Json(outcome.into())
}
