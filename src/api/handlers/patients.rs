//! Handlers for patient endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::pagination::{ListResponse, PaginationMeta, PaginationParams};
use crate::api::dto::patient::{CreatePatientRequest, PatientItem, UpdatePatientRequest};
use crate::error::AppError;
use crate::state::AppState;

/// Lists patients ordered by name.
///
/// # Endpoint
///
/// `GET /api/patients?page=1&page_size=25`
pub async fn patient_list_handler(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ListResponse<PatientItem>>, AppError> {
    let (offset, limit) = params
        .validate_and_get_offset_limit()
        .map_err(|e| AppError::bad_request(e, json!({})))?;

    let (patients, total_items) = tokio::try_join!(
        state.patient_service.list(offset, limit),
        state.patient_service.count()
    )?;

    Ok(Json(ListResponse {
        pagination: PaginationMeta::new(&params, total_items),
        items: patients.into_iter().map(PatientItem::from).collect(),
    }))
}

/// Registers a patient.
///
/// # Endpoint
///
/// `POST /api/patients`
///
/// # Errors
///
/// Returns 400 if validation fails.
/// Returns 409 if the email is already registered.
pub async fn create_patient_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreatePatientRequest>,
) -> Result<(StatusCode, Json<PatientItem>), AppError> {
    payload.validate()?;

    let patient = state.patient_service.register(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(patient.into())))
}

/// # Endpoint
///
/// `GET /api/patients/{id}`
pub async fn get_patient_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<PatientItem>, AppError> {
    let patient = state.patient_service.get(id).await?;
    Ok(Json(patient.into()))
}

/// Partially updates a patient.
///
/// # Endpoint
///
/// `PATCH /api/patients/{id}`
///
/// `null` clears a nullable field; absent fields are left unchanged.
pub async fn update_patient_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<UpdatePatientRequest>,
) -> Result<Json<PatientItem>, AppError> {
    payload.validate()?;

    let patient = state.patient_service.update(id, payload.into()).await?;
    Ok(Json(patient.into()))
}

/// Deletes a patient together with their appointments and invoices.
///
/// # Endpoint
///
/// `DELETE /api/patients/{id}`
pub async fn delete_patient_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.patient_service.remove(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
