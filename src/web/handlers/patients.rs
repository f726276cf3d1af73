//! Patient list and detail pages.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::Html,
};
use chrono::Utc;

use super::{PAGE_ROWS, cached_page, display_datetime, display_optional};
use crate::domain::entities::Patient;
use crate::domain::views;
use crate::error::AppError;
use crate::state::AppState;

struct PatientRow {
    id: i64,
    full_name: String,
    email: String,
    phone: String,
    age: String,
}

impl From<Patient> for PatientRow {
    fn from(p: Patient) -> Self {
        let age = p
            .age_on(Utc::now().date_naive())
            .map(|a| a.to_string())
            .unwrap_or_default();

        PatientRow {
            id: p.id,
            full_name: p.full_name,
            email: display_optional(p.email),
            phone: display_optional(p.phone),
            age,
        }
    }
}

#[derive(Template)]
#[template(path = "patients.html")]
struct PatientsTemplate {
    total: i64,
    rows: Vec<PatientRow>,
}

/// `GET /patients`
pub async fn patients_handler(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    cached_page(&state, views::PATIENTS, || async {
        let (patients, total) = tokio::try_join!(
            state.patient_service.list(0, PAGE_ROWS),
            state.patient_service.count()
        )?;

        let template = PatientsTemplate {
            total,
            rows: patients.into_iter().map(PatientRow::from).collect(),
        };
        Ok::<_, AppError>(template.render()?)
    })
    .await
}

/// Template for a single patient record.
///
/// Rendered on every request; detail pages are not cached.
#[derive(Template, WebTemplate)]
#[template(path = "patient_detail.html")]
pub struct PatientDetailTemplate {
    id: i64,
    full_name: String,
    email: String,
    phone: String,
    date_of_birth: String,
    age: String,
    notes: String,
    registered_at: String,
    updated_at: String,
}

/// `GET /patients/{id}`
///
/// # Errors
///
/// Returns 404 if the patient does not exist.
pub async fn patient_detail_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<PatientDetailTemplate, AppError> {
    let patient = state.patient_service.get(id).await?;

    let age = patient
        .age_on(Utc::now().date_naive())
        .map(|a| a.to_string())
        .unwrap_or_default();

    Ok(PatientDetailTemplate {
        id: patient.id,
        full_name: patient.full_name,
        email: display_optional(patient.email),
        phone: display_optional(patient.phone),
        date_of_birth: display_optional(
            patient.date_of_birth.map(|d| d.format("%Y-%m-%d").to_string()),
        ),
        age,
        notes: patient.notes.unwrap_or_default(),
        registered_at: display_datetime(patient.created_at),
        updated_at: display_datetime(patient.updated_at),
    })
}
