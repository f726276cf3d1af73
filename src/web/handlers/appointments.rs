//! Appointments page.

use askama::Template;
use axum::{extract::State, response::Html};

use super::{PAGE_ROWS, cached_page, display_datetime, display_optional};
use crate::domain::entities::{Appointment, AppointmentStatus};
use crate::domain::views;
use crate::error::AppError;
use crate::state::AppState;

/// A status button offered on an appointment row.
pub(super) struct StatusAction {
    pub value: &'static str,
    pub label: &'static str,
}

pub(super) struct AppointmentRow {
    pub id: i64,
    pub patient_name: String,
    pub scheduled_at: String,
    pub reason: String,
    pub status_label: &'static str,
    pub status_class: &'static str,
    pub actions: Vec<StatusAction>,
}

impl From<Appointment> for AppointmentRow {
    fn from(a: Appointment) -> Self {
        let actions = AppointmentStatus::ALL
            .into_iter()
            .filter(|s| *s != a.status)
            .map(|s| StatusAction {
                value: s.as_str(),
                label: s.label(),
            })
            .collect();

        AppointmentRow {
            id: a.id,
            patient_name: a
                .patient_name
                .unwrap_or_else(|| format!("Patient #{}", a.patient_id)),
            scheduled_at: display_datetime(a.scheduled_at),
            reason: display_optional(a.reason),
            status_label: a.status.label(),
            status_class: a.status.as_str(),
            actions,
        }
    }
}

#[derive(Template)]
#[template(path = "appointments.html")]
struct AppointmentsTemplate {
    total: i64,
    rows: Vec<AppointmentRow>,
}

/// `GET /appointments`
pub async fn appointments_handler(
    State(state): State<AppState>,
) -> Result<Html<String>, AppError> {
    cached_page(&state, views::APPOINTMENTS, || async {
        let (appointments, total) = tokio::try_join!(
            state.appointment_service.list(None, 0, PAGE_ROWS),
            state.appointment_service.count(None)
        )?;

        let template = AppointmentsTemplate {
            total,
            rows: appointments.into_iter().map(AppointmentRow::from).collect(),
        };
        Ok::<_, AppError>(template.render()?)
    })
    .await
}
