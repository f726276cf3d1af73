//! Home and dashboard pages.

use askama::Template;
use axum::{extract::State, response::Html};

use super::appointments::AppointmentRow;
use super::cached_page;
use crate::domain::views;
use crate::error::AppError;
use crate::state::AppState;

struct StatusTile {
    label: &'static str,
    class: &'static str,
    count: i64,
}

/// Renders `templates/dashboard.html`: headline counts, appointments per
/// status and the most recent appointments.
#[derive(Template)]
#[template(path = "dashboard.html")]
struct DashboardTemplate {
    title: &'static str,
    patients: i64,
    appointments: i64,
    unpaid_invoices: i64,
    overdue_invoices: i64,
    tiles: Vec<StatusTile>,
    recent: Vec<AppointmentRow>,
}

/// `GET /`
pub async fn home_handler(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    cached_page(&state, views::HOME, || render(&state, "Today")).await
}

/// `GET /dashboard`
pub async fn dashboard_handler(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    cached_page(&state, views::DASHBOARD, || render(&state, "Dashboard")).await
}

async fn render(state: &AppState, title: &'static str) -> Result<String, AppError> {
    let summary = state.dashboard_service.summary().await?;

    let template = DashboardTemplate {
        title,
        patients: summary.patients,
        appointments: summary.appointments,
        unpaid_invoices: summary.unpaid_invoices,
        overdue_invoices: summary.overdue_invoices,
        tiles: summary
            .appointments_by_status
            .into_iter()
            .map(|s| StatusTile {
                label: s.status.label(),
                class: s.status.as_str(),
                count: s.count,
            })
            .collect(),
        recent: summary
            .recent_appointments
            .into_iter()
            .map(AppointmentRow::from)
            .collect(),
    };

    Ok(template.render()?)
}
