//! HTML page route configuration.

use crate::state::AppState;
use crate::web::handlers::{
    appointments_handler, dashboard_handler, home_handler, invoices_handler,
    patient_detail_handler, patients_handler,
};
use axum::{Router, routing::get};

/// Server-rendered pages.
///
/// # Endpoints
///
/// - `GET /`              - Today: counts and recent appointments (cached)
/// - `GET /dashboard`     - Dashboard overview (cached)
/// - `GET /appointments`  - Appointments with status actions (cached)
/// - `GET /invoices`      - Invoices with formatted amounts (cached)
/// - `GET /patients`      - Patient list (cached)
/// - `GET /patients/{id}` - Patient record (uncached)
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home_handler))
        .route("/dashboard", get(dashboard_handler))
        .route("/appointments", get(appointments_handler))
        .route("/invoices", get(invoices_handler))
        .route("/patients", get(patients_handler))
        .route("/patients/{id}", get(patient_detail_handler))
}
