//! API route configuration.

use crate::api::handlers::{
    appointment_list_handler, create_appointment_handler, create_invoice_handler,
    create_patient_handler, currency_list_handler, delete_patient_handler, get_patient_handler,
    health_handler, invoice_list_handler, patient_list_handler, pay_invoice_handler,
    update_appointment_status_handler, update_patient_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All JSON API routes, nested under `/api`.
///
/// # Endpoints
///
/// - `GET    /health`                   - Component health
/// - `GET    /currencies`               - Currency catalog
/// - `GET    /patients`                 - List patients (paginated)
/// - `POST   /patients`                 - Register a patient
/// - `GET    /patients/{id}`            - Fetch a patient
/// - `PATCH  /patients/{id}`            - Partially update a patient
/// - `DELETE /patients/{id}`            - Delete a patient
/// - `GET    /appointments`             - List appointments (paginated, `status` filter)
/// - `POST   /appointments`             - Schedule an appointment
/// - `POST   /appointments/{id}/status` - Set appointment status
/// - `GET    /invoices`                 - List invoices (paginated, `status` filter)
/// - `POST   /invoices`                 - Issue an invoice
/// - `POST   /invoices/{id}/pay`        - Mark an invoice as paid
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/currencies", get(currency_list_handler))
        .route(
            "/patients",
            get(patient_list_handler).post(create_patient_handler),
        )
        .route(
            "/patients/{id}",
            get(get_patient_handler)
                .patch(update_patient_handler)
                .delete(delete_patient_handler),
        )
        .route(
            "/appointments",
            get(appointment_list_handler).post(create_appointment_handler),
        )
        .route(
            "/appointments/{id}/status",
            post(update_appointment_status_handler),
        )
        .route(
            "/invoices",
            get(invoice_list_handler).post(create_invoice_handler),
        )
        .route("/invoices/{id}/pay", post(pay_invoice_handler))
}
