//! Business logic services for the application layer.

pub mod appointment_service;
pub mod dashboard_service;
pub mod invoice_service;
pub mod patient_service;
pub mod revalidation_service;
pub mod status_service;

pub use appointment_service::AppointmentService;
pub use dashboard_service::{DashboardService, DashboardSummary, StatusCount};
pub use invoice_service::InvoiceService;
pub use patient_service::PatientService;
pub use revalidation_service::RevalidationService;
pub use status_service::StatusService;
