//! Application layer services implementing business logic.
//!
//! Services consume repository traits and the view cache, and provide the
//! API used by HTTP handlers, page handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::StatusService`] - Appointment and invoice status transitions
//! - [`services::RevalidationService`] - Stale-view invalidation
//! - [`services::PatientService`] - Patient records
//! - [`services::AppointmentService`] - Scheduling
//! - [`services::InvoiceService`] - Invoicing
//! - [`services::DashboardService`] - Dashboard figures

pub mod services;
