//! Repository trait definitions for the domain layer.
//!
//! These traits are the record store gateway: services depend on them and
//! concrete implementations live in `crate::infrastructure::persistence`.
//! Mock implementations are generated with `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`PatientRepository`] - Patient records
//! - [`AppointmentRepository`] - Appointments and their status
//! - [`InvoiceRepository`] - Invoices and their payment status

pub mod appointment_repository;
pub mod invoice_repository;
pub mod patient_repository;

pub use appointment_repository::AppointmentRepository;
pub use invoice_repository::InvoiceRepository;
pub use patient_repository::PatientRepository;

#[cfg(test)]
pub use appointment_repository::MockAppointmentRepository;
#[cfg(test)]
pub use invoice_repository::MockInvoiceRepository;
#[cfg(test)]
pub use patient_repository::MockPatientRepository;

use std::sync::Arc;

/// The set of repositories the application is wired with.
#[derive(Clone)]
pub struct Repositories {
    pub patients: Arc<dyn PatientRepository>,
    pub appointments: Arc<dyn AppointmentRepository>,
    pub invoices: Arc<dyn InvoiceRepository>,
}
