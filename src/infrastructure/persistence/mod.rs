//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx runtime
//! queries mapped through `FromRow`.
//!
//! # Repositories
//!
//! - [`PgPatientRepository`] - Patient records
//! - [`PgAppointmentRepository`] - Appointments and status writes
//! - [`PgInvoiceRepository`] - Invoices and status writes

pub mod pg_appointment_repository;
pub mod pg_invoice_repository;
pub mod pg_patient_repository;

pub use pg_appointment_repository::PgAppointmentRepository;
pub use pg_invoice_repository::PgInvoiceRepository;
pub use pg_patient_repository::PgPatientRepository;

use std::sync::Arc;

use sqlx::PgPool;

use crate::domain::repositories::Repositories;

/// Wires every PostgreSQL repository onto one pool.
pub fn pg_repositories(pool: Arc<PgPool>) -> Repositories {
    Repositories {
        patients: Arc::new(PgPatientRepository::new(pool.clone())),
        appointments: Arc::new(PgAppointmentRepository::new(pool.clone())),
        invoices: Arc::new(PgInvoiceRepository::new(pool)),
    }
}
