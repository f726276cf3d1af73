//! Repository trait for appointment data access.

use crate::domain::entities::{Appointment, AppointmentStatus, NewAppointment};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for appointments.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgAppointmentRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    /// Creates an appointment with status `scheduled`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the patient does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_appointment: NewAppointment) -> Result<Appointment, AppError>;

    /// Finds an appointment by id, joined with the patient's name.
    async fn find_by_id(&self, id: i64) -> Result<Option<Appointment>, AppError>;

    /// Lists appointments, newest `scheduled_at` first.
    ///
    /// # Arguments
    ///
    /// - `status` - Optional status filter
    /// - `offset` / `limit` - Pagination window
    async fn list(
        &self,
        status: Option<AppointmentStatus>,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Appointment>, AppError>;

    /// Counts appointments, optionally filtered by status.
    async fn count(&self, status: Option<AppointmentStatus>) -> Result<i64, AppError>;

    /// Overwrites the status of one appointment.
    ///
    /// The write is unconditional: no version check is made and concurrent
    /// writers race, the last commit wins.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no row has this id.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update_status(&self, id: i64, status: AppointmentStatus) -> Result<(), AppError>;
}
