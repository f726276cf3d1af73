//! Repository trait for patient data access.

use crate::domain::entities::{NewPatient, Patient, PatientPatch};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for patient records.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgPatientRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PatientRepository: Send + Sync {
    /// Registers a patient.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the email is already registered.
    async fn create(&self, new_patient: NewPatient) -> Result<Patient, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Patient>, AppError>;

    /// Lists patients ordered by name.
    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Patient>, AppError>;

    async fn count(&self) -> Result<i64, AppError>;

    /// Partially updates a patient. Only fields present in [`PatientPatch`] change.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no patient has this id.
    async fn update(&self, id: i64, patch: PatientPatch) -> Result<Patient, AppError>;

    /// Deletes a patient together with their appointments and invoices.
    ///
    /// Returns `Ok(false)` if no patient had this id.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
