//! Appointment scheduling and lookups.

use std::sync::Arc;

use serde_json::json;
use tracing::info;

use crate::application::services::RevalidationService;
use crate::domain::entities::{Appointment, AppointmentStatus, NewAppointment};
use crate::domain::repositories::AppointmentRepository;
use crate::domain::views::EntityKind;
use crate::error::AppError;

/// Service for appointments.
///
/// Status changes go through [`crate::application::services::StatusService`].
pub struct AppointmentService {
    repository: Arc<dyn AppointmentRepository>,
    revalidation: RevalidationService,
}

impl AppointmentService {
    pub fn new(
        repository: Arc<dyn AppointmentRepository>,
        revalidation: RevalidationService,
    ) -> Self {
        Self {
            repository,
            revalidation,
        }
    }

    pub async fn list(
        &self,
        status: Option<AppointmentStatus>,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Appointment>, AppError> {
        self.repository.list(status, offset, limit).await
    }

    pub async fn count(&self, status: Option<AppointmentStatus>) -> Result<i64, AppError> {
        self.repository.count(status).await
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no appointment has this id.
    pub async fn get(&self, id: i64) -> Result<Appointment, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Appointment not found", json!({ "id": id })))
    }

    /// Schedules a visit. New appointments always start as `scheduled`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the patient does not exist.
    pub async fn schedule(&self, mut new_appointment: NewAppointment) -> Result<Appointment, AppError> {
        new_appointment.reason = new_appointment
            .reason
            .map(|r| r.trim().to_string())
            .filter(|r| !r.is_empty());

        let appointment = self.repository.create(new_appointment).await?;
        info!(
            appointment_id = appointment.id,
            patient_id = appointment.patient_id,
            "Appointment scheduled"
        );

        self.revalidation.revalidate(EntityKind::Appointment).await;
        Ok(appointment)
    }
}
