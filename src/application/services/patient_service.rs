//! Patient registration and record maintenance.

use std::sync::Arc;

use serde_json::json;
use tracing::info;

use crate::application::services::RevalidationService;
use crate::domain::entities::{NewPatient, Patient, PatientPatch};
use crate::domain::repositories::PatientRepository;
use crate::domain::views::EntityKind;
use crate::error::AppError;

/// Service for patient records.
///
/// Every successful mutation revalidates the patient views.
pub struct PatientService {
    repository: Arc<dyn PatientRepository>,
    revalidation: RevalidationService,
}

impl PatientService {
    pub fn new(repository: Arc<dyn PatientRepository>, revalidation: RevalidationService) -> Self {
        Self {
            repository,
            revalidation,
        }
    }

    pub async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Patient>, AppError> {
        self.repository.list(offset, limit).await
    }

    pub async fn count(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }

    /// Retrieves a patient by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no patient has this id.
    pub async fn get(&self, id: i64) -> Result<Patient, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Patient not found", json!({ "id": id })))
    }

    /// Registers a new patient.
    ///
    /// Emails are stored lowercased so uniqueness is case-insensitive.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the name is blank.
    /// Returns [`AppError::Conflict`] if the email is already registered.
    pub async fn register(&self, mut new_patient: NewPatient) -> Result<Patient, AppError> {
        new_patient.full_name = normalize_name(&new_patient.full_name)?;
        new_patient.email = new_patient.email.map(|e| e.trim().to_lowercase());

        let patient = self.repository.create(new_patient).await?;
        info!(patient_id = patient.id, "Patient registered");

        self.revalidation.revalidate(EntityKind::Patient).await;
        Ok(patient)
    }

    /// Applies a partial update.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the patch changes nothing or
    /// sets a blank name.
    /// Returns [`AppError::NotFound`] if no patient has this id.
    pub async fn update(&self, id: i64, mut patch: PatientPatch) -> Result<Patient, AppError> {
        if patch.is_empty() {
            return Err(AppError::bad_request(
                "Nothing to update",
                json!({ "id": id }),
            ));
        }

        patch.full_name = patch.full_name.as_deref().map(normalize_name).transpose()?;
        patch.email = patch.email.map(|e| e.map(|e| e.trim().to_lowercase()));

        let patient = self.repository.update(id, patch).await?;
        info!(patient_id = id, "Patient updated");

        self.revalidation.revalidate(EntityKind::Patient).await;
        Ok(patient)
    }

    /// Deletes a patient with their appointments and invoices.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no patient has this id.
    pub async fn remove(&self, id: i64) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(AppError::not_found("Patient not found", json!({ "id": id })));
        }
        info!(patient_id = id, "Patient deleted");

        self.revalidation.revalidate(EntityKind::Patient).await;
        Ok(())
    }
}

fn normalize_name(name: &str) -> Result<String, AppError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::bad_request("Name must not be blank", json!({})));
    }
    Ok(name.to_string())
}
