//! PostgreSQL implementation of patient repository.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde_json::json;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{NewPatient, Patient, PatientPatch};
use crate::domain::repositories::PatientRepository;
use crate::error::AppError;

/// PostgreSQL repository for patient records.
pub struct PgPatientRepository {
    pool: Arc<PgPool>,
}

impl PgPatientRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct PatientRow {
    id: i64,
    full_name: String,
    email: Option<String>,
    phone: Option<String>,
    date_of_birth: Option<NaiveDate>,
    notes: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<PatientRow> for Patient {
    fn from(row: PatientRow) -> Self {
        Patient {
            id: row.id,
            full_name: row.full_name,
            email: row.email,
            phone: row.phone,
            date_of_birth: row.date_of_birth,
            notes: row.notes,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

const PATIENT_COLUMNS: &str =
    "id, full_name, email, phone, date_of_birth, notes, created_at, updated_at";

#[async_trait]
impl PatientRepository for PgPatientRepository {
    async fn create(&self, new_patient: NewPatient) -> Result<Patient, AppError> {
        let sql = format!(
            "INSERT INTO patients (full_name, email, phone, date_of_birth, notes)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {PATIENT_COLUMNS}"
        );
        let row = sqlx::query_as::<_, PatientRow>(&sql)
            .bind(new_patient.full_name)
            .bind(new_patient.email)
            .bind(new_patient.phone)
            .bind(new_patient.date_of_birth)
            .bind(new_patient.notes)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Patient>, AppError> {
        let sql = format!("SELECT {PATIENT_COLUMNS} FROM patients WHERE id = $1");
        let row = sqlx::query_as::<_, PatientRow>(&sql)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Patient::from))
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Patient>, AppError> {
        let sql = format!(
            "SELECT {PATIENT_COLUMNS} FROM patients
             ORDER BY full_name ASC, id ASC
             LIMIT $1 OFFSET $2"
        );
        let rows = sqlx::query_as::<_, PatientRow>(&sql)
            .bind(limit)
            .bind(offset)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Patient::from).collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM patients")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn update(&self, id: i64, patch: PatientPatch) -> Result<Patient, AppError> {
        // Nullable columns take a "present" flag so that null can clear them.
        let sql = format!(
            "UPDATE patients SET
                full_name     = COALESCE($2, full_name),
                email         = CASE WHEN $3 THEN $4 ELSE email END,
                phone         = CASE WHEN $5 THEN $6 ELSE phone END,
                date_of_birth = CASE WHEN $7 THEN $8 ELSE date_of_birth END,
                notes         = CASE WHEN $9 THEN $10 ELSE notes END,
                updated_at    = NOW()
             WHERE id = $1
             RETURNING {PATIENT_COLUMNS}"
        );
        let row = sqlx::query_as::<_, PatientRow>(&sql)
            .bind(id)
            .bind(patch.full_name)
            .bind(patch.email.is_some())
            .bind(patch.email.flatten())
            .bind(patch.phone.is_some())
            .bind(patch.phone.flatten())
            .bind(patch.date_of_birth.is_some())
            .bind(patch.date_of_birth.flatten())
            .bind(patch.notes.is_some())
            .bind(patch.notes.flatten())
            .fetch_optional(self.pool.as_ref())
            .await?;

        row.map(Patient::from)
            .ok_or_else(|| AppError::not_found("Patient not found", json!({ "id": id })))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM patients WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
