//! PostgreSQL implementation of appointment repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{Appointment, AppointmentStatus, NewAppointment};
use crate::domain::repositories::AppointmentRepository;
use crate::error::AppError;

/// PostgreSQL repository for appointments.
pub struct PgAppointmentRepository {
    pool: Arc<PgPool>,
}

impl PgAppointmentRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct AppointmentRow {
    id: i64,
    patient_id: i64,
    patient_name: Option<String>,
    scheduled_at: DateTime<Utc>,
    reason: Option<String>,
    status: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<AppointmentRow> for Appointment {
    type Error = AppError;

    fn try_from(row: AppointmentRow) -> Result<Self, Self::Error> {
        let status = row.status.parse::<AppointmentStatus>().map_err(|e| {
            AppError::internal(
                "Corrupt appointment row",
                json!({ "id": row.id, "reason": e.to_string() }),
            )
        })?;

        Ok(Appointment {
            id: row.id,
            patient_id: row.patient_id,
            patient_name: row.patient_name,
            scheduled_at: row.scheduled_at,
            reason: row.reason,
            status,
            created_at: row.created_at,
        })
    }
}

const SELECT_APPOINTMENT: &str = r#"
    SELECT a.id, a.patient_id, p.full_name AS patient_name, a.scheduled_at,
           a.reason, a.status, a.created_at
    FROM appointments a
    LEFT JOIN patients p ON p.id = a.patient_id
"#;

#[async_trait]
impl AppointmentRepository for PgAppointmentRepository {
    async fn create(&self, new_appointment: NewAppointment) -> Result<Appointment, AppError> {
        let row = sqlx::query_as::<_, AppointmentRow>(
            r#"
        WITH inserted AS (
            INSERT INTO appointments (patient_id, scheduled_at, reason)
            VALUES ($1, $2, $3)
            RETURNING id, patient_id, scheduled_at, reason, status, created_at
        )
        SELECT i.id, i.patient_id, p.full_name AS patient_name, i.scheduled_at,
               i.reason, i.status, i.created_at
        FROM inserted i
        LEFT JOIN patients p ON p.id = i.patient_id
        "#,
        )
        .bind(new_appointment.patient_id)
        .bind(new_appointment.scheduled_at)
        .bind(new_appointment.reason)
        .fetch_one(self.pool.as_ref())
        .await?;

        row.try_into()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Appointment>, AppError> {
        let sql = format!("{SELECT_APPOINTMENT} WHERE a.id = $1");
        let row = sqlx::query_as::<_, AppointmentRow>(&sql)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        row.map(Appointment::try_from).transpose()
    }

    async fn list(
        &self,
        status: Option<AppointmentStatus>,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Appointment>, AppError> {
        let sql = format!(
            "{SELECT_APPOINTMENT}
            WHERE ($1::text IS NULL OR a.status = $1)
            ORDER BY a.scheduled_at DESC, a.id DESC
            LIMIT $2 OFFSET $3"
        );
        let rows = sqlx::query_as::<_, AppointmentRow>(&sql)
            .bind(status.map(AppointmentStatus::as_str))
            .bind(limit)
            .bind(offset)
            .fetch_all(self.pool.as_ref())
            .await?;

        rows.into_iter().map(Appointment::try_from).collect()
    }

    async fn count(&self, status: Option<AppointmentStatus>) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM appointments WHERE ($1::text IS NULL OR status = $1)",
        )
        .bind(status.map(AppointmentStatus::as_str))
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(count)
    }

    async fn update_status(&self, id: i64, status: AppointmentStatus) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE appointments SET status = $1 WHERE id = $2")
            .bind(status.as_str())
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(
                "Appointment not found",
                json!({ "id": id }),
            ));
        }

        Ok(())
    }
}
