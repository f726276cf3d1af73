//! PostgreSQL implementation of invoice repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{Invoice, InvoiceStatus, NewInvoice};
use crate::domain::repositories::InvoiceRepository;
use crate::error::AppError;

/// PostgreSQL repository for invoices.
pub struct PgInvoiceRepository {
    pool: Arc<PgPool>,
}

impl PgInvoiceRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct InvoiceRow {
    id: i64,
    patient_id: i64,
    patient_name: Option<String>,
    appointment_id: Option<i64>,
    amount: f64,
    currency: String,
    status: String,
    issued_at: DateTime<Utc>,
}

impl TryFrom<InvoiceRow> for Invoice {
    type Error = AppError;

    fn try_from(row: InvoiceRow) -> Result<Self, Self::Error> {
        let status = row.status.parse::<InvoiceStatus>().map_err(|e| {
            AppError::internal(
                "Corrupt invoice row",
                json!({ "id": row.id, "reason": e.to_string() }),
            )
        })?;

        Ok(Invoice {
            id: row.id,
            patient_id: row.patient_id,
            patient_name: row.patient_name,
            appointment_id: row.appointment_id,
            amount: row.amount,
            currency: row.currency,
            status,
            issued_at: row.issued_at,
        })
    }
}

const SELECT_INVOICE: &str = r#"
    SELECT i.id, i.patient_id, p.full_name AS patient_name, i.appointment_id,
           i.amount, i.currency, i.status, i.issued_at
    FROM invoices i
    LEFT JOIN patients p ON p.id = i.patient_id
"#;

#[async_trait]
impl InvoiceRepository for PgInvoiceRepository {
    async fn create(&self, new_invoice: NewInvoice) -> Result<Invoice, AppError> {
        let row = sqlx::query_as::<_, InvoiceRow>(
            r#"
        WITH inserted AS (
            INSERT INTO invoices (patient_id, appointment_id, amount, currency)
            VALUES ($1, $2, $3, $4)
            RETURNING id, patient_id, appointment_id, amount, currency, status, issued_at
        )
        SELECT n.id, n.patient_id, p.full_name AS patient_name, n.appointment_id,
               n.amount, n.currency, n.status, n.issued_at
        FROM inserted n
        LEFT JOIN patients p ON p.id = n.patient_id
        "#,
        )
        .bind(new_invoice.patient_id)
        .bind(new_invoice.appointment_id)
        .bind(new_invoice.amount)
        .bind(new_invoice.currency)
        .fetch_one(self.pool.as_ref())
        .await?;

        row.try_into()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Invoice>, AppError> {
        let sql = format!("{SELECT_INVOICE} WHERE i.id = $1");
        let row = sqlx::query_as::<_, InvoiceRow>(&sql)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        row.map(Invoice::try_from).transpose()
    }

    async fn list(
        &self,
        status: Option<InvoiceStatus>,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Invoice>, AppError> {
        let sql = format!(
            "{SELECT_INVOICE}
            WHERE ($1::text IS NULL OR i.status = $1)
            ORDER BY i.issued_at DESC, i.id DESC
            LIMIT $2 OFFSET $3"
        );
        let rows = sqlx::query_as::<_, InvoiceRow>(&sql)
            .bind(status.map(InvoiceStatus::as_str))
            .bind(limit)
            .bind(offset)
            .fetch_all(self.pool.as_ref())
            .await?;

        rows.into_iter().map(Invoice::try_from).collect()
    }

    async fn count(&self, status: Option<InvoiceStatus>) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM invoices WHERE ($1::text IS NULL OR status = $1)",
        )
        .bind(status.map(InvoiceStatus::as_str))
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(count)
    }

    async fn update_status(&self, id: i64, status: InvoiceStatus) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE invoices SET status = $1 WHERE id = $2")
            .bind(status.as_str())
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Invoice not found", json!({ "id": id })));
        }

        Ok(())
    }
}
