//! Aggregate figures for the dashboard page.

use serde::Serialize;

use crate::domain::entities::{Appointment, AppointmentStatus, InvoiceStatus};
use crate::domain::repositories::Repositories;
use crate::error::AppError;

const RECENT_APPOINTMENTS: i64 = 5;

/// Appointment count for one status.
#[derive(Debug, Clone, Serialize)]
pub struct StatusCount {
    pub status: AppointmentStatus,
    pub count: i64,
}

#[derive(Debug, Clone)]
pub struct DashboardSummary {
    pub patients: i64,
    pub appointments: i64,
    pub appointments_by_status: Vec<StatusCount>,
    pub unpaid_invoices: i64,
    pub overdue_invoices: i64,
    pub recent_appointments: Vec<Appointment>,
}

/// Read-only service assembling the dashboard figures.
pub struct DashboardService {
    repositories: Repositories,
}

impl DashboardService {
    pub fn new(repositories: Repositories) -> Self {
        Self { repositories }
    }

    pub async fn summary(&self) -> Result<DashboardSummary, AppError> {
        let patients = self.repositories.patients.count().await?;
        let appointments = self.repositories.appointments.count(None).await?;

        let mut appointments_by_status = Vec::with_capacity(AppointmentStatus::ALL.len());
        for status in AppointmentStatus::ALL {
            let count = self.repositories.appointments.count(Some(status)).await?;
            appointments_by_status.push(StatusCount { status, count });
        }

        let unpaid_invoices = self
            .repositories
            .invoices
            .count(Some(InvoiceStatus::Unpaid))
            .await?;
        let overdue_invoices = self
            .repositories
            .invoices
            .count(Some(InvoiceStatus::Overdue))
            .await?;

        let recent_appointments = self
            .repositories
            .appointments
            .list(None, 0, RECENT_APPOINTMENTS)
            .await?;

        Ok(DashboardSummary {
            patients,
            appointments,
            appointments_by_status,
            unpaid_invoices,
            overdue_invoices,
            recent_appointments,
        })
    }
}
