//! Appointment and invoice status transitions.

use std::sync::Arc;

use tracing::{info, warn};

use crate::application::services::RevalidationService;
use crate::domain::entities::{AppointmentStatus, InvoiceStatus};
use crate::domain::outcome::ActionOutcome;
use crate::domain::repositories::{AppointmentRepository, InvoiceRepository};
use crate::domain::views::EntityKind;
use crate::error::AppError;

/// Applies status changes and reports them as an [`ActionOutcome`].
///
/// Each call runs to completion: the store write, then, only if it
/// succeeded, invalidation of the entity kind's views. Store failures are
/// returned as [`ActionOutcome::Failure`] and are never retried here.
///
/// Writes are unconditional and carry no version token, so two concurrent
/// transitions of the same record race in the store and the last commit wins.
pub struct StatusService {
    appointments: Arc<dyn AppointmentRepository>,
    invoices: Arc<dyn InvoiceRepository>,
    revalidation: RevalidationService,
}

impl StatusService {
    pub fn new(
        appointments: Arc<dyn AppointmentRepository>,
        invoices: Arc<dyn InvoiceRepository>,
        revalidation: RevalidationService,
    ) -> Self {
        Self {
            appointments,
            invoices,
            revalidation,
        }
    }

    /// Sets the status of appointment `id`.
    ///
    /// Any status may follow any other.
    pub async fn update_appointment_status(
        &self,
        id: i64,
        status: AppointmentStatus,
    ) -> ActionOutcome {
        let write = self.appointments.update_status(id, status).await;
        self.settle(EntityKind::Appointment, id, status.as_str(), write)
            .await
    }

    /// Marks invoice `id` as paid.
    ///
    /// An invoice that is already paid is left alone: no store write and no
    /// invalidation, and the outcome is still a success.
    pub async fn mark_invoice_as_paid(&self, id: i64) -> ActionOutcome {
        let current = match self.invoices.find_by_id(id).await {
            Ok(Some(invoice)) => invoice,
            Ok(None) => return self.settle_failure(EntityKind::Invoice, id, "Invoice not found"),
            Err(e) => return self.settle_failure(EntityKind::Invoice, id, &e.to_string()),
        };

        if current.is_paid() {
            info!(invoice_id = id, "Invoice already paid, skipping write");
            metrics::counter!(
                "status_transitions_total",
                "entity" => EntityKind::Invoice.as_str(),
                "outcome" => "noop"
            )
            .increment(1);
            return ActionOutcome::Success;
        }

        let write = self.invoices.update_status(id, InvoiceStatus::Paid).await;
        self.settle(EntityKind::Invoice, id, InvoiceStatus::Paid.as_str(), write)
            .await
    }

    async fn settle(
        &self,
        kind: EntityKind,
        id: i64,
        status: &str,
        write: Result<(), AppError>,
    ) -> ActionOutcome {
        match write {
            Ok(()) => {
                self.revalidation.revalidate(kind).await;
                info!(entity = kind.as_str(), id, status, "Status updated");
                metrics::counter!(
                    "status_transitions_total",
                    "entity" => kind.as_str(),
                    "outcome" => "success"
                )
                .increment(1);
                ActionOutcome::Success
            }
            Err(e) => self.settle_failure(kind, id, &e.to_string()),
        }
    }

    fn settle_failure(&self, kind: EntityKind, id: i64, message: &str) -> ActionOutcome {
        warn!(entity = kind.as_str(), id, error = message, "Status update failed");
        metrics::counter!(
            "status_transitions_total",
            "entity" => kind.as_str(),
            "outcome" => "failure"
        )
        .increment(1);
        ActionOutcome::failure(message)
    }
}
