//! Core domain entities representing the clinic's data model.
//!
//! # Entity Types
//!
//! - [`Patient`] - A patient record
//! - [`Appointment`] - A visit, with its [`AppointmentStatus`]
//! - [`Invoice`] - A bill, with its [`InvoiceStatus`]
//!
//! Creation inputs use separate `New*` structs; partial updates use `*Patch`.

pub mod appointment;
pub mod invoice;
pub mod patient;

pub use appointment::{Appointment, AppointmentStatus, NewAppointment};
pub use invoice::{Invoice, InvoiceStatus, NewInvoice};
pub use patient::{NewPatient, Patient, PatientPatch};

use thiserror::Error;

/// A status string that is not a member of the entity's enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {entity} status: {value}")]
pub struct ParseStatusError {
    entity: &'static str,
    value: String,
}

impl ParseStatusError {
    pub(crate) fn new(entity: &'static str, value: &str) -> Self {
        Self {
            entity,
            value: value.to_string(),
        }
    }
}
