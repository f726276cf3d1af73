//! DTOs for appointment endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Appointment, AppointmentStatus, NewAppointment};

/// Request body for `POST /api/appointments`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateAppointmentRequest {
    #[validate(range(min = 1, message = "Invalid patient id"))]
    pub patient_id: i64,

    pub scheduled_at: DateTime<Utc>,

    #[validate(length(max = 500))]
    pub reason: Option<String>,
}

impl From<CreateAppointmentRequest> for NewAppointment {
    fn from(req: CreateAppointmentRequest) -> Self {
        NewAppointment {
            patient_id: req.patient_id,
            scheduled_at: req.scheduled_at,
            reason: req.reason,
        }
    }
}

/// JSON representation of an appointment.
#[derive(Debug, Serialize, Deserialize)]
pub struct AppointmentItem {
    pub id: i64,
    pub patient_id: i64,
    pub patient_name: Option<String>,
    pub scheduled_at: DateTime<Utc>,
    pub reason: Option<String>,
    pub status: AppointmentStatus,
    pub created_at: DateTime<Utc>,
}

impl From<Appointment> for AppointmentItem {
    fn from(a: Appointment) -> Self {
        AppointmentItem {
            id: a.id,
            patient_id: a.patient_id,
            patient_name: a.patient_name,
            scheduled_at: a.scheduled_at,
            reason: a.reason,
            status: a.status,
            created_at: a.created_at,
        }
    }
}
