//! DTOs for status actions.

use serde::{Deserialize, Serialize};

use crate::domain::entities::AppointmentStatus;
use crate::domain::outcome::ActionOutcome;

/// Request body for `POST /api/appointments/{id}/status`.
///
/// A status outside the enumeration is rejected while deserializing.
#[derive(Debug, Deserialize)]
pub struct UpdateAppointmentStatusRequest {
    pub status: AppointmentStatus,
}

/// Wire form of an [`ActionOutcome`].
///
/// ```json
/// { "success": true }
/// { "success": false, "error": "Invoice not found" }
/// ```
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActionResponse {
    pub success: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<ActionOutcome> for ActionResponse {
    fn from(outcome: ActionOutcome) -> Self {
        match outcome {
            ActionOutcome::Success => Self {
                success: true,
                error: None,
            },
            ActionOutcome::Failure { message } => Self {
                success: false,
                error: Some(message),
            },
        }
    }
}
