//! Result of a user-triggered action.

/// Outcome of a status action.
///
/// Expected failures (store rejections, missing rows, connectivity) are
/// values of this type rather than errors, so callers always branch on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Success,
    Failure { message: String },
}

impl ActionOutcome {
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure {
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ActionOutcome::Success)
    }

    /// The failure message, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            ActionOutcome::Success => None,
            ActionOutcome::Failure { message } => Some(message),
        }
    }
}
