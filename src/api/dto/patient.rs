//! DTOs for patient endpoints.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use validator::{Validate, ValidationError};

use crate::domain::entities::{NewPatient, Patient, PatientPatch};

/// Digits, spaces, `+`, `-` and parentheses, 6 to 32 characters.
static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9+() \-]{6,32}$").unwrap());

const MAX_NAME_CHARS: usize = 200;

/// Names are stored trimmed, so the bounds apply to the trimmed text.
fn validate_full_name(name: &str) -> Result<(), ValidationError> {
    let len = name.trim().chars().count();
    if len == 0 || len > MAX_NAME_CHARS {
        return Err(ValidationError::new("full_name_length")
            .with_message("Name must be 1-200 characters".into()));
    }
    Ok(())
}

fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if !PHONE_REGEX.is_match(phone) || !phone.chars().any(|c| c.is_ascii_digit()) {
        return Err(ValidationError::new("phone").with_message("Invalid phone number".into()));
    }
    Ok(())
}

fn validate_birth_date(date: &NaiveDate) -> Result<(), ValidationError> {
    if *date > Utc::now().date_naive() {
        return Err(ValidationError::new("date_of_birth_in_future"));
    }
    Ok(())
}

/// Request body for `POST /api/patients`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePatientRequest {
    #[validate(custom(function = "validate_full_name"))]
    pub full_name: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,

    #[validate(custom(function = "validate_phone"))]
    pub phone: Option<String>,

    #[validate(custom(function = "validate_birth_date"))]
    pub date_of_birth: Option<NaiveDate>,

    #[validate(length(max = 2000))]
    pub notes: Option<String>,
}

impl From<CreatePatientRequest> for NewPatient {
    fn from(req: CreatePatientRequest) -> Self {
        NewPatient {
            full_name: req.full_name,
            email: req.email,
            phone: req.phone,
            date_of_birth: req.date_of_birth,
            notes: req.notes,
        }
    }
}

/// Request body for `PATCH /api/patients/{id}`.
///
/// Absent fields are left unchanged; `null` clears a nullable field.
#[serde_as]
#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePatientRequest {
    #[validate(custom(function = "validate_full_name"))]
    pub full_name: Option<String>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    #[validate(email(message = "Invalid email address"))]
    pub email: Option<Option<String>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    #[validate(custom(function = "validate_phone"))]
    pub phone: Option<Option<String>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    #[validate(custom(function = "validate_birth_date"))]
    pub date_of_birth: Option<Option<NaiveDate>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    #[validate(length(max = 2000))]
    pub notes: Option<Option<String>>,
}

impl From<UpdatePatientRequest> for PatientPatch {
    fn from(req: UpdatePatientRequest) -> Self {
        PatientPatch {
            full_name: req.full_name,
            email: req.email,
            phone: req.phone,
            date_of_birth: req.date_of_birth,
            notes: req.notes,
        }
    }
}

/// JSON representation of a patient.
#[derive(Debug, Serialize, Deserialize)]
pub struct PatientItem {
    pub id: i64,
    pub full_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub age: Option<u32>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Patient> for PatientItem {
    fn from(p: Patient) -> Self {
        let age = p.age_on(Utc::now().date_naive());
        PatientItem {
            id: p.id,
            full_name: p.full_name,
            email: p.email,
            phone: p.phone,
            date_of_birth: p.date_of_birth,
            age,
            notes: p.notes,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}
