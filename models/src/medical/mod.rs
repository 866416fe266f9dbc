// models/src/medical/mod.rs

pub mod appointment;
pub mod patient;

pub use appointment::{parse_date, parse_time, Appointment, NewAppointment, ValidatedAppointment};
pub use patient::{NewPatient, Patient, ValidatedPatient};

use crate::errors::{ValidationError, ValidationResult};

/// Trims `value` and rejects it when nothing is left.
pub(crate) fn require_text(field: &'static str, value: &str) -> ValidationResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(trimmed.to_string())
}
