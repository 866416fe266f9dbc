// models/src/errors.rs

pub use thiserror::Error;

/// Errors returned by the record-management operations.
///
/// All three kinds are recoverable: the caller reports them and carries on.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClinicError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Patient with ID '{0}' not found.")]
    PatientNotFound(String),
    #[error("Appointment with ID '{0}' not found.")]
    AppointmentNotFound(String),
}

/// A caller-supplied field failed a syntactic or business rule.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required text field was empty or only whitespace.
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    /// Age must be a positive whole number.
    #[error("age must be positive, got {0}")]
    NonPositiveAge(i32),
    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("invalid time '{0}', expected HH:MM (24-hour)")]
    InvalidTime(String),
}

impl ValidationError {
    /// True for the date/time format failures, false for missing or out-of-range fields.
    pub fn is_format_error(&self) -> bool {
        matches!(self, ValidationError::InvalidDate(_) | ValidationError::InvalidTime(_))
    }
}

pub type ClinicResult<T> = Result<T, ClinicError>;
pub type ValidationResult<T> = Result<T, ValidationError>;
