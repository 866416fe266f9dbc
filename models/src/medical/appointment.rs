// models/src/medical/appointment.rs

use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize, Serializer};

use crate::errors::{ValidationError, ValidationResult};
use crate::medical::{require_text, Patient};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

/// Parses a calendar date written exactly as `YYYY-MM-DD`.
pub fn parse_date(input: &str) -> ValidationResult<NaiveDate> {
    let trimmed = input.trim();
    if !matches_shape(trimmed, "dddd-dd-dd") {
        return Err(ValidationError::InvalidDate(trimmed.to_string()));
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidDate(trimmed.to_string()))
}

/// Parses a 24-hour clock time written exactly as `HH:MM`.
pub fn parse_time(input: &str) -> ValidationResult<NaiveTime> {
    let trimmed = input.trim();
    if !matches_shape(trimmed, "dd:dd") {
        return Err(ValidationError::InvalidTime(trimmed.to_string()));
    }
    NaiveTime::parse_from_str(trimmed, TIME_FORMAT)
        .map_err(|_| ValidationError::InvalidTime(trimmed.to_string()))
}

// chrono accepts unpadded fields, so the exact width is checked first.
// `d` in the pattern stands for an ASCII digit, anything else must match literally.
fn matches_shape(input: &str, pattern: &str) -> bool {
    input.len() == pattern.len()
        && input.bytes().zip(pattern.bytes()).all(|(c, p)| match p {
            b'd' => c.is_ascii_digit(),
            _ => c == p,
        })
}

fn serialize_time<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&time.format(TIME_FORMAT))
}

// --- Input for a new booking ---
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAppointment {
    pub patient_id: String,
    pub doctor_name: String,
    pub date: String,
    pub time: String,
    pub reason: String,
}

impl NewAppointment {
    pub fn new(
        patient_id: impl Into<String>,
        doctor_name: impl Into<String>,
        date: impl Into<String>,
        time: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        NewAppointment {
            patient_id: patient_id.into(),
            doctor_name: doctor_name.into(),
            date: date.into(),
            time: time.into(),
            reason: reason.into(),
        }
    }

    /// Checks the booking fields that do not depend on the registry.
    /// Missing fields are reported before date/time format problems.
    pub fn validate(&self) -> ValidationResult<ValidatedAppointment> {
        let doctor_name = require_text("doctor name", &self.doctor_name)?;
        let reason = require_text("reason", &self.reason)?;
        if self.date.trim().is_empty() {
            return Err(ValidationError::MissingField("date"));
        }
        if self.time.trim().is_empty() {
            return Err(ValidationError::MissingField("time"));
        }
        let date = parse_date(&self.date)?;
        let time = parse_time(&self.time)?;

        Ok(ValidatedAppointment { doctor_name, date, time, reason })
    }
}

/// Booking details that passed validation. Only `NewAppointment::validate`
/// can produce one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedAppointment {
    doctor_name: String,
    date: NaiveDate,
    time: NaiveTime,
    reason: String,
}

// --- Stored Appointment ---
// The patient id and name are copied from the patient at booking time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Appointment {
    appointment_id: String,
    patient_id: String,
    patient_name: String,
    doctor_name: String,
    date: NaiveDate,
    #[serde(serialize_with = "serialize_time")]
    time: NaiveTime,
    reason: String,
}

impl Appointment {
    pub fn new(appointment_id: String, patient: &Patient, details: ValidatedAppointment) -> Self {
        Appointment {
            appointment_id,
            patient_id: patient.id().to_string(),
            patient_name: patient.name().to_string(),
            doctor_name: details.doctor_name,
            date: details.date,
            time: details.time,
            reason: details.reason,
        }
    }

    pub fn appointment_id(&self) -> &str {
        &self.appointment_id
    }

    pub fn patient_id(&self) -> &str {
        &self.patient_id
    }

    pub fn patient_name(&self) -> &str {
        &self.patient_name
    }

    pub fn doctor_name(&self) -> &str {
        &self.doctor_name
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn time(&self) -> NaiveTime {
        self.time
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// Date in `YYYY-MM-DD` form.
    pub fn date_string(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }

    /// Time in `HH:MM` form.
    pub fn time_string(&self) -> String {
        self.time.format(TIME_FORMAT).to_string()
    }

    pub fn has_id(&self, id: &str) -> bool {
        self.appointment_id.eq_ignore_ascii_case(id.trim())
    }

    pub fn belongs_to(&self, patient_id: &str) -> bool {
        self.patient_id.eq_ignore_ascii_case(patient_id.trim())
    }
}

impl fmt::Display for Appointment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Appointment [ID={:<5} | PatientID={:<5} | Name={:<15} | Doctor={:<15} | Date={:<10} | Time={:<5} | Reason={:<20}]",
            self.appointment_id,
            self.patient_id,
            self.patient_name,
            self.doctor_name,
            self.date_string(),
            self.time_string(),
            self.reason
        )
    }
}
