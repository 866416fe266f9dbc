// models/src/medical/patient.rs

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{ValidationError, ValidationResult};
use crate::medical::require_text;

// --- Input for a new registration ---
// Holds the raw values as the front desk typed them. Nothing is checked until
// `validate` is called.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPatient {
    pub name: String,
    pub age: i32,
    pub gender: String,
    pub contact_number: String,
}

impl NewPatient {
    pub fn new(
        name: impl Into<String>,
        age: i32,
        gender: impl Into<String>,
        contact_number: impl Into<String>,
    ) -> Self {
        NewPatient {
            name: name.into(),
            age,
            gender: gender.into(),
            contact_number: contact_number.into(),
        }
    }

    /// Checks every business field. Text fields are trimmed and must not be
    /// empty; age must be greater than zero.
    pub fn validate(&self) -> ValidationResult<ValidatedPatient> {
        let name = require_text("name", &self.name)?;
        if self.age <= 0 {
            return Err(ValidationError::NonPositiveAge(self.age));
        }
        let gender = require_text("gender", &self.gender)?;
        let contact_number = require_text("contact number", &self.contact_number)?;

        Ok(ValidatedPatient {
            name,
            age: self.age as u32,
            gender,
            contact_number,
        })
    }
}

/// Patient details that passed validation and are waiting for an id.
/// Only `NewPatient::validate` can produce one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedPatient {
    name: String,
    age: u32,
    gender: String,
    contact_number: String,
}

// --- Stored Patient ---
// Immutable once built. The id is assigned by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Patient {
    id: String,
    name: String,
    age: u32,
    gender: String,
    contact_number: String,
}

impl Patient {
    pub fn new(id: String, details: ValidatedPatient) -> Self {
        Patient {
            id,
            name: details.name,
            age: details.age,
            gender: details.gender,
            contact_number: details.contact_number,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn gender(&self) -> &str {
        &self.gender
    }

    pub fn contact_number(&self) -> &str {
        &self.contact_number
    }

    /// Case-insensitive identifier comparison, as used by every lookup.
    pub fn has_id(&self, id: &str) -> bool {
        self.id.eq_ignore_ascii_case(id.trim())
    }
}

impl fmt::Display for Patient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Patient [ID={:<5} | Name={:<20} | Age={:<3} | Gender={:<10} | Contact={:<15}]",
            self.id, self.name, self.age, self.gender, self.contact_number
        )
    }
}
