// models/src/lib.rs

//! Record types shared by the clinic front desk crates: patients,
//! appointments, their identifiers and the error taxonomy.

pub mod errors;
pub mod identifiers;
pub mod medical;

pub use errors::{ClinicError, ClinicResult, ValidationError, ValidationResult};
pub use identifiers::{EntityKind, IdentifierAllocator};
pub use medical::{Appointment, NewAppointment, NewPatient, Patient};
