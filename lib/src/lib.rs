// lib/src/lib.rs

//! Record management for the clinic front desk: the patient registry, the
//! appointment ledger and the [`Clinic`] value that owns both together with
//! the access-control table.

pub mod clinic;
pub mod ledger;
pub mod registry;

pub use crate::clinic::{Clinic, InitError};
pub use crate::ledger::AppointmentLedger;
pub use crate::registry::{default_patients, PatientLookup, PatientRegistry};

pub use clinic_models::{
    Appointment, ClinicError, ClinicResult, NewAppointment, NewPatient, Patient, ValidationError,
};
pub use clinic_security::{AccessControl, Permission, Role};
