// lib/src/clinic.rs

use log::warn;
use std::fmt;

use clinic_models::errors::ClinicResult;
use clinic_models::{Appointment, ClinicError, NewAppointment, NewPatient, Patient};
use clinic_security::{AccessControl, AuthError, Credential};

use crate::ledger::AppointmentLedger;
use crate::registry::{default_patients, PatientLookup, PatientRegistry};

/// Why a [`Clinic`] could not be initialized from its seed data.
#[derive(Debug)]
pub enum InitError {
    Credentials(AuthError),
    Patients(ClinicError),
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InitError::Credentials(e) => write!(f, "Error initializing accounts: {}", e),
            InitError::Patients(e) => write!(f, "Error initializing sample patients: {}", e),
        }
    }
}

impl std::error::Error for InitError {}

/// Everything the front desk works with, created once at process start.
///
/// The ledger never holds on to the registry; every operation that has to
/// check a patient borrows it for the duration of the call.
#[derive(Debug)]
pub struct Clinic {
    access: AccessControl,
    patients: PatientRegistry,
    appointments: AppointmentLedger,
}

impl Clinic {
    pub fn new(
        credentials: Vec<Credential>,
        patient_seed: Vec<NewPatient>,
    ) -> Result<Self, InitError> {
        let access = AccessControl::new(credentials).map_err(InitError::Credentials)?;
        let patients = PatientRegistry::with_seed(patient_seed).map_err(InitError::Patients)?;
        Ok(Clinic {
            access,
            patients,
            appointments: AppointmentLedger::new(),
        })
    }

    /// The default accounts, the two sample patients and no appointments.
    pub fn seeded() -> Result<Self, InitError> {
        Self::new(clinic_security::default_credentials(), default_patients())
    }

    pub fn access(&self) -> &AccessControl {
        &self.access
    }

    pub fn patients(&self) -> &PatientRegistry {
        &self.patients
    }

    pub fn appointments(&self) -> &AppointmentLedger {
        &self.appointments
    }

    pub fn register_patient(&mut self, new_patient: NewPatient) -> ClinicResult<Patient> {
        self.patients.register(new_patient)
    }

    pub fn find_patient(&self, patient_id: &str) -> ClinicResult<&Patient> {
        self.patients.find_by_id(patient_id).ok_or_else(|| {
            warn!("Lookup failed: patient '{}' does not exist", patient_id);
            ClinicError::PatientNotFound(patient_id.to_string())
        })
    }

    pub fn book_appointment(&mut self, request: NewAppointment) -> ClinicResult<Appointment> {
        self.appointments.book(&self.patients, request)
    }

    pub fn appointments_for_patient(&self, patient_id: &str) -> ClinicResult<Vec<&Appointment>> {
        self.appointments.find_by_patient(&self.patients, patient_id)
    }

    pub fn cancel_appointment(&mut self, appointment_id: &str) -> ClinicResult<bool> {
        self.appointments.cancel(appointment_id)
    }
}
