// lib/src/ledger.rs

//! The appointment ledger. Bookings reference patients by id and carry a
//! copy of the patient's name taken when the booking was made.

use log::{debug, info, warn};

use clinic_models::errors::{ClinicError, ClinicResult};
use clinic_models::{Appointment, EntityKind, IdentifierAllocator, NewAppointment};

use crate::registry::PatientLookup;

#[derive(Debug, Default)]
pub struct AppointmentLedger {
    appointments: Vec<Appointment>,
    ids: IdentifierAllocator,
}

impl AppointmentLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Books an appointment for an existing patient.
    ///
    /// The patient is resolved first (`PatientNotFound`), then the remaining
    /// fields are validated (`Validation`). The appointment id is only
    /// allocated once both checks pass.
    pub fn book<P>(&mut self, patients: &P, request: NewAppointment) -> ClinicResult<Appointment>
    where
        P: PatientLookup + ?Sized,
    {
        let patient = patients.find_by_id(&request.patient_id).ok_or_else(|| {
            warn!("Booking rejected: patient '{}' does not exist", request.patient_id);
            ClinicError::PatientNotFound(request.patient_id.clone())
        })?;

        let details = request.validate().map_err(|e| {
            debug!("Rejected booking for patient {}: {}", patient.id(), e);
            e
        })?;

        let id = self.ids.next(EntityKind::Appointment);
        let appointment = Appointment::new(id, patient, details);
        self.appointments.push(appointment.clone());
        info!(
            "Appointment {} booked for patient {} with {} on {} at {}",
            appointment.appointment_id(),
            appointment.patient_id(),
            appointment.doctor_name(),
            appointment.date_string(),
            appointment.time_string()
        );
        Ok(appointment)
    }

    /// Appointments of one patient in booking order. An existing patient
    /// with no bookings yields an empty list, not an error.
    pub fn find_by_patient<P>(
        &self,
        patients: &P,
        patient_id: &str,
    ) -> ClinicResult<Vec<&Appointment>>
    where
        P: PatientLookup + ?Sized,
    {
        if patients.find_by_id(patient_id).is_none() {
            warn!("Lookup rejected: patient '{}' does not exist", patient_id);
            return Err(ClinicError::PatientNotFound(patient_id.to_string()));
        }
        Ok(self
            .appointments
            .iter()
            .filter(|a| a.belongs_to(patient_id))
            .collect())
    }

    /// All appointments in booking order.
    pub fn list_all(&self) -> &[Appointment] {
        &self.appointments
    }

    /// Removes the appointment with the given id (case-insensitive).
    /// Returns `true` once removed; a missing id is `AppointmentNotFound`.
    pub fn cancel(&mut self, appointment_id: &str) -> ClinicResult<bool> {
        let position = self
            .appointments
            .iter()
            .position(|a| a.has_id(appointment_id))
            .ok_or_else(|| {
                warn!("Cancel rejected: appointment '{}' does not exist", appointment_id);
                ClinicError::AppointmentNotFound(appointment_id.to_string())
            })?;

        let removed = self.appointments.remove(position);
        info!("Appointment {} cancelled", removed.appointment_id());
        Ok(true)
    }

    pub fn len(&self) -> usize {
        self.appointments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
    }

    /// The id the next successful booking will receive.
    pub fn next_id(&self) -> String {
        self.ids.peek(EntityKind::Appointment)
    }
}
