// lib/src/registry.rs

//! The patient registry: an append-only, insertion-ordered collection of
//! patients with system-assigned identifiers.

use log::{debug, info};

use clinic_models::errors::ClinicResult;
use clinic_models::{EntityKind, IdentifierAllocator, NewPatient, Patient};

/// Read-only patient lookup. The appointment ledger validates bookings
/// through this seam instead of owning the registry.
pub trait PatientLookup {
    /// Case-insensitive exact match on the patient id.
    fn find_by_id(&self, id: &str) -> Option<&Patient>;
}

/// The patients every fresh process starts with, registered in this order.
pub fn default_patients() -> Vec<NewPatient> {
    vec![
        NewPatient::new("John Doe", 30, "Male", "555-1234"),
        NewPatient::new("Jane Smith", 25, "Female", "555-5678"),
    ]
}

#[derive(Debug, Default)]
pub struct PatientRegistry {
    patients: Vec<Patient>,
    ids: IdentifierAllocator,
}

impl PatientRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry by registering each seed entry in order.
    pub fn with_seed(seed: Vec<NewPatient>) -> ClinicResult<Self> {
        let mut registry = Self::new();
        for patient in seed {
            registry.register(patient)?;
        }
        Ok(registry)
    }

    /// Registry holding [`default_patients`] as P1 and P2.
    pub fn seeded() -> ClinicResult<Self> {
        Self::with_seed(default_patients())
    }

    /// Validates and stores a new patient. A rejected registration leaves the
    /// registry and its id sequence untouched.
    pub fn register(&mut self, new_patient: NewPatient) -> ClinicResult<Patient> {
        let details = new_patient.validate().map_err(|e| {
            debug!("Rejected patient registration: {}", e);
            e
        })?;

        let id = self.ids.next(EntityKind::Patient);
        let patient = Patient::new(id, details);
        self.patients.push(patient.clone());
        info!("Patient registered successfully! Assigned ID: {}", patient.id());
        Ok(patient)
    }

    /// All patients in registration order.
    pub fn list_all(&self) -> &[Patient] {
        &self.patients
    }

    pub fn len(&self) -> usize {
        self.patients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patients.is_empty()
    }

    /// The id the next successful registration will receive.
    pub fn next_id(&self) -> String {
        self.ids.peek(EntityKind::Patient)
    }
}

impl PatientLookup for PatientRegistry {
    fn find_by_id(&self, id: &str) -> Option<&Patient> {
        self.patients.iter().find(|p| p.has_id(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clinic_models::{ClinicError, ValidationError};

    #[test]
    fn seeded_registry_holds_two_patients() {
        let registry = PatientRegistry::seeded().unwrap();
        let names: Vec<&str> = registry.list_all().iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["John Doe", "Jane Smith"]);
        assert_eq!(registry.list_all()[0].id(), "P1");
        assert_eq!(registry.list_all()[1].id(), "P2");
        assert_eq!(registry.next_id(), "P3");
    }

    #[test]
    fn register_assigns_next_id() {
        let mut registry = PatientRegistry::seeded().unwrap();
        let alice = registry
            .register(NewPatient::new("Alice", 40, "Female", "555-0001"))
            .unwrap();
        assert_eq!(alice.id(), "P3");
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.find_by_id("P3"), Some(&alice));
    }

    #[test]
    fn rejected_registration_does_not_burn_an_id() {
        let mut registry = PatientRegistry::seeded().unwrap();
        let rejected = [
            NewPatient::new("", 40, "Female", "555-0001"),
            NewPatient::new("Alice", 0, "Female", "555-0001"),
            NewPatient::new("Alice", -1, "Female", "555-0001"),
            NewPatient::new("Alice", 40, "  ", "555-0001"),
            NewPatient::new("Alice", 40, "Female", ""),
        ];
        for new_patient in rejected {
            let err = registry.register(new_patient).unwrap_err();
            assert!(matches!(err, ClinicError::Validation(_)));
        }
        assert_eq!(registry.len(), 2);

        let bob = registry.register(NewPatient::new("Bob", 52, "Male", "555-0002")).unwrap();
        assert_eq!(bob.id(), "P3");
    }

    #[test]
    fn register_reports_which_rule_failed() {
        let mut registry = PatientRegistry::new();
        assert_eq!(
            registry.register(NewPatient::new("Alice", 0, "Female", "555")).unwrap_err(),
            ClinicError::Validation(ValidationError::NonPositiveAge(0))
        );
    }

    #[test]
    fn ids_are_unique_and_increasing() {
        let mut registry = PatientRegistry::new();
        let mut last = 0u64;
        for n in 1..=20 {
            let patient = registry
                .register(NewPatient::new(format!("Patient {n}"), n, "Other", "555-0000"))
                .unwrap();
            let number: u64 = patient.id()[1..].parse().unwrap();
            assert!(number > last);
            last = number;
        }
        assert_eq!(last, 20);
    }

    #[test]
    fn find_by_id_ignores_case_and_misses_cleanly() {
        let registry = PatientRegistry::seeded().unwrap();
        assert_eq!(registry.find_by_id("p2").map(|p| p.name()), Some("Jane Smith"));
        assert!(registry.find_by_id("P9").is_none());
        assert!(registry.find_by_id("").is_none());
    }
}
