// server/src/cli/interactive.rs

// The interactive front desk session: a bounded login loop followed by the
// role-gated menu loop. All business rules live in the clinic crates; this
// module only collects input and prints results.

use anyhow::Result;
use log::{debug, error};
use std::io::Write;

use clinic_lib::{Clinic, ClinicError, NewAppointment, NewPatient, Role};

use crate::cli::commands::MenuChoice;
use crate::cli::config::ShellConfig;
use crate::cli::display::{appointment_table, patient_table, role_table};
use crate::cli::input::{
    is_input_closed, prompt_date, prompt_int, prompt_non_empty, prompt_positive_int, prompt_string,
    prompt_time, LineReader,
};

/// Where the session is. Once the login attempts run out the shell stays
/// logged out and exits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    LoggedOut,
    LoggedIn(Role),
}

pub struct Shell<R: LineReader, W: Write> {
    clinic: Clinic,
    input: R,
    out: W,
    config: ShellConfig,
    state: SessionState,
}

impl<R: LineReader, W: Write> Shell<R, W> {
    pub fn new(clinic: Clinic, input: R, out: W, config: ShellConfig) -> Self {
        Shell {
            clinic,
            input,
            out,
            config,
            state: SessionState::LoggedOut,
        }
    }

    pub fn clinic(&self) -> &Clinic {
        &self.clinic
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Runs one session: login, then the menu until logout or end of input.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.out, "========================================")?;
        writeln!(self.out, "   {}", self.config.banner)?;
        writeln!(self.out, "========================================")?;

        match self.login() {
            Ok(Some(role)) => {
                writeln!(self.out, "\nLogin Successful. Welcome, {}!", role)?;
                match self.menu_loop(role) {
                    Err(e) if is_input_closed(&e) => debug!("Input closed during menu loop"),
                    other => other?,
                }
            }
            Ok(None) => writeln!(self.out, "\nLogin failed. Exiting application.")?,
            Err(e) if is_input_closed(&e) => debug!("Input closed during login"),
            Err(e) => return Err(e),
        }

        self.state = SessionState::LoggedOut;
        writeln!(self.out, "\nThank you for using the Hospital System. Goodbye!")?;
        self.out.flush()?;
        Ok(())
    }

    /// Prompts for credentials up to `max_login_attempts` times.
    pub fn login(&mut self) -> Result<Option<Role>> {
        let mut attempts = self.config.max_login_attempts;
        while attempts > 0 {
            writeln!(self.out, "\nPlease Login (Attempts left: {})", attempts)?;
            self.out.flush()?;
            let username = prompt_string(&mut self.input, "Username: ")?;
            let password = prompt_string(&mut self.input, "Password: ")?;

            if let Some(role) = self.clinic.access().login(&username, &password) {
                self.state = SessionState::LoggedIn(role);
                return Ok(Some(role));
            }
            writeln!(self.out, "Invalid username or password.")?;
            attempts -= 1;
        }
        Ok(None)
    }

    fn menu_loop(&mut self, role: Role) -> Result<()> {
        loop {
            self.print_menu(role)?;
            let number = prompt_int(&mut self.input, &mut self.out, "Enter your choice: ")?;

            let choice = match MenuChoice::from_number(number) {
                Some(MenuChoice::Logout) => {
                    writeln!(self.out, "Logging out...")?;
                    return Ok(());
                }
                Some(choice) if choice.allowed_for(role) => choice,
                Some(_) => {
                    writeln!(self.out, "Access Denied. Admin role required.")?;
                    self.pause()?;
                    continue;
                }
                None => {
                    writeln!(self.out, "Invalid choice. Please try again.")?;
                    self.pause()?;
                    continue;
                }
            };

            if let Err(e) = self.dispatch(choice) {
                if is_input_closed(&e) {
                    return Err(e);
                }
                match e.downcast_ref::<ClinicError>() {
                    Some(clinic_error) => {
                        writeln!(self.out, "\nOperation Failed: {}", clinic_error)?
                    }
                    None => {
                        error!("Unexpected error while handling {:?}: {:#}", choice, e);
                        writeln!(self.out, "\nAn unexpected error occurred: {}", e)?;
                    }
                }
            }
            self.pause()?;
        }
    }

    fn print_menu(&mut self, role: Role) -> Result<()> {
        writeln!(self.out, "\n--- {} Menu ---", role)?;
        for choice in MenuChoice::visible_to(role) {
            writeln!(self.out, "{}. {}", choice.number(), choice.label())?;
        }
        self.out.flush()?;
        Ok(())
    }

    fn pause(&mut self) -> Result<()> {
        if self.config.pause_after_action {
            prompt_string(&mut self.input, "\nPress Enter to continue...")?;
        }
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<()> {
        match choice {
            MenuChoice::RegisterPatient => self.handle_register_patient(),
            MenuChoice::BookAppointment => self.handle_book_appointment(),
            MenuChoice::ViewAppointmentsByPatient => self.handle_view_appointments_by_patient(),
            MenuChoice::CancelAppointment => self.handle_cancel_appointment(),
            MenuChoice::ViewAllPatients => self.handle_view_all_patients(),
            MenuChoice::ViewAllAppointments => self.handle_view_all_appointments(),
            MenuChoice::ViewUserRoles => self.handle_view_user_roles(),
            MenuChoice::Logout => Ok(()),
        }
    }

    fn handle_register_patient(&mut self) -> Result<()> {
        writeln!(self.out, "\n--- Register New Patient ---")?;
        let name = prompt_non_empty(&mut self.input, &mut self.out, "Enter Patient Name: ")?;
        let age = prompt_positive_int(&mut self.input, &mut self.out, "Enter Patient Age: ")?;
        let gender = prompt_non_empty(
            &mut self.input,
            &mut self.out,
            "Enter Patient Gender (Male/Female/Other): ",
        )?;
        let contact = prompt_non_empty(
            &mut self.input,
            &mut self.out,
            "Enter Patient Contact Number: ",
        )?;

        let patient = self.clinic.register_patient(NewPatient::new(name, age, gender, contact))?;
        writeln!(self.out, "Patient registered successfully! Assigned ID: {}", patient.id())?;
        writeln!(self.out, "Details: {}", patient)?;
        Ok(())
    }

    fn handle_book_appointment(&mut self) -> Result<()> {
        writeln!(self.out, "\n--- Book New Appointment ---")?;
        let patient_id = prompt_non_empty(&mut self.input, &mut self.out, "Enter Patient ID: ")?;
        let patient = self.clinic.find_patient(&patient_id)?;
        writeln!(self.out, "Booking for Patient: {} (ID: {})", patient.name(), patient.id())?;

        let doctor_name = prompt_non_empty(&mut self.input, &mut self.out, "Enter Doctor Name: ")?;
        let date = prompt_date(
            &mut self.input,
            &mut self.out,
            "Enter Appointment Date (YYYY-MM-DD): ",
        )?;
        let time = prompt_time(
            &mut self.input,
            &mut self.out,
            "Enter Appointment Time (HH:MM - 24hr format): ",
        )?;
        let reason = prompt_non_empty(
            &mut self.input,
            &mut self.out,
            "Enter Reason for Appointment: ",
        )?;

        let appointment = self
            .clinic
            .book_appointment(NewAppointment::new(patient_id, doctor_name, date, time, reason))?;
        writeln!(self.out, "Appointment booked successfully!")?;
        writeln!(self.out, "Details: {}", appointment)?;
        Ok(())
    }

    fn handle_view_appointments_by_patient(&mut self) -> Result<()> {
        writeln!(self.out, "\n--- View Appointments by Patient ID ---")?;
        let patient_id = prompt_non_empty(
            &mut self.input,
            &mut self.out,
            "Enter Patient ID to view appointments: ",
        )?;
        let patient = self.clinic.find_patient(&patient_id)?;
        let appointments = self.clinic.appointments_for_patient(&patient_id)?;

        writeln!(
            self.out,
            "\nAppointments for Patient: {} (ID: {})",
            patient.name(),
            patient.id()
        )?;
        if appointments.is_empty() {
            writeln!(self.out, "No appointments found for this patient.")?;
        } else {
            writeln!(self.out, "{}", appointment_table(appointments.iter().copied()))?;
            writeln!(self.out, "Total appointments found: {}", appointments.len())?;
        }
        Ok(())
    }

    fn handle_cancel_appointment(&mut self) -> Result<()> {
        writeln!(self.out, "\n--- Cancel Appointment ---")?;
        let appointment_id = prompt_non_empty(
            &mut self.input,
            &mut self.out,
            "Enter Appointment ID to cancel: ",
        )?;
        if self.clinic.cancel_appointment(&appointment_id)? {
            writeln!(
                self.out,
                "Appointment ID '{}' cancelled successfully.",
                appointment_id.to_ascii_uppercase()
            )?;
        }
        Ok(())
    }

    fn handle_view_all_patients(&mut self) -> Result<()> {
        writeln!(self.out, "\n--- View All Registered Patients ---")?;
        let patients = self.clinic.patients().list_all();
        if patients.is_empty() {
            writeln!(self.out, "No patients registered yet.")?;
            return Ok(());
        }
        writeln!(self.out, "Total Patients: {}", patients.len())?;
        writeln!(self.out, "{}", patient_table(patients))?;
        Ok(())
    }

    fn handle_view_all_appointments(&mut self) -> Result<()> {
        writeln!(self.out, "\n--- View All Booked Appointments ---")?;
        let appointments = self.clinic.appointments().list_all();
        if appointments.is_empty() {
            writeln!(self.out, "No appointments booked yet.")?;
            return Ok(());
        }
        writeln!(self.out, "Total Appointments: {}", appointments.len())?;
        writeln!(self.out, "{}", appointment_table(appointments))?;
        Ok(())
    }

    fn handle_view_user_roles(&mut self) -> Result<()> {
        writeln!(self.out, "\n--- System User Roles ---")?;
        writeln!(self.out, "{}", role_table(self.clinic.access().all_roles()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::input::testing::ScriptedInput;

    fn quiet_config() -> ShellConfig {
        ShellConfig {
            pause_after_action: false,
            ..ShellConfig::default()
        }
    }

    fn run_session(lines: &[&str]) -> (Shell<ScriptedInput, Vec<u8>>, String) {
        let clinic = Clinic::seeded().unwrap();
        let input = ScriptedInput::new(lines.iter().copied());
        let mut shell = Shell::new(clinic, input, Vec::new(), quiet_config());
        shell.run().unwrap();
        let text = String::from_utf8(shell.output().clone()).unwrap();
        (shell, text)
    }

    #[test]
    fn gives_up_after_configured_attempts() {
        let (shell, text) = run_session(&[
            "admin",
            "x",
            "admin",
            "y",
            "reception",
            "z",
            "admin",
            "admin123",
        ]);
        assert_eq!(text.matches("Invalid username or password.").count(), 3);
        assert!(text.contains("Login failed. Exiting application."));
        assert!(!text.contains("Login Successful"));
        assert_eq!(shell.state(), SessionState::LoggedOut);
    }

    #[test]
    fn admin_session_registers_books_and_cancels() {
        let (shell, text) = run_session(&[
            "admin",
            "admin123",
            "1",
            "Alice",
            "40",
            "Female",
            "555-0001",
            "2",
            "p3",
            "Dr. Lee",
            "2025-03-10",
            "09:30",
            "Checkup",
            "3",
            "P3",
            "4",
            "a1",
            "4",
            "A1",
            "0",
        ]);
        assert!(text.contains("Login Successful. Welcome, Admin!"));
        assert!(text.contains("Patient registered successfully! Assigned ID: P3"));
        assert!(text.contains("Booking for Patient: Alice (ID: P3)"));
        assert!(text.contains("Appointment booked successfully!"));
        assert!(text.contains("Total appointments found: 1"));
        assert!(text.contains("Appointment ID 'A1' cancelled successfully."));
        assert!(!text.contains("'a1'"));
        assert!(text.contains("Operation Failed: Appointment with ID 'A1' not found."));
        assert!(text.contains("Logging out..."));
        assert_eq!(shell.clinic().patients().len(), 3);
        assert!(shell.clinic().appointments().is_empty());
    }

    #[test]
    fn receptionist_cannot_open_admin_views() {
        let (_, text) = run_session(&["reception", "pass123", "5", "6", "7", "0"]);
        assert!(text.contains("--- Receptionist Menu ---"));
        assert!(!text.contains("5. View All Patients (Admin)"));
        assert_eq!(text.matches("Access Denied. Admin role required.").count(), 3);
        assert!(!text.contains("Total Patients"));
    }

    #[test]
    fn admin_views_list_everything() {
        let (_, text) = run_session(&["admin", "admin123", "5", "6", "7", "0"]);
        assert!(text.contains("Total Patients: 2"));
        assert!(text.contains("| P2    | Jane Smith"));
        assert!(text.contains("No appointments booked yet."));
        assert!(text.contains("| reception       | Receptionist    |"));
    }

    #[test]
    fn unknown_patient_is_reported_and_loop_continues() {
        let (_, text) = run_session(&["reception", "pass123", "2", "P9", "3", "P1", "9", "0"]);
        assert!(text.contains("Operation Failed: Patient with ID 'P9' not found."));
        assert!(text.contains("No appointments found for this patient."));
        assert!(text.contains("Invalid choice. Please try again."));
        assert!(text.contains("Logging out..."));
    }

    #[test]
    fn end_of_input_ends_the_session_cleanly() {
        let (shell, text) = run_session(&["admin", "admin123", "1", "Alice"]);
        assert!(text.contains("Thank you for using the Hospital System. Goodbye!"));
        assert_eq!(shell.clinic().patients().len(), 2);
        assert_eq!(shell.state(), SessionState::LoggedOut);
    }

    #[test]
    fn pause_waits_for_enter_between_actions() {
        let clinic = Clinic::seeded().unwrap();
        let input = ScriptedInput::new(["admin", "admin123", "7", "", "0"]);
        let mut shell = Shell::new(clinic, input, Vec::new(), ShellConfig::default());
        shell.run().unwrap();
        let text = String::from_utf8(shell.output().clone()).unwrap();
        assert!(text.contains("Logging out..."));
    }
}
