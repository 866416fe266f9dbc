// server/src/cli/commands.rs

// Command-line arguments for the clinic shell and the numbered entries of
// its interactive menu.
use clap::Parser;
use clinic_security::{Permission, Role};
use std::path::PathBuf;

#[derive(Parser, Debug, PartialEq)]
#[command(name = "clinic-cli")]
#[command(version)]
#[command(about = "Clinic front desk: register patients, book and cancel appointments")]
pub struct CliArgs {
    /// TOML config file with [shell] and [logging] sections.
    #[arg(long, short = 'c', value_name = "FILE", value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,
    /// Login attempts before giving up. Overrides the config file.
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub max_attempts: Option<u32>,
    /// Log at debug level regardless of config and RUST_LOG.
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

/// Entries of the main menu, numbered as the front desk knows them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    RegisterPatient,
    BookAppointment,
    ViewAppointmentsByPatient,
    CancelAppointment,
    ViewAllPatients,
    ViewAllAppointments,
    ViewUserRoles,
    Logout,
}

impl MenuChoice {
    /// Display order of the menu. Logout is listed last.
    pub const ALL: [MenuChoice; 8] = [
        MenuChoice::RegisterPatient,
        MenuChoice::BookAppointment,
        MenuChoice::ViewAppointmentsByPatient,
        MenuChoice::CancelAppointment,
        MenuChoice::ViewAllPatients,
        MenuChoice::ViewAllAppointments,
        MenuChoice::ViewUserRoles,
        MenuChoice::Logout,
    ];

    pub fn from_number(number: i32) -> Option<Self> {
        MenuChoice::ALL.into_iter().find(|choice| choice.number() == number)
    }

    pub fn number(self) -> i32 {
        match self {
            MenuChoice::RegisterPatient => 1,
            MenuChoice::BookAppointment => 2,
            MenuChoice::ViewAppointmentsByPatient => 3,
            MenuChoice::CancelAppointment => 4,
            MenuChoice::ViewAllPatients => 5,
            MenuChoice::ViewAllAppointments => 6,
            MenuChoice::ViewUserRoles => 7,
            MenuChoice::Logout => 0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::RegisterPatient => "Register New Patient",
            MenuChoice::BookAppointment => "Book New Appointment",
            MenuChoice::ViewAppointmentsByPatient => "View Appointments by Patient ID",
            MenuChoice::CancelAppointment => "Cancel Appointment",
            MenuChoice::ViewAllPatients => "View All Patients (Admin)",
            MenuChoice::ViewAllAppointments => "View All Appointments (Admin)",
            MenuChoice::ViewUserRoles => "View User Roles (Admin)",
            MenuChoice::Logout => "Logout",
        }
    }

    /// The permission needed to run this entry; logging out needs none.
    pub fn required_permission(self) -> Option<Permission> {
        match self {
            MenuChoice::RegisterPatient => Some(Permission::RegisterPatient),
            MenuChoice::BookAppointment => Some(Permission::BookAppointment),
            MenuChoice::ViewAppointmentsByPatient => Some(Permission::ViewPatientAppointments),
            MenuChoice::CancelAppointment => Some(Permission::CancelAppointment),
            MenuChoice::ViewAllPatients => Some(Permission::ViewAllPatients),
            MenuChoice::ViewAllAppointments => Some(Permission::ViewAllAppointments),
            MenuChoice::ViewUserRoles => Some(Permission::ViewUserRoles),
            MenuChoice::Logout => None,
        }
    }

    pub fn allowed_for(self, role: Role) -> bool {
        self.required_permission()
            .map_or(true, |permission| role.has_permission(permission))
    }

    /// Entries shown to `role`, in display order.
    pub fn visible_to(role: Role) -> impl Iterator<Item = MenuChoice> {
        MenuChoice::ALL.into_iter().filter(move |choice| choice.allowed_for(role))
    }
}
