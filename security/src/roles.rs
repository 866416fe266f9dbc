// security/src/roles.rs
use std::fmt;

/// Actions the front desk menu can offer. Each role holds a fixed subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permission {
    RegisterPatient,
    BookAppointment,
    ViewPatientAppointments,
    CancelAppointment,
    ViewAllPatients,
    ViewAllAppointments,
    ViewUserRoles,
}

const FRONT_DESK_PERMISSIONS: &[Permission] = &[
    Permission::RegisterPatient,
    Permission::BookAppointment,
    Permission::ViewPatientAppointments,
    Permission::CancelAppointment,
];

const ADMIN_PERMISSIONS: &[Permission] = &[
    Permission::RegisterPatient,
    Permission::BookAppointment,
    Permission::ViewPatientAppointments,
    Permission::CancelAppointment,
    Permission::ViewAllPatients,
    Permission::ViewAllAppointments,
    Permission::ViewUserRoles,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    Receptionist,
}

impl Role {
    pub fn permissions(self) -> &'static [Permission] {
        match self {
            Role::Admin => ADMIN_PERMISSIONS,
            Role::Receptionist => FRONT_DESK_PERMISSIONS,
        }
    }

    pub fn has_permission(self, permission: Permission) -> bool {
        self.permissions().contains(&permission)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Role::Admin => write!(f, "Admin"),
            Role::Receptionist => write!(f, "Receptionist"),
        }
    }
}
