// server/src/cli/display.rs

// Fixed-width tables for patients, appointments and user roles.

use std::collections::BTreeMap;
use std::fmt::Write;

use clinic_models::{Appointment, Patient};
use clinic_security::Role;

const PATIENT_WIDTHS: [usize; 5] = [5, 20, 5, 10, 15];
const APPOINTMENT_WIDTHS: [usize; 7] = [7, 10, 20, 15, 10, 8, 25];
const ROLE_WIDTHS: [usize; 2] = [15, 15];

fn border(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for width in widths {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
    }
    line
}

// Cells are left-aligned and padded; longer values are printed whole.
fn row<S: AsRef<str>>(widths: &[usize], cells: &[S]) -> String {
    let mut line = String::from("|");
    for (cell, width) in cells.iter().zip(widths) {
        let _ = write!(line, " {:<width$} |", cell.as_ref(), width = *width);
    }
    line
}

fn table(widths: &[usize], header: &[&str], rows: Vec<Vec<String>>) -> String {
    let rule = border(widths);
    let mut lines = vec![rule.clone(), row(widths, header), rule.clone()];
    lines.extend(rows.iter().map(|cells| row(widths, cells)));
    lines.push(rule);
    lines.join("\n")
}

pub fn patient_table(patients: &[Patient]) -> String {
    let rows = patients
        .iter()
        .map(|p| {
            vec![
                p.id().to_string(),
                p.name().to_string(),
                p.age().to_string(),
                p.gender().to_string(),
                p.contact_number().to_string(),
            ]
        })
        .collect();
    table(&PATIENT_WIDTHS, &["ID", "Name", "Age", "Gender", "Contact"], rows)
}

pub fn appointment_table<'a, I>(appointments: I) -> String
where
    I: IntoIterator<Item = &'a Appointment>,
{
    let rows = appointments
        .into_iter()
        .map(|a| {
            vec![
                a.appointment_id().to_string(),
                a.patient_id().to_string(),
                a.patient_name().to_string(),
                a.doctor_name().to_string(),
                a.date_string(),
                a.time_string(),
                a.reason().to_string(),
            ]
        })
        .collect();
    table(
        &APPOINTMENT_WIDTHS,
        &["App. ID", "Patient ID", "Patient Name", "Doctor", "Date", "Time", "Reason"],
        rows,
    )
}

pub fn role_table(roles: &BTreeMap<String, Role>) -> String {
    let rows = roles
        .iter()
        .map(|(username, role)| vec![username.clone(), role.to_string()])
        .collect();
    table(&ROLE_WIDTHS, &["Username", "Role"], rows)
}
