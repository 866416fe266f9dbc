// models/src/identifiers.rs

use std::collections::HashMap;
use std::fmt;

/// The kinds of record that receive system-assigned identifiers.
/// Each kind has its own counter and prefix.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum EntityKind {
    Patient,
    Appointment,
}

impl EntityKind {
    pub fn prefix(self) -> &'static str {
        match self {
            EntityKind::Patient => "P",
            EntityKind::Appointment => "A",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Patient => write!(f, "patient"),
            EntityKind::Appointment => write!(f, "appointment"),
        }
    }
}

/// Hands out identifiers of the form `<prefix><n>`, one increasing sequence
/// per [`EntityKind`], each starting at 1.
///
/// Callers must only call [`IdentifierAllocator::next`] once every other check
/// of the operation has passed, so a rejected request never consumes a number.
#[derive(Clone, Debug, Default)]
pub struct IdentifierAllocator {
    issued: HashMap<EntityKind, u64>,
}

impl IdentifierAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates the next identifier for `kind`.
    pub fn next(&mut self, kind: EntityKind) -> String {
        let counter = self.issued.entry(kind).or_insert(0);
        *counter += 1;
        let id = format!("{}{}", kind.prefix(), counter);
        log::debug!("allocated {} id {}", kind, id);
        id
    }

    /// The identifier the next call to `next(kind)` would return.
    pub fn peek(&self, kind: EntityKind) -> String {
        format!("{}{}", kind.prefix(), self.issued_count(kind) + 1)
    }

    /// How many identifiers of `kind` have been handed out so far.
    pub fn issued_count(&self, kind: EntityKind) -> u64 {
        self.issued.get(&kind).copied().unwrap_or(0)
    }
}
