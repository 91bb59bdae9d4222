//! Pre-resolved reference data consumed during validation.
//!
//! All reference lookups are resolved before validation starts; there is no
//! I/O inside the core. The `Preheat` trait is the narrow contract hooks
//! read through, and `InMemoryPreheat` is the standard map-backed
//! implementation the loader (or a test) fills in.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracker_model::{PersistedEvent, Program, User};

/// Read-only lookup of reference data for one validation run.
pub trait Preheat {
    /// Look up a program by id.
    fn program(&self, id: &str) -> Option<&Program>;

    /// Look up the previously persisted counterpart of an event, if any.
    fn persisted_event(&self, id: &str) -> Option<&PersistedEvent>;

    /// The user on whose behalf the batch is validated.
    fn acting_user(&self) -> &User;
}

/// Map-backed preheat, deserializable from a reference-data file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InMemoryPreheat {
    #[serde(default)]
    programs: BTreeMap<String, Program>,
    #[serde(default)]
    persisted_events: BTreeMap<String, PersistedEvent>,
    #[serde(default)]
    user: User,
}

impl InMemoryPreheat {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a program, keyed by its id.
    #[must_use]
    pub fn with_program(mut self, program: Program) -> Self {
        self.programs.insert(program.id.clone(), program);
        self
    }

    /// Register the persisted counterpart of an event.
    #[must_use]
    pub fn with_persisted_event(mut self, event_id: impl Into<String>, stored: PersistedEvent) -> Self {
        self.persisted_events.insert(event_id.into(), stored);
        self
    }

    /// Set the acting user.
    #[must_use]
    pub fn with_user(mut self, user: User) -> Self {
        self.user = user;
        self
    }
}

impl Preheat for InMemoryPreheat {
    fn program(&self, id: &str) -> Option<&Program> {
        self.programs.get(id)
    }

    fn persisted_event(&self, id: &str) -> Option<&PersistedEvent> {
        self.persisted_events.get(id)
    }

    fn acting_user(&self) -> &User {
        &self.user
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracker_model::EventStatus;

    #[test]
    fn test_lookups() {
        let preheat = InMemoryPreheat::new()
            .with_program(Program::new("prog1"))
            .with_persisted_event(
                "ev1",
                PersistedEvent {
                    status: EventStatus::Completed,
                    completed_date: None,
                    execution_date: None,
                },
            )
            .with_user(User::new("alice"));

        assert!(preheat.program("prog1").is_some());
        assert!(preheat.program("prog2").is_none());
        assert!(preheat.persisted_event("ev1").is_some());
        assert!(preheat.persisted_event("ev2").is_none());
        assert_eq!(preheat.acting_user().username, "alice");
    }

    #[test]
    fn test_deserializes_from_reference_file() {
        let preheat: InMemoryPreheat = serde_json::from_str(
            r#"{
                "programs": {
                    "prog1": {"id": "prog1", "expiry_days": 3, "expiry_period_type": "Monthly"}
                },
                "persisted_events": {
                    "ev1": {"status": "COMPLETED", "execution_date": "2024-01-20"}
                },
                "user": {"username": "alice", "authorities": ["EDIT_EXPIRED"]}
            }"#,
        )
        .expect("deserialize preheat");
        assert_eq!(preheat.program("prog1").unwrap().expiry_days, 3);
        assert!(preheat.persisted_event("ev1").unwrap().execution_date.is_some());
    }
}
