//! Event records under validation and their lifecycle status.
//!
//! Events arrive from clients as loosely-typed payloads: every date field is
//! a raw string that may be absent or malformed. The model keeps them as
//! `Option<String>` so validation hooks perform explicit presence and format
//! checks instead of trusting the input.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of an event record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventStatus {
    /// Open for data entry; an event date is mandatory.
    Active,
    /// Data entry finished; subject to expiry-window rules.
    Completed,
    /// Scheduled for a future date.
    Schedule,
    /// Visit happened but no data entered yet.
    Visited,
    /// Due date has passed without a visit.
    Overdue,
    /// Explicitly skipped.
    Skipped,
}

impl EventStatus {
    /// Returns the canonical upper-case name used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Active => "ACTIVE",
            EventStatus::Completed => "COMPLETED",
            EventStatus::Schedule => "SCHEDULE",
            EventStatus::Visited => "VISITED",
            EventStatus::Overdue => "OVERDUE",
            EventStatus::Skipped => "SKIPPED",
        }
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EventStatus {
    type Err = String;

    /// Parse a status string (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ACTIVE" => Ok(EventStatus::Active),
            "COMPLETED" => Ok(EventStatus::Completed),
            "SCHEDULE" => Ok(EventStatus::Schedule),
            "VISITED" => Ok(EventStatus::Visited),
            "OVERDUE" => Ok(EventStatus::Overdue),
            "SKIPPED" => Ok(EventStatus::Skipped),
            _ => Err(format!("Unknown event status: {s}")),
        }
    }
}

/// A single event record as submitted by a client.
///
/// Date fields are raw strings on purpose: format validation is a business
/// rule (E1051-E1054), not a deserialization concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Event identifier.
    pub id: String,
    /// Identifier of the owning program.
    pub program: String,
    /// Lifecycle status.
    pub status: EventStatus,
    /// Date the event occurred.
    #[serde(default)]
    pub event_date: Option<String>,
    /// Date the event is due.
    #[serde(default)]
    pub due_date: Option<String>,
    /// Date the event was completed.
    #[serde(default)]
    pub completed_date: Option<String>,
    /// Client-side creation timestamp.
    #[serde(default)]
    pub created_at_client: Option<String>,
    /// Client-side last-update timestamp.
    #[serde(default)]
    pub last_updated_at_client: Option<String>,
}

impl Event {
    /// Create an event with only the mandatory fields set.
    pub fn new(id: impl Into<String>, program: impl Into<String>, status: EventStatus) -> Self {
        Self {
            id: id.into(),
            program: program.into(),
            status,
            event_date: None,
            due_date: None,
            completed_date: None,
            created_at_client: None,
            last_updated_at_client: None,
        }
    }
}

/// An ordered group of events submitted together.
///
/// Record identity is batch position: error reports refer back to events by
/// their index in `events`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Batch {
    pub events: Vec<Event>,
}

impl Batch {
    pub fn new(events: Vec<Event>) -> Self {
        Self { events }
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// The previously persisted counterpart of an event, absent for new events.
///
/// Persisted dates are real dates, not strings: they were validated when the
/// record was first stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedEvent {
    /// Status at the time the record was stored.
    pub status: EventStatus,
    /// Date the stored event was completed.
    #[serde(default)]
    pub completed_date: Option<NaiveDate>,
    /// Date the stored event was executed.
    #[serde(default)]
    pub execution_date: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_status_from_str() {
        assert_eq!("ACTIVE".parse::<EventStatus>().unwrap(), EventStatus::Active);
        assert_eq!(
            "completed".parse::<EventStatus>().unwrap(),
            EventStatus::Completed
        );
        assert_eq!(
            " Overdue ".parse::<EventStatus>().unwrap(),
            EventStatus::Overdue
        );
        assert!("CANCELLED".parse::<EventStatus>().is_err());
    }

    #[test]
    fn test_event_status_roundtrip() {
        for status in [
            EventStatus::Active,
            EventStatus::Completed,
            EventStatus::Schedule,
            EventStatus::Visited,
            EventStatus::Overdue,
            EventStatus::Skipped,
        ] {
            assert_eq!(status.as_str().parse::<EventStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_event_deserializes_with_absent_dates() {
        let event: Event = serde_json::from_str(
            r#"{"id": "ev1", "program": "prog1", "status": "ACTIVE"}"#,
        )
        .unwrap();
        assert_eq!(event.status, EventStatus::Active);
        assert!(event.event_date.is_none());
        assert!(event.due_date.is_none());
    }
}
