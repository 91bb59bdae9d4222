//! Coded error reports produced by validation.
//!
//! The code taxonomy is stable and exposed to external callers: codes are
//! never renumbered or reused. Each code carries a message template with
//! positional `{0}`/`{1}` placeholders so a report renders to a full message
//! without re-inspecting the batch it came from.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stable validation error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Program reference cannot be resolved.
    E1010,
    /// ACTIVE event is missing its event date.
    E1031,
    /// Completed-date reference cannot be determined for the expiry check.
    E1042,
    /// Event is past its complete-events expiry window.
    E1043,
    /// Persisted event is missing its execution date for the period check.
    E1044,
    /// Event is past the period-type expiry window.
    E1045,
    /// No usable reference date for the period-start check.
    E1046,
    /// Event/due date precedes the current period start.
    E1047,
    /// Unparsable due date string.
    E1051,
    /// Unparsable event date string.
    E1052,
    /// Unparsable created-at-client timestamp.
    E1053,
    /// Unparsable last-updated-at-client timestamp.
    E1054,
    /// Missing required event property.
    E1123,
    /// Internal validation fault, isolated to one record.
    E9999,
}

/// Every code, in ascending order. Used by the CLI taxonomy listing.
pub const ALL_ERROR_CODES: &[ErrorCode] = &[
    ErrorCode::E1010,
    ErrorCode::E1031,
    ErrorCode::E1042,
    ErrorCode::E1043,
    ErrorCode::E1044,
    ErrorCode::E1045,
    ErrorCode::E1046,
    ErrorCode::E1047,
    ErrorCode::E1051,
    ErrorCode::E1052,
    ErrorCode::E1053,
    ErrorCode::E1054,
    ErrorCode::E1123,
    ErrorCode::E9999,
];

impl ErrorCode {
    /// Returns the code literal.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E1010 => "E1010",
            ErrorCode::E1031 => "E1031",
            ErrorCode::E1042 => "E1042",
            ErrorCode::E1043 => "E1043",
            ErrorCode::E1044 => "E1044",
            ErrorCode::E1045 => "E1045",
            ErrorCode::E1046 => "E1046",
            ErrorCode::E1047 => "E1047",
            ErrorCode::E1051 => "E1051",
            ErrorCode::E1052 => "E1052",
            ErrorCode::E1053 => "E1053",
            ErrorCode::E1054 => "E1054",
            ErrorCode::E1123 => "E1123",
            ErrorCode::E9999 => "E9999",
        }
    }

    /// Returns the message template with positional placeholders.
    pub fn message_template(&self) -> &'static str {
        match self {
            ErrorCode::E1010 => "Could not find program: `{0}`, linked to event.",
            ErrorCode::E1031 => "Event `{0}` is ACTIVE and needs to have an event date.",
            ErrorCode::E1042 => "Event `{0}` needs to have a completed date.",
            ErrorCode::E1043 => {
                "Event `{0}` completeness date has expired. \
                 Not possible to make changes to this event."
            }
            ErrorCode::E1044 => "Event `{0}` needs to have an execution date.",
            ErrorCode::E1045 => "Expiry period has passed for program `{0}`.",
            ErrorCode::E1046 => "Event `{0}` needs to have at least one of event date or due date.",
            ErrorCode::E1047 => {
                "Event `{0}` has a date that falls before the start of the current \
                 reporting period."
            }
            ErrorCode::E1051 => "Invalid event due date: `{0}`.",
            ErrorCode::E1052 => "Invalid event date: `{0}`.",
            ErrorCode::E1053 => "Invalid event created-at-client date: `{0}`.",
            ErrorCode::E1054 => "Invalid event last-updated-at-client date: `{0}`.",
            ErrorCode::E1123 => "Missing required event property: `{0}`.",
            ErrorCode::E9999 => "Internal validation error: `{0}`.",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ErrorCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_ERROR_CODES
            .iter()
            .copied()
            .find(|code| code.as_str() == s.trim().to_uppercase())
            .ok_or_else(|| format!("Unknown error code: {s}"))
    }
}

/// One coded violation tied to a specific record in a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    /// Position of the offending record in the submitted batch.
    pub index: usize,
    /// Stable error code.
    pub code: ErrorCode,
    /// Ordered message arguments.
    pub args: Vec<String>,
}

impl ErrorReport {
    /// Render the full message by substituting args into the code's template.
    pub fn message(&self) -> String {
        let mut message = self.code.message_template().to_string();
        for (position, arg) in self.args.iter().enumerate() {
            message = message.replace(&format!("{{{position}}}"), arg);
        }
        message
    }
}

/// The full, ordered outcome of validating one batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub reports: Vec<ErrorReport>,
}

impl ValidationReport {
    pub fn new(reports: Vec<ErrorReport>) -> Self {
        Self { reports }
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.reports.len()
    }

    /// Reports for one record, in emission order.
    pub fn for_record(&self, index: usize) -> impl Iterator<Item = &ErrorReport> {
        self.reports.iter().filter(move |report| report.index == index)
    }

    /// True if any report carries the given code.
    pub fn has_code(&self, code: ErrorCode) -> bool {
        self.reports.iter().any(|report| report.code == code)
    }
}
