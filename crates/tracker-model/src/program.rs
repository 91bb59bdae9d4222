//! Program reference data: the per-collection business rules events are
//! validated against.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Calendar partitioning policy used to derive reporting-period boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PeriodKind {
    /// A single calendar day.
    Daily,
    /// ISO week, Monday through Sunday.
    Weekly,
    /// Calendar month.
    Monthly,
    /// Two-month blocks starting in January (Jan-Feb, Mar-Apr, ...).
    BiMonthly,
    /// Calendar quarter.
    Quarterly,
    /// Half-year blocks (Jan-Jun, Jul-Dec).
    SixMonthly,
    /// Calendar year.
    Yearly,
}

impl PeriodKind {
    /// Returns the canonical name as it appears in program metadata.
    pub fn as_str(&self) -> &'static str {
        match self {
            PeriodKind::Daily => "Daily",
            PeriodKind::Weekly => "Weekly",
            PeriodKind::Monthly => "Monthly",
            PeriodKind::BiMonthly => "BiMonthly",
            PeriodKind::Quarterly => "Quarterly",
            PeriodKind::SixMonthly => "SixMonthly",
            PeriodKind::Yearly => "Yearly",
        }
    }
}

impl fmt::Display for PeriodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PeriodKind {
    type Err = String;

    /// Parse a period kind (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "DAILY" => Ok(PeriodKind::Daily),
            "WEEKLY" => Ok(PeriodKind::Weekly),
            "MONTHLY" => Ok(PeriodKind::Monthly),
            "BIMONTHLY" => Ok(PeriodKind::BiMonthly),
            "QUARTERLY" => Ok(PeriodKind::Quarterly),
            "SIXMONTHLY" => Ok(PeriodKind::SixMonthly),
            "YEARLY" => Ok(PeriodKind::Yearly),
            _ => Err(format!("Unknown period kind: {s}")),
        }
    }
}

/// Reference entity describing the temporal business rules for a class of
/// events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    /// Program identifier.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Edit window, in days, after an event is completed. 0 disables the
    /// expiry-days check.
    #[serde(default)]
    pub complete_events_expiry_days: u32,
    /// Reporting-period policy. Absent disables the period-type check.
    #[serde(default)]
    pub expiry_period_type: Option<PeriodKind>,
    /// Grace window, in days, past the reporting-period end. 0 disables the
    /// period-type check.
    #[serde(default)]
    pub expiry_days: u32,
}

impl Program {
    /// Create a program with all expiry rules disabled.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            complete_events_expiry_days: 0,
            expiry_period_type: None,
            expiry_days: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_kind_from_str() {
        assert_eq!("Monthly".parse::<PeriodKind>().unwrap(), PeriodKind::Monthly);
        assert_eq!(
            "SIXMONTHLY".parse::<PeriodKind>().unwrap(),
            PeriodKind::SixMonthly
        );
        assert_eq!(
            "bimonthly".parse::<PeriodKind>().unwrap(),
            PeriodKind::BiMonthly
        );
        assert!("Fortnightly".parse::<PeriodKind>().is_err());
    }

    #[test]
    fn test_program_defaults_disable_expiry() {
        let program: Program = serde_json::from_str(r#"{"id": "prog1"}"#).unwrap();
        assert_eq!(program.complete_events_expiry_days, 0);
        assert_eq!(program.expiry_days, 0);
        assert!(program.expiry_period_type.is_none());
    }
}
