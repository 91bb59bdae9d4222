//! Internal faults isolated per record.
//!
//! A fault is a contract violation discovered mid-check, e.g. an unparsable
//! date reaching a boundary comparison. Faults never abort the batch: the
//! hook converts them into `E9999` reports for the offending record and
//! continues with the next one.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationFault {
    #[error("{field} `{value}` is not a parsable date")]
    UnparsableDate { field: &'static str, value: String },
}
