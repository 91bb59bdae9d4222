//! Validation hooks: independently-ranked units, each implementing one
//! family of rules over a whole batch.

mod date;
mod precheck;

pub use date::EventDateHook;
pub use precheck::PreCheckHook;

use tracker_model::{Batch, ErrorReport};

use crate::context::ValidationContext;

/// One family of validation rules.
///
/// Hooks only read the batch and produce reports; they never mutate records.
/// A hook must visit records in batch order and must not stop on the first
/// violation.
pub trait ValidationHook: Send + Sync {
    /// Ascending dispatch rank; lower runs first. Ties keep registration
    /// order.
    fn rank(&self) -> i32;

    /// Human-readable name for logging.
    fn name(&self) -> &'static str;

    /// Run this rule family over the batch.
    fn validate(&self, batch: &Batch, ctx: &ValidationContext<'_>) -> Vec<ErrorReport>;
}
