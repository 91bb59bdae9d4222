//! Structural pre-checks that run before any rule hook.

use tracker_model::{Batch, ErrorCode, ErrorReport};

use crate::context::ValidationContext;
use crate::hooks::ValidationHook;
use crate::reporter::{ValidationReporter, new_report};

/// Checks that every event carries the references later hooks rely on:
/// a non-blank event id and a resolvable program.
pub struct PreCheckHook;

impl ValidationHook for PreCheckHook {
    fn rank(&self) -> i32 {
        300
    }

    fn name(&self) -> &'static str {
        "pre_check"
    }

    fn validate(&self, batch: &Batch, ctx: &ValidationContext<'_>) -> Vec<ErrorReport> {
        let mut reporter = ValidationReporter::new();

        for (index, event) in batch.events.iter().enumerate() {
            let mut record = reporter.begin_record(index);

            if event.id.trim().is_empty() {
                record.add_error(new_report(ErrorCode::E1123).with_arg("event"));
            }

            if event.program.trim().is_empty() {
                record.add_error(new_report(ErrorCode::E1123).with_arg("program"));
            } else if ctx.preheat().program(&event.program).is_none() {
                record.add_error(new_report(ErrorCode::E1010).with_arg(&event.program));
            }
        }

        reporter.into_reports()
    }
}
