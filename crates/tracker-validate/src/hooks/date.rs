//! Temporal and lifecycle rules for event dates.
//!
//! Per-event rule order:
//! 1. An ACTIVE event without an event date gets `E1031` and no further
//!    date checks: there is nothing meaningful to date-validate.
//! 2. Without a resolvable program, program-specific policy cannot apply;
//!    the event is skipped (the pre-check hook reports the reference).
//! 3. Format checks over the four client-supplied date fields, each
//!    independent of the others.
//! 4. The complete-events expiry window, unless the acting user may edit
//!    expired records.
//! 5. The reporting-period expiry window, when the program configures one.
//!
//! Checks are additive: one event can collect several violations in one
//! pass. A contract violation inside a check (an unparsable date reaching a
//! boundary comparison) becomes an `E9999` report for that record only.

use chrono::{NaiveDateTime, NaiveTime};
use tracing::warn;

use tracker_core::{add_days, is_valid_date_string, parse_date, period_containing};
use tracker_model::{
    Authority, Batch, ErrorCode, ErrorReport, Event, EventStatus, PersistedEvent, Program, User,
};

use crate::context::ValidationContext;
use crate::fault::ValidationFault;
use crate::hooks::ValidationHook;
use crate::reporter::{RecordReporter, ValidationReporter, new_report};

/// Date-rule family, dispatched after the structural pre-checks.
pub struct EventDateHook;

impl ValidationHook for EventDateHook {
    fn rank(&self) -> i32 {
        302
    }

    fn name(&self) -> &'static str {
        "event_date"
    }

    fn validate(&self, batch: &Batch, ctx: &ValidationContext<'_>) -> Vec<ErrorReport> {
        let mut reporter = ValidationReporter::new();
        let user = ctx.acting_user();
        let now = ctx.now();

        for (index, event) in batch.events.iter().enumerate() {
            let mut record = reporter.begin_record(index);
            let persisted = ctx.preheat().persisted_event(&event.id);

            if event.status == EventStatus::Active && event.event_date.is_none() {
                record.add_error(new_report(ErrorCode::E1031).with_arg(&event.id));
                continue;
            }

            let Some(program) = ctx.preheat().program(&event.program) else {
                continue;
            };

            check_date_format(&mut record, event);

            if let Err(fault) = check_expiry_days(&mut record, event, program, persisted, user, now)
            {
                isolate_fault(&mut record, event, &fault);
            }

            if let Err(fault) = check_period_type(&mut record, event, program, persisted, now) {
                isolate_fault(&mut record, event, &fault);
            }
        }

        reporter.into_reports()
    }
}

/// Surface a per-record fault as an internal-error report and keep going.
fn isolate_fault(record: &mut RecordReporter<'_>, event: &Event, fault: &ValidationFault) {
    warn!(event = %event.id, %fault, "isolated validation fault");
    record.add_error(new_report(ErrorCode::E9999).with_arg(fault.to_string()));
}

/// Each present date field is checked on its own; no short-circuit between
/// them.
fn check_date_format(record: &mut RecordReporter<'_>, event: &Event) {
    if let Some(value) = &event.due_date
        && !is_valid_date_string(value)
    {
        record.add_error(new_report(ErrorCode::E1051).with_arg(value));
    }

    if let Some(value) = &event.event_date
        && !is_valid_date_string(value)
    {
        record.add_error(new_report(ErrorCode::E1052).with_arg(value));
    }

    if let Some(value) = &event.created_at_client
        && !is_valid_date_string(value)
    {
        record.add_error(new_report(ErrorCode::E1053).with_arg(value));
    }

    if let Some(value) = &event.last_updated_at_client
        && !is_valid_date_string(value)
    {
        record.add_error(new_report(ErrorCode::E1054).with_arg(value));
    }
}

/// Complete-events expiry window.
///
/// The reference date prefers the stored completed date; a completed event
/// submitted fresh falls back to its own completed-date string.
fn check_expiry_days(
    record: &mut RecordReporter<'_>,
    event: &Event,
    program: &Program,
    persisted: Option<&PersistedEvent>,
    user: &User,
    now: NaiveDateTime,
) -> Result<(), ValidationFault> {
    let applies = (program.complete_events_expiry_days > 0
        && event.status == EventStatus::Completed)
        || persisted.is_some_and(|stored| stored.status == EventStatus::Completed);
    if !applies {
        return Ok(());
    }

    // Authorization override: the whole check is skipped.
    if user.has_authority(Authority::EditExpired) {
        return Ok(());
    }

    let reference = match persisted {
        Some(stored) => stored.completed_date,
        None => match event.completed_date.as_deref() {
            Some(raw) => Some(parse_date(raw).map_err(|_| ValidationFault::UnparsableDate {
                field: "completed date",
                value: raw.to_string(),
            })?),
            None => None,
        },
    };

    let Some(reference) = reference else {
        record.add_error(new_report(ErrorCode::E1042).with_arg(&event.id));
        return Ok(());
    };

    let boundary = add_days(reference, program.complete_events_expiry_days);
    if now > boundary.and_time(NaiveTime::MIN) {
        record.add_error(new_report(ErrorCode::E1043).with_arg(&event.id));
    }

    Ok(())
}

/// Reporting-period expiry window, only for programs that configure both a
/// period type and a non-zero grace window.
fn check_period_type(
    record: &mut RecordReporter<'_>,
    event: &Event,
    program: &Program,
    persisted: Option<&PersistedEvent>,
    now: NaiveDateTime,
) -> Result<(), ValidationFault> {
    let Some(kind) = program.expiry_period_type else {
        return Ok(());
    };
    if program.expiry_days == 0 {
        return Ok(());
    }

    match persisted {
        Some(stored) => {
            let Some(execution) = stored.execution_date else {
                record.add_error(new_report(ErrorCode::E1044).with_arg(&event.id));
                return Ok(());
            };
            let period = period_containing(kind, execution);
            let boundary = add_days(period.end, program.expiry_days);
            if now > boundary.and_time(NaiveTime::MIN) {
                record.add_error(new_report(ErrorCode::E1045).with_arg(&program.id));
            }
        }
        None => {
            let Some(raw) = event.event_date.as_deref().or(event.due_date.as_deref()) else {
                record.add_error(new_report(ErrorCode::E1046).with_arg(&event.id));
                return Ok(());
            };
            let reference = parse_date(raw).map_err(|_| ValidationFault::UnparsableDate {
                field: "reference date",
                value: raw.to_string(),
            })?;
            let period = period_containing(kind, now.date());
            if reference < period.start {
                record.add_error(new_report(ErrorCode::E1047).with_arg(&event.id));
            }
        }
    }

    Ok(())
}
