//! Rule-level tests for the event date hook.

use chrono::{NaiveDate, NaiveDateTime};
use tracker_model::{
    Authority, Batch, ErrorCode, Event, EventStatus, PeriodKind, PersistedEvent, Program, User,
};
use tracker_validate::{EventDateHook, InMemoryPreheat, ValidationContext, ValidationHook};

const PROGRAM_ID: &str = "prog1";

/// Fixed validation instant: 2024-05-15 12:00.
fn fixed_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 15)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

fn plain_program() -> Program {
    Program::new(PROGRAM_ID)
}

fn preheat_with(program: Program) -> InMemoryPreheat {
    InMemoryPreheat::new()
        .with_program(program)
        .with_user(User::new("data-entry"))
}

fn run(batch: &Batch, preheat: &InMemoryPreheat) -> Vec<tracker_model::ErrorReport> {
    let ctx = ValidationContext::at(preheat, fixed_now());
    EventDateHook.validate(batch, &ctx)
}

#[test]
fn active_event_without_event_date_gets_only_e1031() {
    let mut event = Event::new("ev1", PROGRAM_ID, EventStatus::Active);
    // Garbage in other fields must not be reported: E1031 stops the event.
    event.due_date = Some("not-a-date".to_string());
    let batch = Batch::new(vec![event]);

    let reports = run(&batch, &preheat_with(plain_program()));
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].code, ErrorCode::E1031);
    assert_eq!(reports[0].index, 0);
}

#[test]
fn invalid_event_date_string_gets_e1052_with_argument() {
    let mut event = Event::new("ev1", PROGRAM_ID, EventStatus::Completed);
    event.event_date = Some("2021-13-40".to_string());
    let batch = Batch::new(vec![event]);

    let reports = run(&batch, &preheat_with(plain_program()));
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].code, ErrorCode::E1052);
    assert_eq!(reports[0].args, vec!["2021-13-40".to_string()]);
}

#[test]
fn all_four_date_fields_are_checked_independently() {
    let mut event = Event::new("ev1", PROGRAM_ID, EventStatus::Completed);
    event.due_date = Some("bad-due".to_string());
    event.event_date = Some("bad-event".to_string());
    event.created_at_client = Some("bad-created".to_string());
    event.last_updated_at_client = Some("bad-updated".to_string());
    let batch = Batch::new(vec![event]);

    let reports = run(&batch, &preheat_with(plain_program()));
    let codes: Vec<ErrorCode> = reports.iter().map(|report| report.code).collect();
    assert_eq!(
        codes,
        vec![
            ErrorCode::E1051,
            ErrorCode::E1052,
            ErrorCode::E1053,
            ErrorCode::E1054,
        ]
    );
}

#[test]
fn completed_event_past_expiry_window_gets_e1043() {
    let mut program = plain_program();
    program.complete_events_expiry_days = 5;
    let mut event = Event::new("ev1", PROGRAM_ID, EventStatus::Completed);
    // Completed 10 days before the fixed "now"; window is 5 days.
    event.completed_date = Some("2024-05-05".to_string());
    let batch = Batch::new(vec![event]);

    let reports = run(&batch, &preheat_with(program));
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].code, ErrorCode::E1043);
}

#[test]
fn completed_event_inside_expiry_window_passes() {
    let mut program = plain_program();
    program.complete_events_expiry_days = 5;
    let mut event = Event::new("ev1", PROGRAM_ID, EventStatus::Completed);
    event.completed_date = Some("2024-05-14".to_string());
    let batch = Batch::new(vec![event]);

    let reports = run(&batch, &preheat_with(program));
    assert!(reports.is_empty());
}

#[test]
fn edit_expired_authority_skips_the_whole_expiry_check() {
    let mut program = plain_program();
    program.complete_events_expiry_days = 5;
    let mut event = Event::new("ev1", PROGRAM_ID, EventStatus::Completed);
    event.completed_date = Some("2024-05-05".to_string());
    let batch = Batch::new(vec![event]);

    let preheat = InMemoryPreheat::new()
        .with_program(program)
        .with_user(User::new("supervisor").with_authority(Authority::EditExpired));
    let reports = run(&batch, &preheat);
    assert!(!reports.iter().any(|report| report.code == ErrorCode::E1043));
    assert!(!reports.iter().any(|report| report.code == ErrorCode::E1042));
}

#[test]
fn missing_completed_reference_gets_e1042_and_no_boundary_comparison() {
    let mut program = plain_program();
    program.complete_events_expiry_days = 5;
    let event = Event::new("ev1", PROGRAM_ID, EventStatus::Completed);
    let batch = Batch::new(vec![event]);

    // Persisted counterpart is completed but carries no completed date.
    let preheat = preheat_with(program).with_persisted_event(
        "ev1",
        PersistedEvent {
            status: EventStatus::Completed,
            completed_date: None,
            execution_date: None,
        },
    );

    let reports = run(&batch, &preheat);
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].code, ErrorCode::E1042);
}

#[test]
fn persisted_completed_date_is_preferred_over_event_field() {
    let mut program = plain_program();
    program.complete_events_expiry_days = 5;
    let mut event = Event::new("ev1", PROGRAM_ID, EventStatus::Completed);
    // The event claims a fresh completion, but the stored record is old.
    event.completed_date = Some("2024-05-15".to_string());
    let batch = Batch::new(vec![event]);

    let preheat = preheat_with(program).with_persisted_event(
        "ev1",
        PersistedEvent {
            status: EventStatus::Completed,
            completed_date: NaiveDate::from_ymd_opt(2024, 4, 1),
            execution_date: None,
        },
    );

    let reports = run(&batch, &preheat);
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].code, ErrorCode::E1043);
}

#[test]
fn persisted_event_past_period_window_gets_e1045() {
    let mut program = plain_program();
    program.expiry_period_type = Some(PeriodKind::Monthly);
    program.expiry_days = 3;
    let event = Event::new("ev1", PROGRAM_ID, EventStatus::Completed);
    let batch = Batch::new(vec![event]);

    // Execution in January: period end 2024-01-31 + 3 days is long past the
    // fixed "now" in May.
    let preheat = preheat_with(program).with_persisted_event(
        "ev1",
        PersistedEvent {
            status: EventStatus::Active,
            completed_date: None,
            execution_date: NaiveDate::from_ymd_opt(2024, 1, 20),
        },
    );

    let reports = run(&batch, &preheat);
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].code, ErrorCode::E1045);
    assert_eq!(reports[0].args, vec![PROGRAM_ID.to_string()]);
}

#[test]
fn persisted_event_inside_period_window_passes() {
    let mut program = plain_program();
    program.expiry_period_type = Some(PeriodKind::Monthly);
    program.expiry_days = 31;
    let event = Event::new("ev1", PROGRAM_ID, EventStatus::Completed);
    let batch = Batch::new(vec![event]);

    // Period end 2024-04-30 + 31 days is past the fixed "now".
    let preheat = preheat_with(program).with_persisted_event(
        "ev1",
        PersistedEvent {
            status: EventStatus::Active,
            completed_date: None,
            execution_date: NaiveDate::from_ymd_opt(2024, 4, 15),
        },
    );

    let reports = run(&batch, &preheat);
    assert!(reports.is_empty());
}

#[test]
fn persisted_event_without_execution_date_gets_e1044() {
    let mut program = plain_program();
    program.expiry_period_type = Some(PeriodKind::Monthly);
    program.expiry_days = 3;
    let event = Event::new("ev1", PROGRAM_ID, EventStatus::Completed);
    let batch = Batch::new(vec![event]);

    let preheat = preheat_with(program).with_persisted_event(
        "ev1",
        PersistedEvent {
            status: EventStatus::Active,
            completed_date: None,
            execution_date: None,
        },
    );

    let reports = run(&batch, &preheat);
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].code, ErrorCode::E1044);
}

#[test]
fn new_event_before_current_period_start_gets_e1047() {
    let mut program = plain_program();
    program.expiry_period_type = Some(PeriodKind::Monthly);
    program.expiry_days = 3;
    let mut event = Event::new("ev1", PROGRAM_ID, EventStatus::Active);
    // Current monthly period starts 2024-05-01.
    event.event_date = Some("2024-03-10".to_string());
    let batch = Batch::new(vec![event]);

    let reports = run(&batch, &preheat_with(program));
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].code, ErrorCode::E1047);
}

#[test]
fn new_event_falls_back_to_due_date_for_period_check() {
    let mut program = plain_program();
    program.expiry_period_type = Some(PeriodKind::Monthly);
    program.expiry_days = 3;
    let mut event = Event::new("ev1", PROGRAM_ID, EventStatus::Schedule);
    event.due_date = Some("2024-02-01".to_string());
    let batch = Batch::new(vec![event]);

    let reports = run(&batch, &preheat_with(program));
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].code, ErrorCode::E1047);
}

#[test]
fn new_event_within_current_period_passes() {
    let mut program = plain_program();
    program.expiry_period_type = Some(PeriodKind::Monthly);
    program.expiry_days = 3;
    let mut event = Event::new("ev1", PROGRAM_ID, EventStatus::Active);
    event.event_date = Some("2024-05-02".to_string());
    let batch = Batch::new(vec![event]);

    let reports = run(&batch, &preheat_with(program));
    assert!(reports.is_empty());
}

#[test]
fn new_event_without_any_reference_date_gets_e1046() {
    let mut program = plain_program();
    program.expiry_period_type = Some(PeriodKind::Monthly);
    program.expiry_days = 3;
    let event = Event::new("ev1", PROGRAM_ID, EventStatus::Completed);
    let batch = Batch::new(vec![event]);

    let reports = run(&batch, &preheat_with(program));
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].code, ErrorCode::E1046);
}

#[test]
fn period_check_is_skipped_when_expiry_days_is_zero() {
    let mut program = plain_program();
    program.expiry_period_type = Some(PeriodKind::Monthly);
    program.expiry_days = 0;
    let mut event = Event::new("ev1", PROGRAM_ID, EventStatus::Active);
    event.event_date = Some("2020-01-01".to_string());
    let batch = Batch::new(vec![event]);

    let reports = run(&batch, &preheat_with(program));
    assert!(reports.is_empty());
}

#[test]
fn unresolved_program_skips_every_date_rule() {
    let mut event = Event::new("ev1", "missing-program", EventStatus::Completed);
    event.event_date = Some("garbage".to_string());
    event.due_date = Some("also-garbage".to_string());
    let batch = Batch::new(vec![event]);

    let reports = run(&batch, &preheat_with(plain_program()));
    assert!(reports.is_empty());
}

#[test]
fn unparsable_completed_date_becomes_isolated_internal_fault() {
    let mut program = plain_program();
    program.complete_events_expiry_days = 5;
    let mut broken = Event::new("ev1", PROGRAM_ID, EventStatus::Completed);
    broken.completed_date = Some("garbage".to_string());
    // A second event proves the batch keeps going after the fault.
    let dateless = Event::new("ev2", PROGRAM_ID, EventStatus::Active);
    let batch = Batch::new(vec![broken, dateless]);

    let reports = run(&batch, &preheat_with(program));
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].code, ErrorCode::E9999);
    assert_eq!(reports[0].index, 0);
    assert_eq!(reports[1].code, ErrorCode::E1031);
    assert_eq!(reports[1].index, 1);
}

#[test]
fn violations_accumulate_on_one_event() {
    let mut program = plain_program();
    program.complete_events_expiry_days = 5;
    let mut event = Event::new("ev1", PROGRAM_ID, EventStatus::Completed);
    event.due_date = Some("bad-due".to_string());
    event.completed_date = Some("2024-05-05".to_string());
    let batch = Batch::new(vec![event]);

    let reports = run(&batch, &preheat_with(program));
    let codes: Vec<ErrorCode> = reports.iter().map(|report| report.code).collect();
    assert_eq!(codes, vec![ErrorCode::E1051, ErrorCode::E1043]);
}
