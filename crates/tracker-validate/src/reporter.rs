//! Error accumulation for one hook run.
//!
//! Reports are append-only and never de-duplicated: raising the same code
//! twice for a record signals a broken invariant worth surfacing more than
//! once when the arguments differ.
//!
//! Record association is explicit. `begin_record` returns a handle that
//! freezes the record index; every report added through that handle carries
//! it. There is no hidden "current record" state to get out of sync.

use tracker_model::{ErrorCode, ErrorReport};

/// An error report under construction, not yet tied to a record.
#[derive(Debug, Clone)]
pub struct ReportDraft {
    code: ErrorCode,
    args: Vec<String>,
}

impl ReportDraft {
    /// Append a message argument.
    #[must_use]
    pub fn with_arg(mut self, arg: impl AsRef<str>) -> Self {
        self.args.push(arg.as_ref().to_string());
        self
    }
}

/// Start a report draft for the given code.
pub fn new_report(code: ErrorCode) -> ReportDraft {
    ReportDraft {
        code,
        args: Vec::new(),
    }
}

/// Accumulates coded reports for one hook run over one batch.
#[derive(Debug, Default)]
pub struct ValidationReporter {
    reports: Vec<ErrorReport>,
}

impl ValidationReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a reporting handle for the record at `index`.
    ///
    /// The index is frozen at this point; all errors added through the
    /// returned handle share it.
    pub fn begin_record(&mut self, index: usize) -> RecordReporter<'_> {
        RecordReporter {
            index,
            reports: &mut self.reports,
        }
    }

    /// Number of reports accumulated so far.
    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    /// Consume the reporter, yielding reports in emission order.
    pub fn into_reports(self) -> Vec<ErrorReport> {
        self.reports
    }
}

/// Reporting handle scoped to a single record.
#[derive(Debug)]
pub struct RecordReporter<'a> {
    index: usize,
    reports: &'a mut Vec<ErrorReport>,
}

impl RecordReporter<'_> {
    /// The frozen record index this handle reports against.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Stamp the draft with this record's index and append it.
    pub fn add_error(&mut self, draft: ReportDraft) {
        self.reports.push(ErrorReport {
            index: self.index,
            code: draft.code,
            args: draft.args,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reports_carry_frozen_index() {
        let mut reporter = ValidationReporter::new();
        let mut record = reporter.begin_record(4);
        record.add_error(new_report(ErrorCode::E1051).with_arg("bad-due"));
        record.add_error(new_report(ErrorCode::E1052).with_arg("bad-event"));

        let reports = reporter.into_reports();
        assert_eq!(reports.len(), 2);
        assert!(reports.iter().all(|report| report.index == 4));
    }

    #[test]
    fn test_duplicate_codes_are_kept() {
        let mut reporter = ValidationReporter::new();
        let mut record = reporter.begin_record(0);
        record.add_error(new_report(ErrorCode::E1123).with_arg("event"));
        record.add_error(new_report(ErrorCode::E1123).with_arg("program"));

        let reports = reporter.into_reports();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].args, vec!["event".to_string()]);
        assert_eq!(reports[1].args, vec!["program".to_string()]);
    }

    #[test]
    fn test_emission_order_is_preserved() {
        let mut reporter = ValidationReporter::new();
        reporter
            .begin_record(1)
            .add_error(new_report(ErrorCode::E1031));
        reporter
            .begin_record(0)
            .add_error(new_report(ErrorCode::E1042));

        let reports = reporter.into_reports();
        assert_eq!(reports[0].index, 1);
        assert_eq!(reports[1].index, 0);
    }
}
