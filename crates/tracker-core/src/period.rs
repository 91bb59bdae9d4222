//! Reporting-period boundary derivation.
//!
//! A `PeriodKind` is a calendar partitioning policy: every date belongs to
//! exactly one period of each kind, and the boundary rules differ per kind
//! (ISO weeks run Monday through Sunday, bi-monthly blocks are anchored to
//! January, and so on). Boundary math lives here so rule code never
//! hand-rolls it per call site.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use tracker_model::PeriodKind;

/// An inclusive calendar interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Period {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Derive the period of the given kind that contains the anchor date.
pub fn period_containing(kind: PeriodKind, anchor: NaiveDate) -> Period {
    match kind {
        PeriodKind::Daily => Period {
            start: anchor,
            end: anchor,
        },
        PeriodKind::Weekly => {
            let week = anchor.week(Weekday::Mon);
            Period {
                start: week.first_day(),
                end: week.last_day(),
            }
        }
        PeriodKind::Monthly => month_aligned(anchor, 1),
        PeriodKind::BiMonthly => month_aligned(anchor, 2),
        PeriodKind::Quarterly => month_aligned(anchor, 3),
        PeriodKind::SixMonthly => month_aligned(anchor, 6),
        PeriodKind::Yearly => Period {
            start: first_of(anchor.year(), 1),
            end: first_of(anchor.year() + 1, 1) - Days::new(1),
        },
    }
}

/// Period spanning `span` whole months, aligned so January starts a block.
/// `span` must divide 12.
fn month_aligned(anchor: NaiveDate, span: u32) -> Period {
    let month0 = anchor.month0() / span * span;
    let start = first_of(anchor.year(), month0 + 1);
    let next_start = if month0 + span >= 12 {
        first_of(anchor.year() + 1, 1)
    } else {
        first_of(anchor.year(), month0 + span + 1)
    };
    Period {
        start,
        end: next_start - Days::new(1),
    }
}

fn first_of(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).expect("first day of a month is a valid date")
}
