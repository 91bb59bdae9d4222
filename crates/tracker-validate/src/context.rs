//! Per-invocation validation context.

use chrono::{NaiveDateTime, Utc};
use tracker_model::User;

use crate::preheat::Preheat;

/// Everything a hook reads besides the batch itself: the preheat and the
/// validation instant.
///
/// "Now" is sampled once when the context is built and shared by every hook
/// and every check in the invocation, so checks anchored to wall-clock time
/// cannot disagree within a single pass.
pub struct ValidationContext<'a> {
    preheat: &'a dyn Preheat,
    now: NaiveDateTime,
}

impl<'a> ValidationContext<'a> {
    /// Build a context with `now` sampled from the wall clock.
    pub fn new(preheat: &'a dyn Preheat) -> Self {
        Self::at(preheat, Utc::now().naive_utc())
    }

    /// Build a context with a fixed validation instant.
    pub fn at(preheat: &'a dyn Preheat, now: NaiveDateTime) -> Self {
        Self { preheat, now }
    }

    pub fn preheat(&self) -> &dyn Preheat {
        self.preheat
    }

    /// The single sampled validation instant.
    pub fn now(&self) -> NaiveDateTime {
        self.now
    }

    pub fn acting_user(&self) -> &User {
        self.preheat.acting_user()
    }
}
