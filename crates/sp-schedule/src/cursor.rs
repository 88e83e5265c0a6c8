//! `DayCursor` — the planner's position in the calendar.
//!
//! The cursor is a small `Copy` value.  Every step produces a new cursor
//! instead of mutating the old one, so the walk in [`generate_plan`] reads as
//! a fold over `(date, hours_left)` pairs.
//!
//! [`generate_plan`]: crate::generate_plan

use chrono::{Days, NaiveDate};

use crate::{HOURS_EPSILON, ScheduleError, ScheduleResult};

/// A calendar day and the study hours still unallocated in it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DayCursor {
    pub date: NaiveDate,
    pub hours_left: f64,
}

impl DayCursor {
    /// A fresh day with the full budget available.
    pub fn start(date: NaiveDate, daily_hours: f64) -> Self {
        Self { date, hours_left: daily_hours }
    }

    /// `true` once the day has no usable time left.
    ///
    /// Remainders below [`HOURS_EPSILON`] count as zero so float dust from
    /// fractional inputs never produces a near-empty session.
    #[inline]
    pub fn is_exhausted(self) -> bool {
        self.hours_left <= HOURS_EPSILON
    }

    /// Carve up to `wanted` hours out of this day.
    ///
    /// Returns the slice actually granted (`min(wanted, hours_left)`) and the
    /// cursor for what remains of the same day.
    #[inline]
    pub fn take(self, wanted: f64) -> (f64, DayCursor) {
        let slice = wanted.min(self.hours_left);
        (slice, DayCursor { hours_left: self.hours_left - slice, ..self })
    }

    /// The following calendar day with a full budget.
    pub fn next_day(self, daily_hours: f64) -> ScheduleResult<DayCursor> {
        let date = self
            .date
            .checked_add_days(Days::new(1))
            .ok_or(ScheduleError::DateOverflow(self.date))?;
        Ok(DayCursor::start(date, daily_hours))
    }
}
