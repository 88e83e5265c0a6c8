//! Plan generation.
//!
//! # Ordering
//!
//! Chapters are scheduled most-urgent first:
//!
//! 1. earlier exam date first; a subject with no exam date sorts ahead of
//!    every dated subject,
//! 2. then higher priority first,
//! 3. then catalog order (subjects in catalog order, chapters in insertion
//!    order within each subject).  The sort is stable, so this tie-break
//!    comes for free.
//!
//! # Packing
//!
//! The walk is greedy and hour-tight: a day is filled completely before the
//! cursor moves on, and a chapter may spill over any number of days.  Since
//! the cursor only ever moves forward, sessions come out in date order.

use std::cmp::Ordering;

use chrono::{Local, NaiveDate};
use tracing::debug;

use sp_catalog::{Chapter, Subject};
pub use sp_core::HOURS_EPSILON;

use crate::{DayCursor, ScheduleError, ScheduleResult, StudySession};

// ── Flattened chapter record ──────────────────────────────────────────────────

/// One chapter annotated with its parent subject.
#[derive(Clone, Copy)]
struct PlanItem<'a> {
    subject: &'a Subject,
    chapter: &'a Chapter,
}

impl PlanItem<'_> {
    fn urgency(&self, other: &Self) -> Ordering {
        self.subject
            .exam_date
            .cmp(&other.subject.exam_date)
            .then_with(|| other.chapter.priority.cmp(&self.chapter.priority))
    }
}

fn flatten(subjects: &[Subject]) -> Vec<PlanItem<'_>> {
    subjects
        .iter()
        .flat_map(|subject| {
            subject
                .chapters()
                .iter()
                .map(move |chapter| PlanItem { subject, chapter })
        })
        .collect()
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Build a study plan starting on `start`.
///
/// Returns an empty plan when there are no chapters.  Fails fast with
/// [`ScheduleError::InvalidBudget`] unless `daily_hours` is finite and
/// greater than [`HOURS_EPSILON`].
pub fn generate_plan(
    subjects: &[Subject],
    daily_hours: f64,
    start: NaiveDate,
) -> ScheduleResult<Vec<StudySession>> {
    if !daily_hours.is_finite() || daily_hours <= HOURS_EPSILON {
        return Err(ScheduleError::InvalidBudget(daily_hours));
    }

    let mut items = flatten(subjects);
    items.sort_by(|a, b| a.urgency(b));

    let mut sessions = Vec::new();
    let mut cursor = DayCursor::start(start, daily_hours);

    for PlanItem { subject, chapter } in items {
        let mut left = chapter.estimated_hours;
        while left > HOURS_EPSILON {
            if cursor.is_exhausted() {
                cursor = cursor.next_day(daily_hours)?;
            }
            let (slice, rest) = cursor.take(left);
            sessions.push(StudySession::new(subject, chapter, cursor.date, slice));
            left -= slice;
            cursor = rest;
        }
    }

    debug!(
        subjects = subjects.len(),
        sessions = sessions.len(),
        %start,
        last = %cursor.date,
        daily_hours,
        "study plan generated"
    );
    Ok(sessions)
}

/// [`generate_plan`] starting today (local time).
pub fn generate_plan_today(subjects: &[Subject], daily_hours: f64) -> ScheduleResult<Vec<StudySession>> {
    generate_plan(subjects, daily_hours, Local::now().date_naive())
}
