//! `StudyPlan` — a generated plan plus read-only summaries over it.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::warn;

use sp_catalog::Subject;
use sp_core::{ChapterId, PlannerConfig};

use crate::{ScheduleResult, StudySession, generate_plan};

/// Hours and session count for one calendar day of a plan.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DayTotal {
    pub date: NaiveDate,
    pub hours: f64,
    pub sessions: usize,
}

impl DayTotal {
    pub fn date_iso(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// The output of one planning run.
#[derive(Clone, Debug)]
pub struct StudyPlan {
    start: NaiveDate,
    daily_hours: f64,
    sessions: Vec<StudySession>,
}

impl StudyPlan {
    /// Generate a plan for `subjects` using the budget and start date in
    /// `config`.
    ///
    /// Sessions that land on or after their subject's exam date are logged at
    /// `warn` level.  They are reported, not moved.
    pub fn generate(subjects: &[Subject], config: &PlannerConfig) -> ScheduleResult<Self> {
        let start = config.start_or_today();
        let sessions = generate_plan(subjects, config.daily_hours, start)?;
        let plan = Self { start, daily_hours: config.daily_hours, sessions };

        let late = plan.late_sessions(subjects);
        if let Some(first) = late.first() {
            warn!(
                late_sessions = late.len(),
                subject = %first.subject_name,
                date = %first.date,
                "plan runs into exam dates"
            );
        }
        Ok(plan)
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn daily_hours(&self) -> f64 {
        self.daily_hours
    }

    /// Sessions in generation order, which is also date order.
    pub fn sessions(&self) -> &[StudySession] {
        &self.sessions
    }

    pub fn into_sessions(self) -> Vec<StudySession> {
        self.sessions
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn total_hours(&self) -> f64 {
        self.sessions.iter().map(|s| s.hours).sum()
    }

    /// Date of the final session, `None` for an empty plan.
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.sessions.last().map(|s| s.date)
    }

    /// Number of distinct days with at least one session.
    pub fn day_count(&self) -> usize {
        self.hours_by_date().len()
    }

    /// Per-day totals in date order.
    pub fn hours_by_date(&self) -> Vec<DayTotal> {
        let mut by_date: BTreeMap<NaiveDate, DayTotal> = BTreeMap::new();
        for s in &self.sessions {
            let day = by_date.entry(s.date).or_insert(DayTotal {
                date: s.date,
                hours: 0.0,
                sessions: 0,
            });
            day.hours += s.hours;
            day.sessions += 1;
        }
        by_date.into_values().collect()
    }

    /// Sessions belonging to one chapter, in order.
    pub fn sessions_for_chapter(&self, chapter: ChapterId) -> impl Iterator<Item = &StudySession> {
        self.sessions.iter().filter(move |s| s.chapter_id == chapter)
    }

    /// Total hours scheduled for one chapter.
    pub fn hours_for_chapter(&self, chapter: ChapterId) -> f64 {
        self.sessions_for_chapter(chapter).map(|s| s.hours).sum()
    }

    /// Sessions dated on or after their subject's exam.
    ///
    /// Subjects without an exam date never produce late sessions.  Sessions
    /// whose subject is missing from `subjects` are skipped.
    pub fn late_sessions(&self, subjects: &[Subject]) -> Vec<&StudySession> {
        self.sessions
            .iter()
            .filter(|s| {
                subjects
                    .iter()
                    .find(|subj| subj.id == s.subject_id)
                    .and_then(|subj| subj.exam_date)
                    .is_some_and(|exam| s.date >= exam)
            })
            .collect()
    }
}
