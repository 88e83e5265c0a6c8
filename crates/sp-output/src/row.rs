//! Plain data row types written by output backends.

use serde::Serialize;

use sp_schedule::{DayTotal, StudySession};

/// One study session, flattened for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionRow {
    /// ISO-8601 date, e.g. `2024-06-10`.
    pub date:    String,
    pub subject: String,
    pub chapter: String,
    pub hours:   f64,
    /// Palette identifier, e.g. `teal`.
    pub color:   &'static str,
}

impl From<&StudySession> for SessionRow {
    fn from(s: &StudySession) -> Self {
        Self {
            date:    s.date_iso(),
            subject: s.subject_name.clone(),
            chapter: s.chapter_name.clone(),
            hours:   s.hours,
            color:   s.color.as_str(),
        }
    }
}

/// Total study load for one day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayTotalRow {
    pub date:     String,
    pub hours:    f64,
    pub sessions: usize,
}

impl From<&DayTotal> for DayTotalRow {
    fn from(d: &DayTotal) -> Self {
        Self {
            date:     d.date_iso(),
            hours:    d.hours,
            sessions: d.sessions,
        }
    }
}
