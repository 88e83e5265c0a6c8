//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `study_sessions.csv`
//! - `daily_totals.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::PlanWriter;
use crate::{DayTotalRow, OutputResult, SessionRow};

/// Writes a plan to two CSV files.
pub struct CsvPlanWriter {
    sessions: Writer<File>,
    days:     Writer<File>,
    finished: bool,
}

impl CsvPlanWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut sessions = Writer::from_path(dir.join("study_sessions.csv"))?;
        sessions.write_record(["date", "subject", "chapter", "hours", "color"])?;

        let mut days = Writer::from_path(dir.join("daily_totals.csv"))?;
        days.write_record(["date", "hours", "sessions"])?;

        Ok(Self {
            sessions,
            days,
            finished: false,
        })
    }
}

impl PlanWriter for CsvPlanWriter {
    fn write_sessions(&mut self, rows: &[SessionRow]) -> OutputResult<()> {
        for row in rows {
            self.sessions.write_record(&[
                row.date.as_str(),
                row.subject.as_str(),
                row.chapter.as_str(),
                row.hours.to_string().as_str(),
                row.color,
            ])?;
        }
        Ok(())
    }

    fn write_day_totals(&mut self, rows: &[DayTotalRow]) -> OutputResult<()> {
        for row in rows {
            self.days.write_record(&[
                row.date.clone(),
                row.hours.to_string(),
                row.sessions.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.sessions.flush()?;
        self.days.flush()?;
        Ok(())
    }
}
