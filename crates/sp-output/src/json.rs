//! JSON output backend.
//!
//! Buffers rows and writes a single `study_plan.json` on [`PlanWriter::finish`]:
//!
//! ```json
//! { "sessions": [ { "date": "2024-06-01", "subject": "Math", ... } ],
//!   "days":     [ { "date": "2024-06-01", "hours": 2.0, "sessions": 1 } ] }
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::writer::PlanWriter;
use crate::{DayTotalRow, OutputResult, SessionRow};

#[derive(Serialize)]
struct PlanDocument<'a> {
    sessions: &'a [SessionRow],
    days:     &'a [DayTotalRow],
}

/// Writes a plan as one pretty-printed JSON document.
pub struct JsonPlanWriter {
    path:     PathBuf,
    sessions: Vec<SessionRow>,
    days:     Vec<DayTotalRow>,
    finished: bool,
}

impl JsonPlanWriter {
    /// Target `dir/study_plan.json`.  The file is created on `finish`.
    pub fn new(dir: &Path) -> Self {
        Self {
            path:     dir.join("study_plan.json"),
            sessions: Vec::new(),
            days:     Vec::new(),
            finished: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PlanWriter for JsonPlanWriter {
    fn write_sessions(&mut self, rows: &[SessionRow]) -> OutputResult<()> {
        self.sessions.extend_from_slice(rows);
        Ok(())
    }

    fn write_day_totals(&mut self, rows: &[DayTotalRow]) -> OutputResult<()> {
        self.days.extend_from_slice(rows);
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;

        let mut out = BufWriter::new(File::create(&self.path)?);
        let doc = PlanDocument { sessions: &self.sessions, days: &self.days };
        serde_json::to_writer_pretty(&mut out, &doc)?;
        out.flush()?;
        Ok(())
    }
}
