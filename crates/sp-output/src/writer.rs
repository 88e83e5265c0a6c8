//! The `PlanWriter` trait implemented by all backend writers.

use tracing::debug;

use sp_schedule::StudyPlan;

use crate::{DayTotalRow, OutputResult, SessionRow};

/// Trait implemented by the CSV and JSON writers.
pub trait PlanWriter {
    /// Write a batch of sessions, in plan order.
    fn write_sessions(&mut self, rows: &[SessionRow]) -> OutputResult<()>;

    /// Write per-day totals, in date order.
    fn write_day_totals(&mut self, rows: &[DayTotalRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

/// Write a whole plan through `writer` and finish it.
pub fn write_plan<W: PlanWriter>(writer: &mut W, plan: &StudyPlan) -> OutputResult<()> {
    let sessions: Vec<SessionRow> = plan.sessions().iter().map(SessionRow::from).collect();
    let days: Vec<DayTotalRow> = plan.hours_by_date().iter().map(DayTotalRow::from).collect();

    writer.write_sessions(&sessions)?;
    writer.write_day_totals(&days)?;
    writer.finish()?;

    debug!(sessions = sessions.len(), days = days.len(), "plan written");
    Ok(())
}
