//! `sp-schedule` — turn a catalog snapshot into a day-by-day study plan.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`planner`]   | `generate_plan`, `generate_plan_today`, `HOURS_EPSILON`   |
//! | [`cursor`]    | `DayCursor` (date, hours left in that day)                |
//! | [`session`]   | `StudySession`                                            |
//! | [`plan`]      | `StudyPlan`, `DayTotal` (summaries over a generated plan) |
//! | [`error`]     | `ScheduleError`, `ScheduleResult<T>`                      |
//!
//! # Algorithm (summary)
//!
//! ```text
//! items   = every (subject, chapter) pair, subjects then chapters in order
//! sort    items by (exam_date asc, missing date first; priority desc), stable
//! cursor  = (start date, daily_hours)
//! for each item: carve min(left in chapter, left in day) slices, moving the
//!                cursor to the next calendar day whenever the day runs dry
//! ```
//!
//! Each call is a full recomputation; plans are never patched incrementally.

pub mod cursor;
pub mod error;
pub mod plan;
pub mod planner;
pub mod session;

#[cfg(test)]
mod tests;

pub use cursor::DayCursor;
pub use error::{ScheduleError, ScheduleResult};
pub use plan::{DayTotal, StudyPlan};
pub use planner::{HOURS_EPSILON, generate_plan, generate_plan_today};
pub use session::StudySession;
