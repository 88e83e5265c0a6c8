//! `sp-output` — plan writers.
//!
//! | Writer            | Files created                                |
//! |-------------------|----------------------------------------------|
//! | [`CsvPlanWriter`] | `study_sessions.csv`, `daily_totals.csv`     |
//! | [`JsonPlanWriter`]| `study_plan.json`                            |
//!
//! Both implement [`PlanWriter`]; [`write_plan`] converts a
//! `sp_schedule::StudyPlan` into rows and drives any writer.
//!
//! # Usage
//!
//! ```rust,ignore
//! use sp_output::{CsvPlanWriter, write_plan};
//!
//! let mut writer = CsvPlanWriter::new(Path::new("./output"))?;
//! write_plan(&mut writer, &plan)?;
//! ```

pub mod csv;
pub mod error;
pub mod json;
pub mod row;
pub mod writer;


pub use csv::CsvPlanWriter;
pub use error::{OutputError, OutputResult};
pub use json::JsonPlanWriter;
pub use row::{DayTotalRow, SessionRow};
pub use writer::{PlanWriter, write_plan};
