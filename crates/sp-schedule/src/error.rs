use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("invalid daily budget {0}: must be a finite number of hours > 0")]
    InvalidBudget(f64),

    #[error("calendar overflow advancing past {0}")]
    DateOverflow(NaiveDate),
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
