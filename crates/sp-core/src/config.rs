//! Planning-run configuration.

use chrono::{Local, NaiveDate};

use crate::{PlannerError, PlannerResult};

/// Hour amounts at or below this are treated as zero.
///
/// Floating-point dust: with fractional inputs the last slice of a chapter can
/// leave e.g. `2.2e-16` hours behind, which must neither become its own
/// session nor push the next chapter onto a new day.  Chapter estimates and
/// daily budgets are held to the same threshold.
pub const HOURS_EPSILON: f64 = 1e-9;

/// Top-level configuration for one planning run.
///
/// Typically built with defaults or loaded from a JSON file by the
/// application crate and passed to the scheduler.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlannerConfig {
    /// Study hours available per calendar day.  Must be finite and greater
    /// than [`HOURS_EPSILON`].
    pub daily_hours: f64,

    /// Seed for catalog color assignment.  The same seed always produces the
    /// same colors.
    pub seed: u64,

    /// First day of the plan.  `None` means "today" in local time, resolved
    /// when the plan is generated.
    pub start_date: Option<NaiveDate>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            daily_hours: 2.0,
            seed: 42,
            start_date: None,
        }
    }
}

impl PlannerConfig {
    /// Reject budgets the scheduler can't make progress with.
    pub fn validate(&self) -> PlannerResult<()> {
        if !self.daily_hours.is_finite() || self.daily_hours <= HOURS_EPSILON {
            return Err(PlannerError::Config(format!(
                "daily_hours must be a finite number > {HOURS_EPSILON}, got {}",
                self.daily_hours
            )));
        }
        Ok(())
    }

    /// The configured start date, or today's local date.
    pub fn start_or_today(&self) -> NaiveDate {
        self.start_date
            .unwrap_or_else(|| Local::now().date_naive())
    }
}
