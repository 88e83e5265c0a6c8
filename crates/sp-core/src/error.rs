//! Base error type.
//!
//! Sub-crates define their own error enums and wrap this one where they
//! consume a `PlannerConfig`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `sp-core`.
pub type PlannerResult<T> = Result<T, PlannerError>;
