//! `sp-core` — foundational types for the study planner.
//!
//! This crate is a dependency of every other `sp-*` crate.  It has no `sp-*`
//! dependencies and keeps external ones small (`chrono`, `rand`, `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `SubjectId`, `ChapterId`                              |
//! | [`color`]       | `ColorTag` palette                                    |
//! | [`priority`]    | `Priority` (1–5, higher = more urgent)                |
//! | [`rng`]         | `PlannerRng` (seedable color picker)                  |
//! | [`config`]      | `PlannerConfig`, `HOURS_EPSILON`                      |
//! | [`error`]       | `PlannerError`, `PlannerResult`                       |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod color;
pub mod config;
pub mod error;
pub mod ids;
pub mod priority;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use color::ColorTag;
pub use config::{HOURS_EPSILON, PlannerConfig};
pub use error::{PlannerError, PlannerResult};
pub use ids::{ChapterId, SubjectId};
pub use priority::Priority;
pub use rng::PlannerRng;
