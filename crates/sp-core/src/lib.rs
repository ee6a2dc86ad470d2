//! `sp-core` — foundational types for the `staffplan` workforce planner.
//!
//! This crate is a dependency of every other `sp-*` crate.  It has no `sp-*`
//! dependencies and minimal external ones (`rand`, `thiserror`, `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`ids`]     | `PeriodId`, `ShiftId`, `VarTag`                           |
//! | [`time`]    | `ClockTime`, `Period`                                     |
//! | [`shift`]   | `ShiftType`                                               |
//! | [`rng`]     | `PeriodRng` (per-period), `SimRng` (run-level)            |
//! | [`config`]  | `PlanConfig`, `ShiftSpec`                                 |
//! | [`error`]   | `ConfigError`, `DataError`                                |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod shift;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{PlanConfig, ShiftSpec, MAX_POLY_DEGREE};
pub use error::{ConfigError, ConfigResult, DataError, DataResult};
pub use ids::{PeriodId, ShiftId, VarTag};
pub use rng::{PeriodRng, SimRng};
pub use shift::{whole_minutes, ShiftType};
pub use time::{ClockTime, Period, MINUTES_PER_DAY};
