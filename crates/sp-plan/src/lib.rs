//! `sp-plan` — runs one staffing plan end to end.
//!
//! # Pipeline
//!
//! ```text
//! PlanBuilder::build:
//!   validate config → period grid + shift table → resolve run seed
//! Planner::run:
//!   ① Fit      — least-squares duration polynomial from samples
//!                (skipped when a model is supplied directly)
//!   ② Demand   — one Monte Carlo trial per period
//!   ③ Coverage — minimum-cost integer assignment of shift starts
//!   ④ Project  — period × shift staffing table with totals
//! ```
//!
//! Every stage reports to a [`PlanObserver`].  [`WriterObserver`] forwards
//! the finished plan to any `sp_output::OutputWriter`.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                            |
//! |------------|---------------------------------------------------|
//! | `parallel` | Simulates periods on Rayon's thread pool.         |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use sp_plan::{NoopObserver, PlanBuilder};
//!
//! let planner = PlanBuilder::new(config, call_volumes)
//!     .samples(samples)
//!     .build()?;
//! let outcome = planner.run(&mut NoopObserver)?;
//! println!("{}", outcome.plan);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod planner;


pub use builder::{DurationSource, PlanBuilder};
pub use error::{PlanError, PlanResult};
pub use observer::{NoopObserver, PlanObserver, WriterObserver};
pub use planner::{PlanOutcome, Planner};
