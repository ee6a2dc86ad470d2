//! `sp-demand` — how many agents does each period need?
//!
//! # Per-period simulation
//!
//! ```text
//! for each period (independently, own RNG):
//!   ① Arrivals  — draw `volume` offsets uniformly in [0, span); sort.
//!   ② Durations — per call, draw u ~ U[0,1) and take |model(u)|.
//!   ③ Staffing  — give each call, in arrival order, to the first agent
//!                 (in creation order) who is rested before the caller's
//!                 patience runs out; otherwise create a new agent.
//!   demand = number of agents created
//! ```
//!
//! One trial per period, not an expectation.  Reproducible from the run seed.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                            |
//! |------------|---------------------------------------------------|
//! | `parallel` | Simulates periods on Rayon's thread pool.         |

pub mod estimator;
pub mod params;
pub mod simulation;


pub use estimator::{apply_demand, estimate_demand, validate_call_volumes, MAX_CALL_VOLUME};
pub use params::DemandParams;
pub use simulation::{draw_calls, required_agents, simulate_period, CallEvent};
