//! `sp-coverage` — cheapest set of shifts that meets every period's demand.
//!
//! # Formulation
//!
//! ```text
//! variables   x[s, j] ∈ ℤ≥0      agents on shift type s starting at period j
//! minimise    Σ cost[s] · x[s, j]
//! subject to  Σ_s Σ_{j ∈ W(p, L_s)} x[s, j] ≥ demand[p]       for every period p
//!             Σ_j x[s, j] ≤ max_agents[s]                      (optional cap)
//!             Σ cost[s] · x[s, j] ≤ cost_ceiling               (optional)
//! where       W(p, L) = {p, p-1, …, p-L+1} mod P
//! ```
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`window`]   | `coverage_window` — modular index arithmetic               |
//! | [`tags`]     | `TagTable` — `VarTag` ↔ `(ShiftId, PeriodId)`             |
//! | [`model`]    | `CoverageModel`, `Constraint`, `build_coverage_model`      |
//! | [`solver`]   | `MilpSolver` trait, `SolveOutcome`, `GoodLpSolver`         |
//! | [`solution`] | `solve_coverage`, `CoverageSolution`, `Assignment`         |
//! | [`error`]    | `SolverError`, `CoverageError`                             |

pub mod error;
pub mod model;
pub mod solution;
pub mod solver;
pub mod tags;
pub mod window;

#[cfg(test)]
mod tests;

pub use error::{CoverageError, CoverageResult, SolveStatus, SolverError};
pub use model::{build_coverage_model, Constraint, CoverageModel, CoverageOptions, Sense};
pub use solution::{solve_coverage, solve_coverage_with, Assignment, CoverageSolution};
pub use solver::{GoodLpSolver, MilpSolver, SolveOutcome};
pub use tags::TagTable;
pub use window::coverage_window;
