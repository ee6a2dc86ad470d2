//! The MILP engine seam.
//!
//! [`MilpSolver`] takes a [`CoverageModel`] and reports what the engine
//! reported.  Solution values travel only inside [`SolveOutcome::Optimal`],
//! so they cannot be read for any other status.
//!
//! [`GoodLpSolver`] is the bundled engine: `good_lp` with its pure-Rust
//! `microlp` backend (branch and bound over a dual simplex).  The call
//! blocks until the engine returns; there is no timeout.

use good_lp::constraint::{geq, leq};
use good_lp::{default_solver, variable, Expression, ProblemVariables, ResolutionError, Solution, SolverModel, Variable};
use tracing::trace;

use crate::{CoverageModel, Sense, SolveStatus};

/// Result of one engine call.
#[derive(Clone, Debug, PartialEq)]
pub enum SolveOutcome {
    /// One value per variable, indexed by `VarTag`.
    Optimal(Vec<f64>),
    Infeasible,
    Unbounded,
    /// Engine failure, interruption, or any other non-answer.
    NotSolved(String),
}

impl SolveOutcome {
    pub fn status(&self) -> SolveStatus {
        match self {
            SolveOutcome::Optimal(_)   => SolveStatus::Optimal,
            SolveOutcome::Infeasible   => SolveStatus::Infeasible,
            SolveOutcome::Unbounded    => SolveStatus::Unbounded,
            SolveOutcome::NotSolved(_) => SolveStatus::NotSolved,
        }
    }
}

/// A mixed-integer linear programming engine.
///
/// # Contract
///
/// - Every variable of `model` is a non-negative integer.
/// - The objective is minimised.
/// - `Optimal` carries exactly `model.var_count()` values.
pub trait MilpSolver {
    fn solve(&self, model: &CoverageModel) -> SolveOutcome;
}

/// `good_lp` + `microlp`.
#[derive(Clone, Copy, Debug, Default)]
pub struct GoodLpSolver;

impl MilpSolver for GoodLpSolver {
    fn solve(&self, model: &CoverageModel) -> SolveOutcome {
        let mut vars = ProblemVariables::new();
        let handles: Vec<Variable> = (0..model.var_count())
            .map(|_| vars.add(variable().integer().min(0)))
            .collect();

        let objective = model
            .costs
            .iter()
            .zip(&handles)
            .fold(Expression::from(0.0), |acc, (&cost, &v)| acc + cost * v);

        let mut problem = vars.minimise(objective).using(default_solver);
        for c in &model.constraints {
            let lhs = c
                .terms
                .iter()
                .fold(Expression::from(0.0), |acc, &(tag, coef)| acc + coef * handles[tag.index()]);
            problem = problem.with(match c.sense {
                Sense::AtLeast => geq(lhs, c.rhs),
                Sense::AtMost  => leq(lhs, c.rhs),
            });
        }

        trace!(variables = handles.len(), constraints = model.constraints.len(), "calling microlp");
        match problem.solve() {
            Ok(solution) => SolveOutcome::Optimal(handles.iter().map(|&v| solution.value(v)).collect()),
            Err(ResolutionError::Infeasible) => SolveOutcome::Infeasible,
            Err(ResolutionError::Unbounded) => SolveOutcome::Unbounded,
            Err(other) => SolveOutcome::NotSolved(other.to_string()),
        }
    }
}
