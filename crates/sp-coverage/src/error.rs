use std::fmt;

use sp_core::ConfigError;
use thiserror::Error;

/// Status reported by the MILP engine, as the engine reported it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolveStatus {
    Optimal,
    Infeasible,
    Unbounded,
    NotSolved,
}

impl fmt::Display for SolveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SolveStatus::Optimal    => "Optimal",
            SolveStatus::Infeasible => "Infeasible",
            SolveStatus::Unbounded  => "Unbounded",
            SolveStatus::NotSolved  => "Not Solved",
        };
        f.write_str(s)
    }
}

/// A non-optimal solve.  No solution values are available in any of these
/// cases.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    /// No combination of the offered shifts meets demand within the caps.
    #[error("coverage model is infeasible: offered shifts cannot meet demand")]
    Infeasible,

    /// Impossible with non-negative costs; indicates a configuration defect.
    #[error("coverage model is unbounded")]
    Unbounded,

    #[error("coverage model was not solved: {0}")]
    NotSolved(String),
}

impl SolverError {
    pub fn status(&self) -> SolveStatus {
        match self {
            SolverError::Infeasible   => SolveStatus::Infeasible,
            SolverError::Unbounded    => SolveStatus::Unbounded,
            SolverError::NotSolved(_) => SolveStatus::NotSolved,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoverageError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("demand has {got} values for {expected} periods")]
    DemandLength { expected: usize, got: usize },

    #[error(transparent)]
    Solver(#[from] SolverError),
}

pub type CoverageResult<T> = Result<T, CoverageError>;
