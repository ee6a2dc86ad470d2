//! Solving the coverage model and reading the answer.

use sp_core::{Period, PeriodId, ShiftId, ShiftType, VarTag};
use tracing::{info, warn};

use crate::{
    build_coverage_model, CoverageModel, CoverageOptions, CoverageResult, GoodLpSolver,
    MilpSolver, SolveOutcome, SolverError, TagTable,
};

/// Values within this distance of an integer are snapped to it.
const INTEGRALITY_TOLERANCE: f64 = 1e-4;

/// One solved variable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Assignment {
    pub tag:   VarTag,
    pub shift: ShiftId,
    pub start: PeriodId,
    /// Agents starting shift `shift` at period `start`.
    pub count: u32,
}

/// An optimal assignment.  Only constructed from an `Optimal` engine result.
#[derive(Clone, Debug, PartialEq)]
pub struct CoverageSolution {
    tags:      TagTable,
    counts:    Vec<u32>,
    coverage:  Vec<u32>,
    objective: f64,
}

impl CoverageSolution {
    /// Decode engine values into integer counts.
    fn decode(model: &CoverageModel, values: Vec<f64>) -> Result<Self, SolverError> {
        if values.len() != model.var_count() {
            return Err(SolverError::NotSolved(format!(
                "engine returned {} values for {} variables",
                values.len(),
                model.var_count()
            )));
        }
        let mut counts = Vec::with_capacity(values.len());
        for (i, &v) in values.iter().enumerate() {
            let rounded = v.round();
            if !v.is_finite() || rounded < 0.0 || (v - rounded).abs() > INTEGRALITY_TOLERANCE {
                return Err(SolverError::NotSolved(format!(
                    "engine returned non-integral value {v} for {}",
                    VarTag(i as u32)
                )));
            }
            counts.push(rounded as u32);
        }

        let as_f64: Vec<f64> = counts.iter().map(|&c| c as f64).collect();
        let coverage = model.constraints[..model.period_count]
            .iter()
            .map(|row| row.lhs(&as_f64).round() as u32)
            .collect();
        let objective = model.objective(&as_f64);

        Ok(Self { tags: model.tags.clone(), counts, coverage, objective })
    }

    /// Total cost of the plan.
    #[inline]
    pub fn objective(&self) -> f64 {
        self.objective
    }

    /// Solved count of a variable.
    #[inline]
    pub fn value(&self, tag: VarTag) -> Option<u32> {
        self.counts.get(tag.index()).copied()
    }

    /// Solved count of `x[shift, start]`.
    pub fn count(&self, shift: ShiftId, start: PeriodId) -> Option<u32> {
        self.tags.tag(shift, start).and_then(|t| self.value(t))
    }

    /// Decode one tag into its assignment.
    pub fn assignment(&self, tag: VarTag) -> Option<Assignment> {
        let (shift, start) = self.tags.pair(tag)?;
        Some(Assignment { tag, shift, start, count: self.value(tag)? })
    }

    /// Every variable, in tag order, including zero counts.
    pub fn assignments(&self) -> impl Iterator<Item = Assignment> + '_ {
        self.tags
            .iter()
            .map(|(tag, shift, start)| Assignment { tag, shift, start, count: self.counts[tag.index()] })
    }

    /// The tag table the model was built with.
    pub fn tags(&self) -> &TagTable {
        &self.tags
    }

    /// Agents on duty in each period.
    pub fn coverage(&self) -> &[u32] {
        &self.coverage
    }

    /// Total agents hired across all shifts and starts.
    pub fn headcount(&self) -> u32 {
        self.counts.iter().sum()
    }
}

/// Cheapest assignment of `shifts` meeting `demand`, using the bundled
/// engine and no extra limits.
pub fn solve_coverage(
    periods: &[Period],
    shifts:  &[ShiftType],
    demand:  &[u32],
) -> CoverageResult<CoverageSolution> {
    solve_coverage_with(&GoodLpSolver, periods, shifts, demand, &CoverageOptions::default())
}

/// Like [`solve_coverage`] with an explicit engine and options.
///
/// A period with positive demand that no shift can cover is reported as
/// `Infeasible` without calling the engine.
pub fn solve_coverage_with<S>(
    solver:  &S,
    periods: &[Period],
    shifts:  &[ShiftType],
    demand:  &[u32],
    options: &CoverageOptions,
) -> CoverageResult<CoverageSolution>
where
    S: MilpSolver + ?Sized,
{
    let model = build_coverage_model(periods, shifts, demand, options)?;

    if let Some(period) = model.trivially_infeasible_row() {
        warn!(%period, demand = demand[period.index()], "no shift covers period with demand");
        return Err(SolverError::Infeasible.into());
    }

    let outcome = if model.var_count() == 0 {
        SolveOutcome::Optimal(vec![])
    } else {
        solver.solve(&model)
    };
    let status = outcome.status();

    let solution = match outcome {
        SolveOutcome::Optimal(values) => CoverageSolution::decode(&model, values)?,
        SolveOutcome::Infeasible => {
            warn!(%status, "coverage model not solved");
            return Err(SolverError::Infeasible.into());
        }
        SolveOutcome::Unbounded => {
            warn!(%status, "coverage model not solved");
            return Err(SolverError::Unbounded.into());
        }
        SolveOutcome::NotSolved(reason) => {
            warn!(%status, %reason, "coverage model not solved");
            return Err(SolverError::NotSolved(reason).into());
        }
    };

    info!(
        %status,
        objective = solution.objective(),
        headcount = solution.headcount(),
        "solved coverage model"
    );
    Ok(solution)
}
