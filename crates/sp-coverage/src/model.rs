//! Assembly of the coverage integer program.
//!
//! The model is plain data: costs per variable and a list of linear
//! constraints over [`VarTag`]s.  It knows nothing about any particular
//! engine; a [`MilpSolver`](crate::MilpSolver) translates it.

use sp_core::{ConfigError, Period, PeriodId, ShiftId, ShiftType, VarTag};
use tracing::debug;

use crate::{coverage_window, CoverageError, CoverageResult, TagTable};

/// Optional limits beyond per-period demand.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CoverageOptions {
    /// Upper bound on total plan cost.
    pub cost_ceiling: Option<f64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sense {
    /// `Σ terms ≥ rhs`
    AtLeast,
    /// `Σ terms ≤ rhs`
    AtMost,
}

/// One linear constraint `Σ coef · x[tag]  (≥|≤)  rhs`.
#[derive(Clone, Debug, PartialEq)]
pub struct Constraint {
    pub terms: Vec<(VarTag, f64)>,
    pub sense: Sense,
    pub rhs:   f64,
}

impl Constraint {
    /// Left-hand side evaluated at `values` (indexed by tag).
    pub fn lhs(&self, values: &[f64]) -> f64 {
        self.terms.iter().map(|&(t, c)| c * values[t.index()]).sum()
    }

    /// `true` if `values` satisfy the constraint within `tol`.
    pub fn is_satisfied(&self, values: &[f64], tol: f64) -> bool {
        let lhs = self.lhs(values);
        match self.sense {
            Sense::AtLeast => lhs >= self.rhs - tol,
            Sense::AtMost  => lhs <= self.rhs + tol,
        }
    }
}

/// The complete integer program for one planning run.
///
/// Every variable is a non-negative integer.  The first `period_count`
/// constraints are the demand rows, in period order; caps follow.
#[derive(Clone, Debug, PartialEq)]
pub struct CoverageModel {
    pub tags:         TagTable,
    /// Objective coefficient per tag.
    pub costs:        Vec<f64>,
    pub constraints:  Vec<Constraint>,
    pub period_count: usize,
}

impl CoverageModel {
    #[inline]
    pub fn var_count(&self) -> usize {
        self.costs.len()
    }

    /// Demand row of period `p`.
    #[inline]
    pub fn demand_row(&self, p: PeriodId) -> &Constraint {
        &self.constraints[p.index()]
    }

    /// Objective value at `values`.
    pub fn objective(&self, values: &[f64]) -> f64 {
        self.costs.iter().zip(values).map(|(c, v)| c * v).sum()
    }

    /// A demand row that no variable can satisfy: positive demand with no
    /// shift covering the period.
    pub fn trivially_infeasible_row(&self) -> Option<PeriodId> {
        self.constraints[..self.period_count]
            .iter()
            .position(|c| c.terms.is_empty() && c.rhs > 0.0)
            .map(|i| PeriodId(i as u32))
    }
}

/// Build the coverage model for `periods`, `shifts`, and `demand`.
///
/// Variables are created shift-major: every start period of shift 0, then
/// every start period of shift 1, and so on.
///
/// # Errors
///
/// - `DemandLength` if `demand` does not have one value per period.
/// - `ConfigError::ShiftLongerThanDay` if a shift spans more buckets than
///   the grid has periods.
/// - `ConfigError::InvalidParameter` for a negative or non-finite ceiling.
pub fn build_coverage_model(
    periods: &[Period],
    shifts:  &[ShiftType],
    demand:  &[u32],
    options: &CoverageOptions,
) -> CoverageResult<CoverageModel> {
    let period_count = periods.len();
    if demand.len() != period_count {
        return Err(CoverageError::DemandLength { expected: period_count, got: demand.len() });
    }
    for shift in shifts {
        if shift.buckets as usize > period_count {
            let bucket = periods.first().map_or(0, |p| p.span_minutes);
            return Err(ConfigError::ShiftLongerThanDay {
                shift_minutes: shift.minutes,
                day_minutes:   bucket * period_count as u32,
            }
            .into());
        }
    }
    if let Some(ceiling) = options.cost_ceiling {
        if !ceiling.is_finite() || ceiling < 0.0 {
            return Err(ConfigError::InvalidParameter { name: "cost_ceiling", value: ceiling }.into());
        }
    }

    // ── Variables ─────────────────────────────────────────────────────────
    let mut tags = TagTable::new();
    let mut costs = Vec::with_capacity(shifts.len() * period_count);
    // by_shift[s][j] = tag of x[s, j]
    let by_shift: Vec<Vec<VarTag>> = shifts
        .iter()
        .enumerate()
        .map(|(s, shift)| {
            periods
                .iter()
                .map(|p| {
                    costs.push(shift.cost);
                    tags.issue(ShiftId(s as u16), p.id)
                })
                .collect()
        })
        .collect();

    // ── Demand rows ───────────────────────────────────────────────────────
    let mut constraints: Vec<Constraint> = Vec::with_capacity(period_count + shifts.len() + 1);
    for p in 0..period_count {
        let mut terms = Vec::new();
        for (shift, shift_tags) in shifts.iter().zip(&by_shift) {
            for start in coverage_window(p, shift.buckets as usize, period_count) {
                terms.push((shift_tags[start], 1.0));
            }
        }
        constraints.push(Constraint { terms, sense: Sense::AtLeast, rhs: demand[p] as f64 });
    }

    // ── Headcount caps ────────────────────────────────────────────────────
    for (shift, shift_tags) in shifts.iter().zip(&by_shift) {
        if let Some(cap) = shift.max_agents {
            let terms = shift_tags.iter().map(|&t| (t, 1.0)).collect();
            constraints.push(Constraint { terms, sense: Sense::AtMost, rhs: cap as f64 });
        }
    }

    // ── Cost ceiling ──────────────────────────────────────────────────────
    if let Some(ceiling) = options.cost_ceiling {
        let terms = costs
            .iter()
            .enumerate()
            .map(|(i, &c)| (VarTag(i as u32), c))
            .collect();
        constraints.push(Constraint { terms, sense: Sense::AtMost, rhs: ceiling });
    }

    debug!(
        variables = costs.len(),
        constraints = constraints.len(),
        periods = period_count,
        shifts = shifts.len(),
        "assembled coverage model"
    );

    Ok(CoverageModel { tags, costs, constraints, period_count })
}
