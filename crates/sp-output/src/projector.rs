//! Projection of a solved assignment onto the period grid.
//!
//! The coverage solution is keyed by `(shift, start period)` tags; the plan
//! is the same numbers laid out as a table with one row per period and one
//! column per shift type, so it can be read as "how many agents of each kind
//! clock in at this time".

use std::fmt;

use sp_core::{ClockTime, Period, PeriodId, ShiftId, ShiftType};
use sp_coverage::CoverageSolution;

// ── Plan types ────────────────────────────────────────────────────────────────

/// One period of the staffing plan.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StaffingRow {
    pub period:   PeriodId,
    pub start:    ClockTime,
    /// Agents starting each shift type at this period, in shift-table order.
    /// Zero where nothing was assigned.
    pub starts:   Vec<u32>,
    /// Agents required by the demand estimate.
    pub demand:   u32,
    /// Agents on duty during this period under the plan.
    pub coverage: u32,
}

/// Column total for one shift type.
#[derive(Clone, Debug, PartialEq)]
pub struct ShiftTotal {
    pub shift:  ShiftId,
    pub label:  String,
    pub agents: u32,
    pub cost:   f64,
}

/// The staffing table for one planning run.
#[derive(Clone, Debug, PartialEq)]
pub struct StaffingPlan {
    /// Column headers, in shift-table order.
    pub labels:     Vec<String>,
    pub rows:       Vec<StaffingRow>,
    pub totals:     Vec<ShiftTotal>,
    pub total_cost: f64,
}

impl StaffingPlan {
    /// Rows starting at `start`.  Planning windows longer than a day visit
    /// the same clock time more than once.
    pub fn rows_at(&self, start: ClockTime) -> impl Iterator<Item = &StaffingRow> + '_ {
        self.rows.iter().filter(move |r| r.start == start)
    }

    /// The column for the shift labelled `label`, one value per period.
    pub fn column(&self, label: &str) -> Option<Vec<u32>> {
        let idx = self.labels.iter().position(|l| l == label)?;
        Some(self.rows.iter().map(|r| r.starts[idx]).collect())
    }

    /// Total agents hired across all shift types.
    pub fn headcount(&self) -> u32 {
        self.totals.iter().map(|t| t.agents).sum()
    }
}

// ── Projection ────────────────────────────────────────────────────────────────

/// Lay `solution` out as a period × shift table.
///
/// `shifts` and `periods` must be the ones the solution was solved for.
/// Demand is read from `Period::demand`.
pub fn project(solution: &CoverageSolution, shifts: &[ShiftType], periods: &[Period]) -> StaffingPlan {
    let coverage = solution.coverage();

    let rows: Vec<StaffingRow> = periods
        .iter()
        .map(|p| StaffingRow {
            period:   p.id,
            start:    p.start,
            starts:   (0..shifts.len())
                .map(|s| solution.count(ShiftId(s as u16), p.id).unwrap_or(0))
                .collect(),
            demand:   p.demand,
            coverage: coverage.get(p.id.index()).copied().unwrap_or(0),
        })
        .collect();

    let totals: Vec<ShiftTotal> = shifts
        .iter()
        .enumerate()
        .map(|(s, shift)| {
            let agents: u32 = rows.iter().map(|r| r.starts[s]).sum();
            ShiftTotal {
                shift: ShiftId(s as u16),
                label: shift.label(),
                agents,
                cost:  agents as f64 * shift.cost,
            }
        })
        .collect();

    StaffingPlan {
        labels: shifts.iter().map(ShiftType::label).collect(),
        rows,
        totals,
        total_cost: solution.objective(),
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl fmt::Display for StaffingPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<8}", "start")?;
        for label in &self.labels {
            write!(f, " {label:>6}")?;
        }
        writeln!(f, " {:>6} {:>6}", "demand", "cover")?;

        for row in &self.rows {
            write!(f, "{:02}:{:02}   ", row.start.hour(), row.start.minute())?;
            for n in &row.starts {
                write!(f, " {n:>6}")?;
            }
            writeln!(f, " {:>6} {:>6}", row.demand, row.coverage)?;
        }

        write!(f, "{:<8}", "total")?;
        for t in &self.totals {
            write!(f, " {:>6}", t.agents)?;
        }
        writeln!(f)?;
        write!(f, "cost     {:.2}", self.total_cost)
    }
}
