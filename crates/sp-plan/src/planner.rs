//! The `Planner` struct and its run pipeline.

use sp_core::{Period, ShiftType};
use sp_coverage::{solve_coverage_with, CoverageOptions, CoverageSolution, MilpSolver};
use sp_demand::{apply_demand, estimate_demand, DemandParams};
use sp_duration::{fit_polynomial, DurationModel, FitReport};
use sp_output::{project, StaffingPlan};
use tracing::info;

use crate::{DurationSource, PlanObserver, PlanResult};

/// Everything one planning run produced.
#[derive(Clone, Debug)]
pub struct PlanOutcome {
    /// The seed the demand simulation ran with.  Passing it back reproduces
    /// the run.
    pub seed:     u64,
    /// The grid with `demand` filled in.
    pub periods:  Vec<Period>,
    /// Present when the duration model was fitted from samples.
    pub fit:      Option<FitReport>,
    pub solution: CoverageSolution,
    pub plan:     StaffingPlan,
}

/// A validated planning run, ready to execute.
///
/// Create via [`PlanBuilder`][crate::PlanBuilder].  `run` does not mutate the
/// planner, so the same planner can be run repeatedly; with the same seed
/// every run gives the same plan.
pub struct Planner<S: MilpSolver> {
    pub(crate) periods:      Vec<Period>,
    pub(crate) shifts:       Vec<ShiftType>,
    pub(crate) call_volumes: Vec<i64>,
    pub(crate) durations:    DurationSource,
    pub(crate) params:       DemandParams,
    pub(crate) poly_degree:  u32,
    pub(crate) options:      CoverageOptions,
    pub(crate) seed:         u64,
    pub(crate) solver:       S,
}

impl<S: MilpSolver> Planner<S> {
    /// The period grid, with demand still zero.
    pub fn periods(&self) -> &[Period] {
        &self.periods
    }

    pub fn shifts(&self) -> &[ShiftType] {
        &self.shifts
    }

    /// The resolved run seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Run the pipeline, reporting each stage to `observer`.
    pub fn run<O: PlanObserver>(&self, observer: &mut O) -> PlanResult<PlanOutcome> {
        info!(
            periods = self.periods.len(),
            shifts = self.shifts.len(),
            seed = self.seed,
            "starting planning run"
        );
        observer.on_grid(&self.periods);

        // ── ① Fit ─────────────────────────────────────────────────────────
        let fitted;
        let (model, fit): (&dyn DurationModel, Option<FitReport>) = match &self.durations {
            DurationSource::Samples(samples) => {
                fitted = fit_polynomial(samples, self.poly_degree)?;
                let report = FitReport::new(&fitted, samples);
                info!(
                    degree = self.poly_degree,
                    rmse = report.rmse,
                    min_on_curve = report.min_on_curve,
                    "fitted duration model"
                );
                observer.on_fit(&fitted, &report);
                (&fitted as &dyn DurationModel, Some(report))
            }
            DurationSource::Model(m) => (&**m, None),
        };

        // ── ② Demand ──────────────────────────────────────────────────────
        let demand = estimate_demand(&self.periods, &self.call_volumes, model, &self.params, self.seed)?;
        let mut periods = self.periods.clone();
        apply_demand(&mut periods, &demand);
        observer.on_demand(&periods);

        // ── ③ Coverage ────────────────────────────────────────────────────
        let solution = solve_coverage_with(&self.solver, &periods, &self.shifts, &demand, &self.options)?;
        observer.on_solved(&solution);

        // ── ④ Project ─────────────────────────────────────────────────────
        let plan = project(&solution, &self.shifts, &periods);
        observer.on_plan(&plan);

        info!(total_cost = plan.total_cost, headcount = plan.headcount(), "planning run complete");
        Ok(PlanOutcome { seed: self.seed, periods, fit, solution, plan })
    }
}
