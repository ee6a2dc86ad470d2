//! Fluent builder for constructing a [`Planner`].

use sp_catalog::build_period_grid;
use sp_core::{PlanConfig, ShiftType, SimRng};
use sp_coverage::{CoverageOptions, GoodLpSolver, MilpSolver};
use sp_demand::DemandParams;
use sp_duration::{DurationModel, DurationSample};
use tracing::info;

use crate::{PlanError, PlanResult, Planner};

/// Where call durations come from.
pub enum DurationSource {
    /// Historical `(cumulative_fraction, duration)` points, fitted with a
    /// polynomial of the configured degree at run time.
    Samples(Vec<DurationSample>),
    /// A ready-made model, used as is.
    Model(Box<dyn DurationModel>),
}

/// Fluent builder for [`Planner<S>`].
///
/// # Required inputs
///
/// - [`PlanConfig`]: grid, shifts, simulation parameters, optional seed
/// - call volumes, one per period of the grid
/// - a duration source: [`samples`](Self::samples) or
///   [`duration_model`](Self::duration_model)
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                                   |
/// |-----------------|-------------------------------------------|
/// | `.shifts(v)`    | `config.shifts`                           |
/// | `.seed(s)`      | `config.seed`, else drawn from OS entropy |
/// | `.solver(s)`    | [`GoodLpSolver`]                          |
pub struct PlanBuilder<S: MilpSolver = GoodLpSolver> {
    config:       PlanConfig,
    call_volumes: Vec<i64>,
    durations:    Option<DurationSource>,
    shifts:       Option<Vec<ShiftType>>,
    seed:         Option<u64>,
    solver:       S,
}

impl PlanBuilder<GoodLpSolver> {
    /// Create a builder with the bundled MILP engine.
    pub fn new(config: PlanConfig, call_volumes: Vec<i64>) -> Self {
        Self {
            config,
            call_volumes,
            durations: None,
            shifts:    None,
            seed:      None,
            solver:    GoodLpSolver,
        }
    }
}

impl<S: MilpSolver> PlanBuilder<S> {
    /// Fit the duration model from historical samples.
    pub fn samples(mut self, samples: Vec<DurationSample>) -> Self {
        self.durations = Some(DurationSource::Samples(samples));
        self
    }

    /// Use `model` for call durations instead of fitting one.
    pub fn duration_model<M: DurationModel + 'static>(mut self, model: M) -> Self {
        self.durations = Some(DurationSource::Model(Box::new(model)));
        self
    }

    /// Replace the configured shifts, e.g. with a table loaded from CSV.
    /// `build` checks them against the configured grid again.
    pub fn shifts(mut self, shifts: Vec<ShiftType>) -> Self {
        self.shifts = Some(shifts);
        self
    }

    /// Fix the run seed, overriding `config.seed`.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Swap in a different MILP engine.
    pub fn solver<T: MilpSolver>(self, solver: T) -> PlanBuilder<T> {
        PlanBuilder {
            config:       self.config,
            call_volumes: self.call_volumes,
            durations:    self.durations,
            shifts:       self.shifts,
            seed:         self.seed,
            solver,
        }
    }

    /// Validate inputs, build the grid and shift table, resolve the seed,
    /// and return a ready-to-run [`Planner`].
    pub fn build(self) -> PlanResult<Planner<S>> {
        // ── Validate ──────────────────────────────────────────────────────
        self.config.validate()?;
        let params = DemandParams::from_config(&self.config)?;
        let durations = self.durations.ok_or(PlanError::MissingDurationModel)?;

        // ── Grid and shifts ───────────────────────────────────────────────
        let c = &self.config;
        let periods = build_period_grid(c.day_hours, c.bucket_minutes, c.start_hour, c.start_minute)?;
        if self.call_volumes.len() != periods.len() {
            return Err(PlanError::VolumeCountMismatch {
                expected: periods.len(),
                got:      self.call_volumes.len(),
            });
        }
        let shifts = match self.shifts {
            // Rebuilt so bucket counts match this grid, not the one the
            // caller built them for.
            Some(supplied) => supplied
                .iter()
                .map(|s| {
                    Ok(ShiftType::new(s.minutes, s.cost, c.bucket_minutes, c.day_minutes())?
                        .with_max_agents(s.max_agents))
                })
                .collect::<PlanResult<Vec<_>>>()?,
            None => c.shift_types()?,
        };

        // ── Seed ──────────────────────────────────────────────────────────
        let seed = match self.seed.or(c.seed) {
            Some(s) => s,
            None => {
                let s = SimRng::draw_seed();
                info!(seed = s, "no seed configured; drew run seed from entropy");
                s
            }
        };

        Ok(Planner {
            options: CoverageOptions { cost_ceiling: c.cost_ceiling },
            poly_degree: c.poly_degree,
            periods,
            shifts,
            call_volumes: self.call_volumes,
            durations,
            params,
            seed,
            solver: self.solver,
        })
    }
}
