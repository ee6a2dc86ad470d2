//! Planning-run observer trait for progress reporting and output.

use sp_core::Period;
use sp_coverage::CoverageSolution;
use sp_duration::{FitReport, PolynomialModel};
use sp_output::{OutputError, OutputWriter, StaffingPlan};

/// Callbacks invoked by [`Planner::run`][crate::Planner::run] after each
/// stage.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
pub trait PlanObserver {
    /// Called once with the period grid, before any simulation.
    fn on_grid(&mut self, _periods: &[Period]) {}

    /// Called after the duration polynomial is fitted.  Not called when the
    /// run was given a model directly.
    fn on_fit(&mut self, _model: &PolynomialModel, _report: &FitReport) {}

    /// Called with the grid after demand has been written onto it.
    fn on_demand(&mut self, _periods: &[Period]) {}

    /// Called with the optimal assignment.
    fn on_solved(&mut self, _solution: &CoverageSolution) {}

    /// Called with the projected staffing plan.  Last callback of a
    /// successful run.
    fn on_plan(&mut self, _plan: &StaffingPlan) {}
}

/// A [`PlanObserver`] that does nothing.
pub struct NoopObserver;

impl PlanObserver for NoopObserver {}

/// A [`PlanObserver`] that writes the finished plan to an [`OutputWriter`].
///
/// Observer methods have no return value, so write errors are stored and
/// retrieved with [`take_error`][Self::take_error] after the run.
pub struct WriterObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> WriterObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `run` returns.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<W: OutputWriter> PlanObserver for WriterObserver<W> {
    fn on_plan(&mut self, plan: &StaffingPlan) {
        let result = self.writer.write_plan(plan).and_then(|()| self.writer.finish());
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}
