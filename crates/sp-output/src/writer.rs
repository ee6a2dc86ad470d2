//! The `OutputWriter` trait implemented by plan writers.

use crate::{OutputResult, StaffingPlan};

/// Sink for finished staffing plans.
pub trait OutputWriter {
    /// Write one complete plan.
    fn write_plan(&mut self, plan: &StaffingPlan) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
