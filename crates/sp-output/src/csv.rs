//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `staffing_plan.csv`
//! - `shift_totals.csv`
//! - `period_demand.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;
use tracing::debug;

use crate::{OutputResult, StaffingPlan};
use crate::writer::OutputWriter;

/// Writes staffing plans to three CSV files.
pub struct CsvWriter {
    plan:     Writer<File>,
    totals:   Writer<File>,
    demand:   Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the three CSV files in `dir` and write the header
    /// rows that do not depend on the shift table.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let plan = Writer::from_path(dir.join("staffing_plan.csv"))?;

        let mut totals = Writer::from_path(dir.join("shift_totals.csv"))?;
        totals.write_record(["shift", "agents", "cost"])?;

        let mut demand = Writer::from_path(dir.join("period_demand.csv"))?;
        demand.write_record(["label", "start_time", "demand", "coverage"])?;

        Ok(Self { plan, totals, demand, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_plan(&mut self, plan: &StaffingPlan) -> OutputResult<()> {
        let mut header = Vec::with_capacity(plan.labels.len() + 1);
        header.push("start_time".to_owned());
        header.extend(plan.labels.iter().cloned());
        self.plan.write_record(&header)?;

        for row in &plan.rows {
            let mut record = Vec::with_capacity(row.starts.len() + 1);
            record.push(row.start.to_string());
            record.extend(row.starts.iter().map(u32::to_string));
            self.plan.write_record(&record)?;

            self.demand.write_record(&[
                (row.period.0 + 1).to_string(),
                row.start.to_string(),
                row.demand.to_string(),
                row.coverage.to_string(),
            ])?;
        }

        for t in &plan.totals {
            self.totals.write_record(&[t.label.clone(), t.agents.to_string(), t.cost.to_string()])?;
        }
        self.totals.write_record(&[
            "total".to_owned(),
            plan.headcount().to_string(),
            plan.total_cost.to_string(),
        ])?;

        debug!(rows = plan.rows.len(), shifts = plan.labels.len(), "wrote staffing plan");
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.plan.flush()?;
        self.totals.flush()?;
        self.demand.flush()?;
        Ok(())
    }
}
