//! Tables the user edits or inspects between runs.
//!
//! The period template and shift table are written in exactly the layout
//! `sp-catalog` reads back, so a template can be filled in and loaded
//! without reformatting.

use std::io::Write;
use std::path::Path;

use csv::Writer;

use sp_core::{Period, ShiftType};

use crate::OutputResult;

/// Write the period table with an empty `call_volume` column.
pub fn write_period_template<W: Write>(out: W, periods: &[Period]) -> OutputResult<()> {
    let mut w = Writer::from_writer(out);
    w.write_record(["label", "start_time", "end_time", "call_volume"])?;
    for p in periods {
        w.write_record(&[p.label().to_string(), p.start.to_string(), p.end.to_string(), String::new()])?;
    }
    w.flush()?;
    Ok(())
}

/// [`write_period_template`] to a file.
pub fn write_period_template_csv(path: &Path, periods: &[Period]) -> OutputResult<()> {
    write_period_template(std::fs::File::create(path)?, periods)
}

/// Write the shift table: duration in hours, cost, optional headcount cap.
pub fn write_shift_table<W: Write>(out: W, shifts: &[ShiftType]) -> OutputResult<()> {
    let mut w = Writer::from_writer(out);
    w.write_record(["duration", "cost", "max_agents"])?;
    for s in shifts {
        w.write_record(&[
            s.hours().to_string(),
            s.cost.to_string(),
            s.max_agents.map(|n| n.to_string()).unwrap_or_default(),
        ])?;
    }
    w.flush()?;
    Ok(())
}

/// [`write_shift_table`] to a file.
pub fn write_shift_table_csv(path: &Path, shifts: &[ShiftType]) -> OutputResult<()> {
    write_shift_table(std::fs::File::create(path)?, shifts)
}

/// Write a sampled duration curve as `cumulative_fraction,duration` pairs.
pub fn write_fit_curve<W: Write>(out: W, curve: &[(f64, f64)]) -> OutputResult<()> {
    let mut w = Writer::from_writer(out);
    w.write_record(["cumulative_fraction", "duration"])?;
    for &(x, y) in curve {
        w.write_record(&[x.to_string(), y.to_string()])?;
    }
    w.flush()?;
    Ok(())
}

/// [`write_fit_curve`] to a file.
pub fn write_fit_curve_csv(path: &Path, curve: &[(f64, f64)]) -> OutputResult<()> {
    write_fit_curve(std::fs::File::create(path)?, curve)
}
