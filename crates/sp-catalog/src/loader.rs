//! CSV loaders for the period table and the shift table.
//!
//! # Period table
//!
//! One row per bucket.  `call_volume` is left empty in exported templates
//! and filled in by the user; an empty cell is reported as missing data.
//!
//! ```csv
//! label,start_time,end_time,call_volume
//! 1,00:00:00,00:15:00,12
//! 2,00:15:00,00:30:00,9
//! ```
//!
//! # Shift table
//!
//! One row per offered shift.  `duration` is in hours; `max_agents` may be
//! empty.
//!
//! ```csv
//! duration,cost,max_agents
//! 6,540,
//! 8,700,40
//! ```

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use sp_core::{whole_minutes, ClockTime, DataError, Period, ShiftType};

use crate::{CatalogError, CatalogResult};

// ── CSV records ───────────────────────────────────────────────────────────────

/// One row of the period table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PeriodRecord {
    pub label:       u32,
    pub start_time:  ClockTime,
    pub end_time:    ClockTime,
    pub call_volume: Option<i64>,
}

/// One row of the shift table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ShiftRecord {
    pub duration:   f64,
    pub cost:       f64,
    #[serde(default)]
    pub max_agents: Option<u32>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load the period table from a CSV file.
pub fn load_period_table_csv(path: &Path) -> CatalogResult<Vec<PeriodRecord>> {
    let file = std::fs::File::open(path).map_err(CatalogError::Io)?;
    load_period_table_reader(file)
}

/// Like [`load_period_table_csv`] but accepts any `Read` source.
pub fn load_period_table_reader<R: Read>(reader: R) -> CatalogResult<Vec<PeriodRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    csv_reader
        .deserialize::<PeriodRecord>()
        .map(|row| row.map_err(|e| CatalogError::Parse(e.to_string())))
        .collect()
}

/// Load and validate the shift table from a CSV file.
pub fn load_shift_table_csv(
    path:           &Path,
    bucket_minutes: u32,
    day_minutes:    u32,
) -> CatalogResult<Vec<ShiftType>> {
    let file = std::fs::File::open(path).map_err(CatalogError::Io)?;
    load_shift_table_reader(file, bucket_minutes, day_minutes)
}

/// Like [`load_shift_table_csv`] but accepts any `Read` source.
pub fn load_shift_table_reader<R: Read>(
    reader:         R,
    bucket_minutes: u32,
    day_minutes:    u32,
) -> CatalogResult<Vec<ShiftType>> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut shifts = Vec::new();
    for result in csv_reader.deserialize::<ShiftRecord>() {
        let row = result.map_err(|e| CatalogError::Parse(e.to_string()))?;
        let minutes = whole_minutes(row.duration)?;
        let shift = ShiftType::new(minutes, row.cost, bucket_minutes, day_minutes)?
            .with_max_agents(row.max_agents);
        shifts.push(shift);
    }
    Ok(shifts)
}

/// Match loaded period rows to the grid by label and return one call volume
/// per period, in grid order.
///
/// Labels are 1-based, so row `label = k` belongs to period `k - 1`.  Rows
/// with labels beyond the grid are ignored.  A row whose start time
/// disagrees with the grid is a parse error.  A grid period with no row, or
/// with an empty `call_volume` cell, is a `MissingCallVolume` error.  A
/// label that appears on more than one row is a parse error.  Sign
/// is not checked here; the demand estimator rejects negatives.
pub fn align_call_volumes(periods: &[Period], records: &[PeriodRecord]) -> CatalogResult<Vec<i64>> {
    let mut by_label: HashMap<u32, &PeriodRecord> = HashMap::with_capacity(records.len());
    for r in records {
        if by_label.insert(r.label, r).is_some() {
            return Err(CatalogError::Parse(format!("period label {} appears more than once", r.label)));
        }
    }

    periods
        .iter()
        .map(|p| {
            let Some(row) = by_label.get(&p.label()) else {
                return Err(DataError::MissingCallVolume { period: p.id }.into());
            };
            if row.start_time != p.start {
                return Err(CatalogError::Parse(format!(
                    "period {} starts at {} in the table but at {} on the grid",
                    row.label, row.start_time, p.start
                )));
            }
            row.call_volume
                .ok_or_else(|| DataError::MissingCallVolume { period: p.id }.into())
        })
        .collect()
}
