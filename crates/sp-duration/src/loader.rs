//! CSV loader for historical duration samples.
//!
//! # CSV format
//!
//! One row per quantile point.  `cumulative_fraction` is the share of calls
//! lasting at most `duration` seconds.
//!
//! ```csv
//! cumulative_fraction,duration
//! 0.05,31
//! 0.50,184
//! 0.95,702
//! ```
//!
//! Values are range-checked by [`fit_polynomial`](crate::fit_polynomial),
//! not here.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::{DurationError, DurationResult};

/// One `(cumulative_fraction, duration)` point.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct DurationSample {
    #[serde(rename = "cumulative_fraction")]
    pub fraction: f64,
    /// Seconds.
    pub duration: f64,
}

/// Load duration samples from a CSV file.
pub fn load_samples_csv(path: &Path) -> DurationResult<Vec<DurationSample>> {
    let file = std::fs::File::open(path).map_err(DurationError::Io)?;
    load_samples_reader(file)
}

/// Like [`load_samples_csv`] but accepts any `Read` source.
pub fn load_samples_reader<R: Read>(reader: R) -> DurationResult<Vec<DurationSample>> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    csv_reader
        .deserialize::<DurationSample>()
        .map(|row| row.map_err(|e| DurationError::Parse(e.to_string())))
        .collect()
}
