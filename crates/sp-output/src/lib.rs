//! `sp-output` — turns a solved coverage model into a staffing plan and
//! writes plans and planning tables to disk.
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | `projector` | [`project`], [`StaffingPlan`], [`StaffingRow`], [`ShiftTotal`] |
//! | `writer`    | [`OutputWriter`] trait                                     |
//! | `csv`       | [`CsvWriter`] backend                                      |
//! | `export`    | period template, shift table, and fit-curve CSV exports    |
//!
//! # Files created by [`CsvWriter`]
//!
//! - `staffing_plan.csv`: one row per period, one column per shift label
//! - `shift_totals.csv`: agents and cost per shift type
//! - `period_demand.csv`: demand against scheduled coverage per period

pub mod csv;
pub mod error;
pub mod export;
pub mod projector;
pub mod writer;


pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use export::{
    write_fit_curve, write_fit_curve_csv, write_period_template, write_period_template_csv,
    write_shift_table, write_shift_table_csv,
};
pub use projector::{project, ShiftTotal, StaffingPlan, StaffingRow};
pub use writer::OutputWriter;
