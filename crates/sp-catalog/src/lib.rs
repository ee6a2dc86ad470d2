//! `sp-catalog` — the shift catalog and the period grid.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                        |
//! |-------------|-----------------------------------------------------------------|
//! | [`catalog`] | `find_divisors`, `enumerate_admissible_shifts`, `build_period_grid`, `build_shift_table` |
//! | [`loader`]  | `load_period_table_*`, `load_shift_table_*`, `align_call_volumes` |
//! | [`error`]   | `CatalogError`, `CatalogResult<T>`                              |
//!
//! # Grid model (summary)
//!
//! ```text
//! P          = day_minutes / bucket_minutes
//! period[i]  = [start + i*bucket, start + (i+1)*bucket)   (mod 24 h)
//! succ(P-1)  = 0
//! ```

pub mod catalog;
pub mod error;
pub mod loader;


pub use catalog::{build_period_grid, build_shift_table, enumerate_admissible_shifts, find_divisors};
pub use error::{CatalogError, CatalogResult};
pub use loader::{
    align_call_volumes, load_period_table_csv, load_period_table_reader, load_shift_table_csv,
    load_shift_table_reader, PeriodRecord, ShiftRecord,
};
