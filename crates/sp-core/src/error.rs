//! Validation error types shared by every `sp-*` crate.
//!
//! Configuration problems and input-data problems are kept apart so callers
//! can tell "fix the settings" from "fix the spreadsheet".  Both are raised
//! before the optimisation model is assembled, and every variant carries the
//! offending value.

use thiserror::Error;

use crate::PeriodId;

/// Invalid planning settings.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("bucket size must be at least one minute")]
    ZeroBucket,

    #[error("planning day must be at least one hour long")]
    ZeroDayLength,

    #[error("bucket of {bucket_minutes} min does not evenly divide a {day_minutes}-minute day")]
    BucketDoesNotDivideDay { bucket_minutes: u32, day_minutes: u32 },

    #[error("start time {hour:02}:{minute:02} is not a valid time of day")]
    InvalidStartTime { hour: u32, minute: u32 },

    #[error("shift of {hours} h is not a whole number of minutes")]
    NonIntegralMinutes { hours: f64 },

    #[error("shift of {shift_minutes} min is not a whole number of {bucket_minutes}-min buckets")]
    ShiftNotWholeBuckets { shift_minutes: u32, bucket_minutes: u32 },

    #[error("shift of {shift_minutes} min is longer than the {day_minutes}-min planning day")]
    ShiftLongerThanDay { shift_minutes: u32, day_minutes: u32 },

    #[error("{durations} shift durations but {costs} costs")]
    ShiftCostMismatch { durations: usize, costs: usize },

    #[error("shift cost {cost} is negative or not a number")]
    InvalidCost { cost: f64 },

    #[error("polynomial degree {degree} is outside 0..=10")]
    InvalidDegree { degree: u32 },

    #[error("invalid value for {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },
}

/// Invalid or incomplete input data.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DataError {
    #[error("negative call volume {value} for {period}")]
    NegativeCallVolume { period: PeriodId, value: i64 },

    #[error("call volume {value} for {period} exceeds the limit of {max} calls per period")]
    CallVolumeTooLarge { period: PeriodId, value: i64, max: i64 },

    #[error("missing call volume for {period}")]
    MissingCallVolume { period: PeriodId },

    #[error("duration model returned {value} at draw {draw}")]
    NonNumericDuration { draw: f64, value: f64 },

    #[error("duration sample #{index} is invalid: fraction {fraction}, duration {duration}")]
    InvalidSample { index: usize, fraction: f64, duration: f64 },

    #[error("degree-{degree} fit needs at least {needed} samples, got {got}")]
    InsufficientSamples { degree: u32, needed: usize, got: usize },

    #[error("least-squares system is rank deficient")]
    SingularFit,
}

pub type ConfigResult<T> = Result<T, ConfigError>;
pub type DataResult<T> = Result<T, DataError>;
