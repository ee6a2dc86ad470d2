//! Top-level planning configuration.
//!
//! Loaded from TOML by the application crate and validated once, before any
//! simulation or model assembly runs.
//!
//! ```toml
//! day_hours      = 24
//! start_hour     = 0
//! start_minute   = 0
//! bucket_minutes = 15
//! max_wait_secs  = 10
//! poly_degree    = 2
//!
//! [[shifts]]
//! hours = 6
//! cost  = 540
//!
//! [[shifts]]
//! hours      = 8
//! cost       = 700
//! max_agents = 40
//! ```

use serde::{Deserialize, Serialize};

use crate::shift::whole_minutes;
use crate::{ClockTime, ConfigError, ConfigResult, ShiftType};

/// Highest polynomial degree accepted for the duration model.
pub const MAX_POLY_DEGREE: u32 = 10;

/// One offered shift, as written in the configuration file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShiftSpec {
    pub hours:      f64,
    pub cost:       f64,
    #[serde(default)]
    pub max_agents: Option<u32>,
}

/// Settings for one planning run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlanConfig {
    /// Length of the planning window in hours (1..=48).
    pub day_hours: u32,

    #[serde(default)]
    pub start_hour: u32,

    #[serde(default)]
    pub start_minute: u32,

    /// Bucket size.  Must evenly divide `day_hours * 60`.  Default: 15.
    #[serde(default = "default_bucket_minutes")]
    pub bucket_minutes: u32,

    /// Shortest shift listed by the admissible-shift enumeration.  Default: 1 h.
    #[serde(default = "default_min_shift_hours")]
    pub min_shift_hours: f64,

    /// Offered shift types.
    #[serde(default)]
    pub shifts: Vec<ShiftSpec>,

    /// Longest a caller may wait before an agent picks up.  Default: 10 s.
    #[serde(default = "default_max_wait_secs")]
    pub max_wait_secs: f64,

    /// Pause an agent takes between calls.  Default: 0 s.
    #[serde(default)]
    pub rest_secs: f64,

    /// Degree of the duration polynomial (0..=10).  Default: 2.
    #[serde(default = "default_poly_degree")]
    pub poly_degree: u32,

    /// Run seed.  `None` draws one from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Upper bound on total plan cost.  `None` means unbounded.
    #[serde(default)]
    pub cost_ceiling: Option<f64>,
}

fn default_bucket_minutes() -> u32 {
    15
}

fn default_min_shift_hours() -> f64 {
    1.0
}

fn default_max_wait_secs() -> f64 {
    10.0
}

fn default_poly_degree() -> u32 {
    2
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            day_hours:       24,
            start_hour:      0,
            start_minute:    0,
            bucket_minutes:  default_bucket_minutes(),
            min_shift_hours: default_min_shift_hours(),
            shifts:          Vec::new(),
            max_wait_secs:   default_max_wait_secs(),
            rest_secs:       0.0,
            poly_degree:     default_poly_degree(),
            seed:            None,
            cost_ceiling:    None,
        }
    }
}

impl PlanConfig {
    /// Total minutes in the planning window.
    #[inline]
    pub fn day_minutes(&self) -> u32 {
        self.day_hours * 60
    }

    /// Number of periods in the grid.  Only meaningful after `validate`.
    #[inline]
    pub fn period_count(&self) -> usize {
        (self.day_minutes() / self.bucket_minutes.max(1)) as usize
    }

    /// First period's start time.
    pub fn start_time(&self) -> ConfigResult<ClockTime> {
        ClockTime::from_hm(self.start_hour, self.start_minute).ok_or(
            ConfigError::InvalidStartTime { hour: self.start_hour, minute: self.start_minute },
        )
    }

    /// Check every setting, failing on the first bad value.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.day_hours == 0 {
            return Err(ConfigError::ZeroDayLength);
        }
        if self.day_hours > 48 {
            return Err(ConfigError::InvalidParameter {
                name:  "day_hours",
                value: self.day_hours as f64,
            });
        }
        if self.bucket_minutes == 0 {
            return Err(ConfigError::ZeroBucket);
        }
        if self.day_minutes() % self.bucket_minutes != 0 {
            return Err(ConfigError::BucketDoesNotDivideDay {
                bucket_minutes: self.bucket_minutes,
                day_minutes:    self.day_minutes(),
            });
        }
        self.start_time()?;
        check_non_negative("max_wait_secs", self.max_wait_secs)?;
        check_non_negative("rest_secs", self.rest_secs)?;
        if !self.min_shift_hours.is_finite() || self.min_shift_hours <= 0.0 {
            return Err(ConfigError::InvalidParameter {
                name:  "min_shift_hours",
                value: self.min_shift_hours,
            });
        }
        if self.poly_degree > MAX_POLY_DEGREE {
            return Err(ConfigError::InvalidDegree { degree: self.poly_degree });
        }
        if let Some(ceiling) = self.cost_ceiling {
            check_non_negative("cost_ceiling", ceiling)?;
        }
        self.shift_types().map(|_| ())
    }

    /// Validate the configured shifts against the grid and build the table.
    pub fn shift_types(&self) -> ConfigResult<Vec<ShiftType>> {
        self.shifts
            .iter()
            .map(|spec| {
                let minutes = whole_minutes(spec.hours)?;
                Ok(ShiftType::new(minutes, spec.cost, self.bucket_minutes, self.day_minutes())?
                    .with_max_agents(spec.max_agents))
            })
            .collect()
    }
}

fn check_non_negative(name: &'static str, value: f64) -> ConfigResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidParameter { name, value })
    }
}
