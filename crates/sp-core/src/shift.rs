//! Schedulable shift types.

use std::fmt;

use crate::{ConfigError, ConfigResult};

/// One row of the shift table: a work duration that may be assigned to agents
/// starting at any period of the day.
#[derive(Clone, Debug, PartialEq)]
pub struct ShiftType {
    /// Shift length in whole minutes.
    pub minutes:    u32,
    /// Shift length in buckets.  Always `minutes / bucket_minutes` exactly.
    pub buckets:    u32,
    /// Cost of one agent working one shift of this type.
    pub cost:       f64,
    /// Optional cap on the number of agents of this type over the whole day.
    pub max_agents: Option<u32>,
}

impl ShiftType {
    /// Validate and build a shift type for a grid of `bucket_minutes`
    /// buckets spanning `day_minutes`.
    ///
    /// Fails if the shift does not tile into whole buckets, is longer than
    /// the planning day, or has a negative / non-finite cost.
    pub fn new(
        minutes:        u32,
        cost:           f64,
        bucket_minutes: u32,
        day_minutes:    u32,
    ) -> ConfigResult<ShiftType> {
        if bucket_minutes == 0 {
            return Err(ConfigError::ZeroBucket);
        }
        if minutes == 0 || minutes % bucket_minutes != 0 {
            return Err(ConfigError::ShiftNotWholeBuckets { shift_minutes: minutes, bucket_minutes });
        }
        if minutes > day_minutes {
            return Err(ConfigError::ShiftLongerThanDay { shift_minutes: minutes, day_minutes });
        }
        if !cost.is_finite() || cost < 0.0 {
            return Err(ConfigError::InvalidCost { cost });
        }
        Ok(ShiftType {
            minutes,
            buckets: minutes / bucket_minutes,
            cost,
            max_agents: None,
        })
    }

    /// Attach a headcount cap.
    pub fn with_max_agents(mut self, max_agents: Option<u32>) -> Self {
        self.max_agents = max_agents;
        self
    }

    /// Shift length in hours.
    #[inline]
    pub fn hours(&self) -> f64 {
        self.minutes as f64 / 60.0
    }

    /// Human-readable label, e.g. `08h30`.
    pub fn label(&self) -> String {
        format!("{:02}h{:02}", self.minutes / 60, self.minutes % 60)
    }
}

impl fmt::Display for ShiftType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {:.2}", self.label(), self.cost)
    }
}

/// Convert an hour count to whole minutes.
///
/// Hours are user input (`8.5`, `0.25`), so a tolerance of a millionth of a
/// minute absorbs decimal representation error.
pub fn whole_minutes(hours: f64) -> ConfigResult<u32> {
    let minutes = hours * 60.0;
    let rounded = minutes.round();
    if !minutes.is_finite() || rounded < 0.0 || (minutes - rounded).abs() > 1e-6 {
        return Err(ConfigError::NonIntegralMinutes { hours });
    }
    Ok(rounded as u32)
}
