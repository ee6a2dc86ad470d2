//! Service-level parameters for the demand simulation.

use sp_core::{ConfigError, ConfigResult, PlanConfig};

/// How patient callers are and how long agents pause between calls.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DemandParams {
    /// Longest a caller may wait for an agent, in seconds.
    pub max_wait_secs: f64,
    /// Pause an agent takes after each call, in seconds.
    pub rest_secs:     f64,
}

impl DemandParams {
    pub fn new(max_wait_secs: f64, rest_secs: f64) -> ConfigResult<Self> {
        for (name, value) in [("max_wait_secs", max_wait_secs), ("rest_secs", rest_secs)] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidParameter { name, value });
            }
        }
        Ok(Self { max_wait_secs, rest_secs })
    }

    pub fn from_config(config: &PlanConfig) -> ConfigResult<Self> {
        Self::new(config.max_wait_secs, config.rest_secs)
    }
}

impl Default for DemandParams {
    /// Ten seconds of patience, no rest between calls.
    fn default() -> Self {
        Self { max_wait_secs: 10.0, rest_secs: 0.0 }
    }
}
