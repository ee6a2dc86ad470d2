//! Bucket sizes, shift durations, and the period grid.

use sp_core::{ClockTime, ConfigError, ConfigResult, Period, PeriodId, ShiftType};
use tracing::debug;

/// All positive divisors of `n`, ascending.
///
/// Used to offer only bucket sizes that tile the planning day exactly.
/// `find_divisors(0)` is empty.
pub fn find_divisors(n: u32) -> Vec<u32> {
    let mut low = Vec::new();
    let mut high = Vec::new();
    let mut i = 1u32;
    while (i as u64) * (i as u64) <= n as u64 {
        if n % i == 0 {
            low.push(i);
            if i != n / i {
                high.push(n / i);
            }
        }
        i += 1;
    }
    low.extend(high.into_iter().rev());
    low
}

/// Shift durations, in minutes, between `min_hours` and `max_hours`
/// (inclusive, one-minute resolution) that occupy a whole number of
/// `bucket_minutes` buckets.
pub fn enumerate_admissible_shifts(
    min_hours:      f64,
    max_hours:      f64,
    bucket_minutes: u32,
) -> ConfigResult<Vec<u32>> {
    if bucket_minutes == 0 {
        return Err(ConfigError::ZeroBucket);
    }
    for (name, value) in [("min_hours", min_hours), ("max_hours", max_hours)] {
        if !value.is_finite() || value < 0.0 {
            return Err(ConfigError::InvalidParameter { name, value });
        }
    }
    // Tolerance absorbs decimal input such as 0.1 h.
    let lo = ((min_hours * 60.0) - 1e-6).ceil().max(1.0) as u32;
    let hi = ((max_hours * 60.0) + 1e-6).floor() as u32;

    Ok((lo..=hi).filter(|m| m % bucket_minutes == 0).collect())
}

/// Build the cyclic period grid for a planning window of `day_hours` hours
/// starting at `start_hour:start_minute`.
///
/// The grid has `day_hours * 60 / bucket_minutes` periods.  Clock times wrap
/// past midnight, so a window starting at 18:15 ends with the bucket
/// `18:00–18:15` of the next day.
pub fn build_period_grid(
    day_hours:      u32,
    bucket_minutes: u32,
    start_hour:     u32,
    start_minute:   u32,
) -> ConfigResult<Vec<Period>> {
    if day_hours == 0 {
        return Err(ConfigError::ZeroDayLength);
    }
    if bucket_minutes == 0 {
        return Err(ConfigError::ZeroBucket);
    }
    let day_minutes = day_hours * 60;
    if day_minutes % bucket_minutes != 0 {
        return Err(ConfigError::BucketDoesNotDivideDay { bucket_minutes, day_minutes });
    }
    let start = ClockTime::from_hm(start_hour, start_minute)
        .ok_or(ConfigError::InvalidStartTime { hour: start_hour, minute: start_minute })?;

    let count = day_minutes / bucket_minutes;
    let periods: Vec<Period> = (0..count)
        .map(|i| {
            let begin = start.add_minutes(i * bucket_minutes);
            Period {
                id:           PeriodId(i),
                start:        begin,
                end:          begin.add_minutes(bucket_minutes),
                span_minutes: bucket_minutes,
                demand:       0,
            }
        })
        .collect();

    debug!(count, bucket_minutes, %start, "built period grid");
    Ok(periods)
}

/// Pair shift durations (minutes) with their per-agent costs.
///
/// Every duration must be a whole number of buckets and no longer than the
/// planning day; every cost must be finite and non-negative.
pub fn build_shift_table(
    durations:      &[u32],
    costs:          &[f64],
    bucket_minutes: u32,
    day_minutes:    u32,
) -> ConfigResult<Vec<ShiftType>> {
    if durations.len() != costs.len() {
        return Err(ConfigError::ShiftCostMismatch {
            durations: durations.len(),
            costs:     costs.len(),
        });
    }
    durations
        .iter()
        .zip(costs)
        .map(|(&minutes, &cost)| ShiftType::new(minutes, cost, bucket_minutes, day_minutes))
        .collect()
}
