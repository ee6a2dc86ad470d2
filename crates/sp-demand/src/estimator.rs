//! Demand estimation over the whole period grid.

use sp_core::{DataError, DataResult, Period, PeriodId, PeriodRng};
use sp_duration::DurationModel;
use tracing::{debug, info};

use crate::{simulate_period, DemandParams};

/// Largest call volume simulated for a single period.
pub const MAX_CALL_VOLUME: i64 = 1_000_000;

/// Check call volumes against the grid and convert them to counts.
///
/// Fails on the first period with no volume, a negative volume, or more
/// than [`MAX_CALL_VOLUME`] calls.
pub fn validate_call_volumes(periods: &[Period], call_volumes: &[i64]) -> DataResult<Vec<u32>> {
    periods
        .iter()
        .map(|p| match call_volumes.get(p.id.index()) {
            None => Err(DataError::MissingCallVolume { period: p.id }),
            Some(&v) if v < 0 => Err(DataError::NegativeCallVolume { period: p.id, value: v }),
            Some(&v) if v > MAX_CALL_VOLUME => Err(DataError::CallVolumeTooLarge {
                period: p.id,
                value:  v,
                max:    MAX_CALL_VOLUME,
            }),
            Some(&v) => Ok(v as u32),
        })
        .collect()
}

/// Estimate the demand of every period.
///
/// `call_volumes[i]` is the expected number of calls in `periods[i]`.  Each
/// period is simulated once with its own [`PeriodRng`] derived from
/// `seed`, so the result depends only on the inputs and the seed, whether
/// or not the `parallel` feature is on.
///
/// All volumes are validated before any simulation runs.
pub fn estimate_demand<M>(
    periods:      &[Period],
    call_volumes: &[i64],
    model:        &M,
    params:       &DemandParams,
    seed:         u64,
) -> DataResult<Vec<u32>>
where
    M: DurationModel + ?Sized,
{
    let volumes = validate_call_volumes(periods, call_volumes)?;

    let one = |period: &Period, volume: u32| -> DataResult<u32> {
        let mut rng = PeriodRng::new(seed, period.id);
        let demand = simulate_period(volume, period.span_secs(), model, params, rng.inner())?;
        debug!(period = %period, volume, demand, "simulated period");
        Ok(demand)
    };

    #[cfg(not(feature = "parallel"))]
    let demand: Vec<u32> = periods
        .iter()
        .zip(&volumes)
        .map(|(p, &v)| one(p, v))
        .collect::<DataResult<_>>()?;

    #[cfg(feature = "parallel")]
    let demand: Vec<u32> = {
        use rayon::prelude::*;

        periods
            .par_iter()
            .zip(volumes.par_iter())
            .map(|(p, &v)| one(p, v))
            .collect::<DataResult<_>>()?
    };

    let peak = demand.iter().copied().max().unwrap_or(0);
    let busiest = demand
        .iter()
        .position(|&d| d == peak)
        .map(|i| PeriodId(i as u32));
    info!(
        periods = demand.len(),
        total_calls = volumes.iter().map(|&v| v as u64).sum::<u64>(),
        peak,
        ?busiest,
        "estimated demand"
    );
    Ok(demand)
}

/// Copy a demand vector onto the grid's `Period::demand` fields.
///
/// # Panics
/// Panics if the lengths differ.
pub fn apply_demand(periods: &mut [Period], demand: &[u32]) {
    assert_eq!(periods.len(), demand.len(), "demand length must match the period grid");
    for (p, &d) in periods.iter_mut().zip(demand) {
        p.demand = d;
    }
}
