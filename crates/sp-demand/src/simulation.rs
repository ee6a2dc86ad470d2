//! Single-period call simulation.

use rand::Rng;

use sp_core::{DataError, DataResult};
use sp_duration::DurationModel;

use crate::DemandParams;

// ── Event and agent state ─────────────────────────────────────────────────────

/// One simulated call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CallEvent {
    /// Seconds from the start of the period.
    pub arrival:  f64,
    /// Service time in seconds.
    pub duration: f64,
}

/// An agent created during one period's simulation.  Discarded with it.
#[derive(Clone, Copy, Debug)]
struct SimulatedAgent {
    busy_until: f64,
}

impl SimulatedAgent {
    /// Rested before `deadline`?
    #[inline]
    fn available_before(&self, deadline: f64, rest_secs: f64) -> bool {
        deadline > self.busy_until + rest_secs
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Draw `volume` calls for a period of `window_secs` seconds, sorted by
/// arrival.
///
/// All arrival offsets are drawn first, then one duration per call in
/// arrival order: `|model(u)|` with `u` uniform in `[0, 1)`.
///
/// # Errors
/// `DataError::NonNumericDuration` if the model returns NaN or infinity.
pub fn draw_calls<M, R>(
    volume:      u32,
    window_secs: f64,
    model:       &M,
    rng:         &mut R,
) -> DataResult<Vec<CallEvent>>
where
    M: DurationModel + ?Sized,
    R: Rng + ?Sized,
{
    if volume == 0 {
        return Ok(vec![]);
    }
    let mut arrivals: Vec<f64> = (0..volume)
        .map(|_| if window_secs > 0.0 { rng.gen_range(0.0..window_secs) } else { 0.0 })
        .collect();
    arrivals.sort_by(f64::total_cmp);

    arrivals
        .into_iter()
        .map(|arrival| {
            let draw: f64 = rng.r#gen();
            let value = model.evaluate(draw);
            if !value.is_finite() {
                return Err(DataError::NonNumericDuration { draw, value });
            }
            Ok(CallEvent { arrival, duration: value.abs() })
        })
        .collect()
}

/// Number of agents needed to serve `calls` (sorted by arrival) so that no
/// caller waits `max_wait_secs` or longer.
///
/// Agents are scanned in creation order; the first one that will be rested
/// before the caller's patience runs out takes the call, starting at
/// `max(arrival, busy_until + rest)`.  If none qualifies, a new agent is
/// created and answers immediately.
pub fn required_agents(calls: &[CallEvent], params: &DemandParams) -> u32 {
    let mut agents: Vec<SimulatedAgent> = Vec::new();

    for call in calls {
        let deadline = call.arrival + params.max_wait_secs;
        match agents
            .iter_mut()
            .find(|a| a.available_before(deadline, params.rest_secs))
        {
            Some(agent) => {
                let start = call.arrival.max(agent.busy_until + params.rest_secs);
                agent.busy_until = start + call.duration;
            }
            None => agents.push(SimulatedAgent { busy_until: call.arrival + call.duration }),
        }
    }

    agents.len() as u32
}

/// Draw one period's calls and return the agents they need.
pub fn simulate_period<M, R>(
    volume:      u32,
    window_secs: f64,
    model:       &M,
    params:      &DemandParams,
    rng:         &mut R,
) -> DataResult<u32>
where
    M: DurationModel + ?Sized,
    R: Rng + ?Sized,
{
    let calls = draw_calls(volume, window_secs, model, rng)?;
    Ok(required_agents(&calls, params))
}
