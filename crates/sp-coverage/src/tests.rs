//! Unit tests for sp-coverage.

use std::cell::Cell;

use sp_core::{ClockTime, ConfigError, Period, PeriodId, ShiftId, ShiftType, VarTag};

use crate::{
    build_coverage_model, coverage_window, solve_coverage, solve_coverage_with, CoverageError,
    CoverageModel, CoverageOptions, GoodLpSolver, MilpSolver, Sense, SolveOutcome, SolveStatus,
    SolverError, TagTable,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// `n` periods of `bucket` minutes starting at midnight.
fn grid(n: u32, bucket: u32) -> Vec<Period> {
    (0..n)
        .map(|i| Period {
            id:           PeriodId(i),
            start:        ClockTime::from_minutes(i * bucket),
            end:          ClockTime::from_minutes((i + 1) * bucket),
            span_minutes: bucket,
            demand:       0,
        })
        .collect()
}

/// Shift of `hours` on an hourly grid spanning `day_hours`.
fn hourly_shift(hours: u32, cost: f64, day_hours: u32) -> ShiftType {
    ShiftType::new(hours * 60, cost, 60, day_hours * 60).unwrap()
}

/// The standard fixture: a 24-hour day of one-hour periods with an 8-hour
/// shift at 100 and a 12-hour shift at 140.
fn fixture() -> (Vec<Period>, Vec<ShiftType>) {
    (grid(24, 60), vec![hourly_shift(8, 100.0, 24), hourly_shift(12, 140.0, 24)])
}

/// Engine stand-in that returns a canned outcome and counts calls.
struct CannedSolver {
    outcome: SolveOutcome,
    calls:   Cell<usize>,
}

impl CannedSolver {
    fn new(outcome: SolveOutcome) -> Self {
        Self { outcome, calls: Cell::new(0) }
    }
}

impl MilpSolver for CannedSolver {
    fn solve(&self, _model: &CoverageModel) -> SolveOutcome {
        self.calls.set(self.calls.get() + 1);
        self.outcome.clone()
    }
}

// ── coverage_window ───────────────────────────────────────────────────────────

#[cfg(test)]
mod window {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn wraps_below_zero() {
        assert_eq!(coverage_window(2, 4, 96), vec![2, 1, 0, 95]);
    }

    #[test]
    fn no_wrap_when_room() {
        assert_eq!(coverage_window(10, 3, 96), vec![10, 9, 8]);
    }

    #[test]
    fn full_day_window_is_every_period() {
        let mut w = coverage_window(0, 24, 24);
        w.sort_unstable();
        assert_eq!(w, (0..24).collect::<Vec<_>>());
    }

    #[test]
    fn single_bucket_is_anchor() {
        assert_eq!(coverage_window(95, 1, 96), vec![95]);
    }

    proptest! {
        #[test]
        fn window_members_are_the_last_len_starts(
            period_count in 1usize..200,
            anchor_seed in any::<usize>(),
            len_seed in any::<usize>(),
        ) {
            let anchor = anchor_seed % period_count;
            let len = 1 + len_seed % period_count;
            let w = coverage_window(anchor, len, period_count);

            prop_assert_eq!(w.len(), len);
            prop_assert_eq!(w[0], anchor);
            let mut distinct = w.clone();
            distinct.sort_unstable();
            distinct.dedup();
            prop_assert_eq!(distinct.len(), len);
            for &start in &w {
                prop_assert!(start < period_count);
                // Start `start` is at most len-1 periods before the anchor.
                prop_assert!((anchor + period_count - start) % period_count < len);
            }
        }
    }
}

// ── TagTable ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tags {
    use super::*;

    #[test]
    fn issues_dense_tags() {
        let mut t = TagTable::new();
        assert_eq!(t.issue(ShiftId(0), PeriodId(5)), VarTag(0));
        assert_eq!(t.issue(ShiftId(1), PeriodId(5)), VarTag(1));
        assert_eq!(t.len(), 2);
    }

    #[test]
    fn reissue_returns_same_tag() {
        let mut t = TagTable::new();
        let a = t.issue(ShiftId(3), PeriodId(1));
        let b = t.issue(ShiftId(3), PeriodId(1));
        assert_eq!(a, b);
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn lookups_both_ways() {
        let mut t = TagTable::new();
        let tag = t.issue(ShiftId(2), PeriodId(7));
        assert_eq!(t.pair(tag), Some((ShiftId(2), PeriodId(7))));
        assert_eq!(t.tag(ShiftId(2), PeriodId(7)), Some(tag));
        assert_eq!(t.pair(VarTag(99)), None);
        assert_eq!(t.tag(ShiftId(0), PeriodId(0)), None);
    }
}

// ── Model assembly ────────────────────────────────────────────────────────────

#[cfg(test)]
mod model {
    use super::*;

    #[test]
    fn one_variable_per_shift_and_start() {
        let (periods, shifts) = fixture();
        let m = build_coverage_model(&periods, &shifts, &[1; 24], &CoverageOptions::default()).unwrap();
        assert_eq!(m.var_count(), 48);
        assert_eq!(m.constraints.len(), 24);
        assert_eq!(m.tags.pair(VarTag(0)), Some((ShiftId(0), PeriodId(0))));
        assert_eq!(m.tags.pair(VarTag(24)), Some((ShiftId(1), PeriodId(0))));
        assert_eq!(m.costs[0], 100.0);
        assert_eq!(m.costs[47], 140.0);
    }

    #[test]
    fn demand_row_uses_circular_window() {
        let (periods, shifts) = fixture();
        let m = build_coverage_model(&periods, &shifts, &[3; 24], &CoverageOptions::default()).unwrap();
        let row = m.demand_row(PeriodId(2));
        assert_eq!(row.sense, Sense::AtLeast);
        assert_eq!(row.rhs, 3.0);
        assert_eq!(row.terms.len(), 8 + 12);

        let mut starts_8h: Vec<u32> = row
            .terms
            .iter()
            .filter_map(|&(t, _)| m.tags.pair(t))
            .filter(|&(s, _)| s == ShiftId(0))
            .map(|(_, p)| p.0)
            .collect();
        starts_8h.sort_unstable();
        assert_eq!(starts_8h, vec![0, 1, 2, 19, 20, 21, 22, 23]);
    }

    #[test]
    fn caps_and_ceiling_append_rows() {
        let periods = grid(24, 60);
        let shifts = vec![
            hourly_shift(8, 100.0, 24).with_max_agents(Some(3)),
            hourly_shift(12, 140.0, 24),
        ];
        let opts = CoverageOptions { cost_ceiling: Some(5_000.0) };
        let m = build_coverage_model(&periods, &shifts, &[0; 24], &opts).unwrap();
        assert_eq!(m.constraints.len(), 24 + 1 + 1);

        let cap = &m.constraints[24];
        assert_eq!(cap.sense, Sense::AtMost);
        assert_eq!(cap.rhs, 3.0);
        assert_eq!(cap.terms.len(), 24);

        let ceiling = &m.constraints[25];
        assert_eq!(ceiling.rhs, 5_000.0);
        assert_eq!(ceiling.terms.len(), 48);
    }

    #[test]
    fn demand_length_mismatch() {
        let (periods, shifts) = fixture();
        let err = build_coverage_model(&periods, &shifts, &[1; 23], &CoverageOptions::default()).unwrap_err();
        assert_eq!(err, CoverageError::DemandLength { expected: 24, got: 23 });
    }

    #[test]
    fn shift_longer_than_grid() {
        let periods = grid(4, 60);
        let shifts = vec![hourly_shift(8, 1.0, 24)];
        let err = build_coverage_model(&periods, &shifts, &[1; 4], &CoverageOptions::default()).unwrap_err();
        assert!(matches!(err, CoverageError::Config(ConfigError::ShiftLongerThanDay { .. })));
    }

    #[test]
    fn negative_ceiling_rejected() {
        let (periods, shifts) = fixture();
        let opts = CoverageOptions { cost_ceiling: Some(-1.0) };
        let err = build_coverage_model(&periods, &shifts, &[0; 24], &opts).unwrap_err();
        assert!(matches!(err, CoverageError::Config(ConfigError::InvalidParameter { .. })));
    }
}

// ── Solving with the bundled engine ───────────────────────────────────────────

#[cfg(test)]
mod solve {
    use super::*;

    #[test]
    fn zero_demand_costs_nothing() {
        let (periods, shifts) = fixture();
        let sol = solve_coverage(&periods, &shifts, &[0; 24]).unwrap();
        assert_eq!(sol.objective(), 0.0);
        assert!(sol.assignments().all(|a| a.count == 0));
        assert_eq!(sol.headcount(), 0);
    }

    #[test]
    fn flat_demand_picks_cheapest_tiling() {
        let (periods, shifts) = fixture();
        let demand = vec![5u32; 24];
        let sol = solve_coverage(&periods, &shifts, &demand).unwrap();

        // Cheapest cost per covered hour is the 12-hour shift (140 / 12 <
        // 100 / 8), and two 12-hour shifts tile the day exactly, so the
        // hour-weighted lower bound is attained.
        let total_demand: u32 = demand.iter().sum();
        let expected = total_demand as f64 * 140.0 / 12.0;
        assert_eq!(expected, 1_400.0);
        assert!((sol.objective() - expected).abs() < 1e-6, "objective {}", sol.objective());

        for (p, &c) in sol.coverage().iter().enumerate() {
            assert!(c >= demand[p], "period {p} covered by {c}");
        }
    }

    #[test]
    fn single_all_day_shift_covers_peak() {
        let periods = grid(24, 60);
        let shifts = vec![hourly_shift(24, 50.0, 24)];
        let demand: Vec<u32> = (0..24).map(|h| if (9..17).contains(&h) { 7 } else { 2 }).collect();
        let sol = solve_coverage(&periods, &shifts, &demand).unwrap();
        assert_eq!(sol.objective(), 7.0 * 50.0);
        assert_eq!(sol.headcount(), 7);
    }

    #[test]
    fn headcount_cap_below_peak_is_infeasible() {
        let periods = grid(24, 60);
        let shifts = vec![hourly_shift(8, 100.0, 24).with_max_agents(Some(2))];
        let mut demand = vec![0u32; 24];
        demand[10] = 3;
        let err = solve_coverage(&periods, &shifts, &demand).unwrap_err();
        assert_eq!(err, CoverageError::Solver(SolverError::Infeasible));
    }

    #[test]
    fn cost_ceiling_below_optimum_is_infeasible() {
        let (periods, shifts) = fixture();
        let opts = CoverageOptions { cost_ceiling: Some(1_000.0) };
        let err = solve_coverage_with(&GoodLpSolver, &periods, &shifts, &[5; 24], &opts).unwrap_err();
        assert_eq!(err, CoverageError::Solver(SolverError::Infeasible));
    }

    #[test]
    fn tags_round_trip_through_solution() {
        let (periods, shifts) = fixture();
        let sol = solve_coverage(&periods, &shifts, &[2; 24]).unwrap();
        for a in sol.assignments() {
            let back = sol.assignment(a.tag).unwrap();
            assert_eq!(back, a);
            assert_eq!(sol.tags().pair(a.tag), Some((a.shift, a.start)));
            assert_eq!(sol.count(a.shift, a.start), Some(a.count));
        }
    }
}

// ── Status handling ───────────────────────────────────────────────────────────

#[cfg(test)]
mod status {
    use super::*;

    #[test]
    fn uncoverable_period_is_infeasible_without_engine() {
        let periods = grid(24, 60);
        let engine = CannedSolver::new(SolveOutcome::Optimal(vec![]));
        let err = solve_coverage_with(&engine, &periods, &[], &[1; 24], &CoverageOptions::default())
            .unwrap_err();
        assert_eq!(err, CoverageError::Solver(SolverError::Infeasible));
        assert_eq!(engine.calls.get(), 0);
    }

    #[test]
    fn no_shifts_no_demand_is_optimal() {
        let periods = grid(24, 60);
        let sol = solve_coverage(&periods, &[], &[0; 24]).unwrap();
        assert_eq!(sol.objective(), 0.0);
        assert_eq!(sol.tags().len(), 0);
    }

    #[test]
    fn not_solved_is_surfaced_verbatim() {
        let (periods, shifts) = fixture();
        let engine = CannedSolver::new(SolveOutcome::NotSolved("time limit".into()));
        let err = solve_coverage_with(&engine, &periods, &shifts, &[1; 24], &CoverageOptions::default())
            .unwrap_err();
        assert_eq!(err, CoverageError::Solver(SolverError::NotSolved("time limit".into())));
        assert_eq!(engine.calls.get(), 1);
    }

    #[test]
    fn unbounded_is_surfaced() {
        let (periods, shifts) = fixture();
        let engine = CannedSolver::new(SolveOutcome::Unbounded);
        let err = solve_coverage_with(&engine, &periods, &shifts, &[1; 24], &CoverageOptions::default())
            .unwrap_err();
        let CoverageError::Solver(e) = err else { panic!("expected solver error") };
        assert_eq!(e.status(), SolveStatus::Unbounded);
    }

    #[test]
    fn non_integral_values_rejected() {
        let (periods, shifts) = fixture();
        let engine = CannedSolver::new(SolveOutcome::Optimal(vec![0.5; 48]));
        let err = solve_coverage_with(&engine, &periods, &shifts, &[0; 24], &CoverageOptions::default())
            .unwrap_err();
        assert!(matches!(err, CoverageError::Solver(SolverError::NotSolved(_))));
    }

    #[test]
    fn wrong_value_count_rejected() {
        let (periods, shifts) = fixture();
        let engine = CannedSolver::new(SolveOutcome::Optimal(vec![0.0; 3]));
        let err = solve_coverage_with(&engine, &periods, &shifts, &[0; 24], &CoverageOptions::default())
            .unwrap_err();
        assert!(matches!(err, CoverageError::Solver(SolverError::NotSolved(_))));
    }

    #[test]
    fn canned_optimal_is_decoded() {
        let (periods, shifts) = fixture();
        let mut values = vec![0.0; 48];
        values[24 + 11] = 5.0; // 12 h from 11:00
        values[24 + 23] = 5.0; // 12 h from 23:00
        let engine = CannedSolver::new(SolveOutcome::Optimal(values));
        let sol = solve_coverage_with(&engine, &periods, &shifts, &[5; 24], &CoverageOptions::default())
            .unwrap();
        assert_eq!(sol.objective(), 1_400.0);
        assert_eq!(sol.count(ShiftId(1), PeriodId(11)), Some(5));
        assert!(sol.coverage().iter().all(|&c| c == 5));
    }

    #[test]
    fn status_display() {
        assert_eq!(SolveStatus::NotSolved.to_string(), "Not Solved");
        assert_eq!(SolverError::Infeasible.status(), SolveStatus::Infeasible);
    }
}
