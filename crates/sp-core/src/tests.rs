//! Unit tests for sp-core primitives.

#[cfg(test)]
mod ids {
    use crate::{PeriodId, ShiftId, VarTag};

    #[test]
    fn index_roundtrip() {
        let id = PeriodId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(PeriodId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn shift_id_rejects_overflow() {
        assert!(ShiftId::try_from(70_000usize).is_err());
    }

    #[test]
    fn display() {
        assert_eq!(VarTag(7).to_string(), "VarTag(7)");
    }
}

#[cfg(test)]
mod time {
    use crate::{ClockTime, Period, PeriodId};

    #[test]
    fn from_hm_bounds() {
        assert!(ClockTime::from_hm(23, 59).is_some());
        assert!(ClockTime::from_hm(24, 0).is_none());
        assert!(ClockTime::from_hm(10, 60).is_none());
    }

    #[test]
    fn add_minutes_wraps_past_midnight() {
        let t = ClockTime::from_hm(23, 45).unwrap();
        assert_eq!(t.add_minutes(15), ClockTime::MIDNIGHT);
        assert_eq!(t.add_minutes(30), ClockTime::from_hm(0, 15).unwrap());
        // A full day is a no-op.
        assert_eq!(t.add_minutes(1_440), t);
    }

    #[test]
    fn display_is_hms() {
        assert_eq!(ClockTime::from_hm(8, 5).unwrap().to_string(), "08:05:00");
    }

    #[test]
    fn parse_accepts_both_forms() {
        let t: ClockTime = "18:15".parse().unwrap();
        assert_eq!(t, ClockTime::from_hm(18, 15).unwrap());
        let t: ClockTime = "18:15:00".parse().unwrap();
        assert_eq!(t, ClockTime::from_hm(18, 15).unwrap());
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("25:00".parse::<ClockTime>().is_err());
        assert!("12:30:15".parse::<ClockTime>().is_err());
        assert!("noon".parse::<ClockTime>().is_err());
    }

    #[test]
    fn period_helpers() {
        let p = Period {
            id:           PeriodId(95),
            start:        ClockTime::from_hm(23, 45).unwrap(),
            end:          ClockTime::MIDNIGHT,
            span_minutes: 15,
            demand:       0,
        };
        assert_eq!(p.label(), 96);
        assert_eq!(p.span_secs(), 900.0);
        assert!(p.crosses_midnight());
    }
}

#[cfg(test)]
mod shift {
    use crate::{whole_minutes, ConfigError, ShiftType};

    #[test]
    fn whole_bucket_shift_accepted() {
        let s = ShiftType::new(30, 100.0, 15, 1_440).unwrap();
        assert_eq!(s.buckets, 2);
        assert_eq!(s.hours(), 0.5);
    }

    #[test]
    fn fractional_bucket_shift_rejected() {
        let err = ShiftType::new(24, 100.0, 15, 1_440).unwrap_err();
        assert_eq!(err, ConfigError::ShiftNotWholeBuckets { shift_minutes: 24, bucket_minutes: 15 });
    }

    #[test]
    fn shift_longer_than_day_rejected() {
        assert!(matches!(
            ShiftType::new(600, 100.0, 60, 480),
            Err(ConfigError::ShiftLongerThanDay { .. })
        ));
    }

    #[test]
    fn negative_cost_rejected() {
        assert!(matches!(
            ShiftType::new(60, -1.0, 15, 1_440),
            Err(ConfigError::InvalidCost { .. })
        ));
    }

    #[test]
    fn label_format() {
        let s = ShiftType::new(510, 1.0, 15, 1_440).unwrap();
        assert_eq!(s.label(), "08h30");
    }

    #[test]
    fn whole_minutes_tolerates_decimal_error() {
        assert_eq!(whole_minutes(0.1).unwrap(), 6);
        assert_eq!(whole_minutes(8.5).unwrap(), 510);
        assert!(whole_minutes(0.001).is_err());
    }
}

#[cfg(test)]
mod config {
    use crate::{ConfigError, PlanConfig, ShiftSpec};

    fn cfg() -> PlanConfig {
        PlanConfig {
            shifts: vec![
                ShiftSpec { hours: 6.0, cost: 540.0, max_agents: None },
                ShiftSpec { hours: 8.0, cost: 700.0, max_agents: Some(10) },
            ],
            ..PlanConfig::default()
        }
    }

    #[test]
    fn defaults_validate() {
        let c = cfg();
        c.validate().unwrap();
        assert_eq!(c.period_count(), 96);
        assert_eq!(c.shift_types().unwrap()[1].max_agents, Some(10));
    }

    #[test]
    fn bucket_must_divide_day() {
        let c = PlanConfig { bucket_minutes: 7, ..cfg() };
        assert_eq!(
            c.validate().unwrap_err(),
            ConfigError::BucketDoesNotDivideDay { bucket_minutes: 7, day_minutes: 1_440 }
        );
    }

    #[test]
    fn degree_limit() {
        let c = PlanConfig { poly_degree: 11, ..cfg() };
        assert_eq!(c.validate().unwrap_err(), ConfigError::InvalidDegree { degree: 11 });
    }

    #[test]
    fn bad_start_time() {
        let c = PlanConfig { start_hour: 24, ..cfg() };
        assert!(matches!(c.validate(), Err(ConfigError::InvalidStartTime { .. })));
    }

    #[test]
    fn negative_wait_rejected() {
        let c = PlanConfig { max_wait_secs: -1.0, ..cfg() };
        assert!(matches!(c.validate(), Err(ConfigError::InvalidParameter { name: "max_wait_secs", .. })));
    }

    #[test]
    fn shift_not_on_bucket_grid() {
        let c = PlanConfig { bucket_minutes: 60, shifts: vec![ShiftSpec { hours: 7.5, cost: 1.0, max_agents: None }], ..cfg() };
        assert!(matches!(c.validate(), Err(ConfigError::ShiftNotWholeBuckets { .. })));
    }

    #[test]
    fn parses_from_toml_with_defaults() {
        let text = r#"
            day_hours = 12
            start_hour = 18
            start_minute = 15

            [[shifts]]
            hours = 6
            cost = 540
        "#;
        let c: PlanConfig = toml::from_str(text).unwrap();
        assert_eq!(c.bucket_minutes, 15);
        assert_eq!(c.max_wait_secs, 10.0);
        assert_eq!(c.poly_degree, 2);
        assert_eq!(c.seed, None);
        assert_eq!(c.shifts.len(), 1);
        c.validate().unwrap();
    }
}

#[cfg(test)]
mod rng {
    use rand::Rng;

    use crate::{PeriodId, PeriodRng, SimRng};

    fn draws(rng: &mut PeriodRng, n: usize) -> Vec<f64> {
        (0..n).map(|_| rng.inner().r#gen::<f64>()).collect()
    }

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = PeriodRng::new(12345, PeriodId(0));
        let mut r2 = PeriodRng::new(12345, PeriodId(0));
        assert_eq!(draws(&mut r1, 100), draws(&mut r2, 100));
    }

    #[test]
    fn different_periods_differ() {
        let mut r0 = PeriodRng::new(1, PeriodId(0));
        let mut r1 = PeriodRng::new(1, PeriodId(1));
        assert_ne!(draws(&mut r0, 4), draws(&mut r1, 4));
    }

    #[test]
    fn different_run_seeds_differ() {
        let mut a = PeriodRng::new(1, PeriodId(3));
        let mut b = PeriodRng::new(2, PeriodId(3));
        assert_ne!(draws(&mut a, 4), draws(&mut b, 4));
    }

    #[test]
    fn entropy_seeds_vary() {
        let seeds: Vec<u64> = (0..4).map(|_| SimRng::draw_seed()).collect();
        assert!(seeds.windows(2).any(|w| w[0] != w[1]));
    }
}
