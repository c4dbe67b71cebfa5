//! Property tests for the earnings engine.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use earnings_core::engine::{
    annual_salary, elapsed_earnings_today, is_working_day, is_working_now, targets,
    weekday_index,
};
use earnings_core::config::MAX_SALARY_AMOUNT;
use earnings_core::{ConfigField, SalaryType, WorkConfig};
use proptest::prelude::*;

fn salary_type() -> impl Strategy<Value = SalaryType> {
    prop_oneof![
        Just(SalaryType::Monthly),
        Just(SalaryType::Annual),
        Just(SalaryType::Hourly),
    ]
}

prop_compose! {
    fn valid_config()(
        salary_type in salary_type(),
        salary_amount in 0.0f64..1_000_000.0,
        days_per_week in 1u8..=7,
        start in 0u8..23,
    )(
        salary_type in Just(salary_type),
        salary_amount in Just(salary_amount),
        days_per_week in Just(days_per_week),
        work_start_hour in Just(start),
        work_end_hour in (start + 1)..=23,
    ) -> WorkConfig {
        WorkConfig { salary_type, salary_amount, days_per_week, work_start_hour, work_end_hour }
    }
}

prop_compose! {
    fn local_time()(day in 0i64..730, secs in 0u32..86_400) -> NaiveDateTime {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + Duration::days(day);
        date.and_hms_opt(secs / 3600, (secs / 60) % 60, secs % 60).unwrap()
    }
}

proptest! {
    #[test]
    fn monthly_salary_is_times_twelve(mut cfg in valid_config()) {
        cfg.salary_type = SalaryType::Monthly;
        prop_assert_eq!(annual_salary(&cfg), cfg.salary_amount * 12.0);
    }

    #[test]
    fn weekly_target_is_daily_times_days(cfg in valid_config()) {
        let t = targets(&cfg).unwrap();
        prop_assert_eq!(t.weekly_target, t.daily_target * f64::from(cfg.days_per_week));
    }

    #[test]
    fn monthly_target_uses_fixed_month_length(cfg in valid_config()) {
        let t = targets(&cfg).unwrap();
        let days = f64::from(cfg.days_per_week);
        prop_assert_eq!(t.monthly_target, t.daily_target * (days / 7.0) * 30.44);
    }

    #[test]
    fn targets_are_idempotent(cfg in valid_config()) {
        let a = targets(&cfg).unwrap();
        let b = targets(&cfg).unwrap();
        prop_assert_eq!(a.earnings_per_second.to_bits(), b.earnings_per_second.to_bits());
        prop_assert_eq!(a.daily_target.to_bits(), b.daily_target.to_bits());
        prop_assert_eq!(a.weekly_target.to_bits(), b.weekly_target.to_bits());
        prop_assert_eq!(a.monthly_target.to_bits(), b.monthly_target.to_bits());
    }

    #[test]
    fn rates_are_finite(cfg in valid_config()) {
        let t = targets(&cfg).unwrap();
        prop_assert!(t.earnings_per_second.is_finite());
        prop_assert!(t.daily_target.is_finite());
    }

    #[test]
    fn never_working_outside_days_or_hours(cfg in valid_config(), now in local_time()) {
        let weekday = weekday_index(now.date());
        let hour = chrono::Timelike::hour(&now) as u8;
        if weekday == 0
            || weekday > u32::from(cfg.days_per_week)
            || hour < cfg.work_start_hour
            || hour >= cfg.work_end_hour
        {
            prop_assert!(!is_working_now(&cfg, now));
        } else {
            prop_assert!(is_working_now(&cfg, now));
        }
    }

    #[test]
    fn today_is_monotonic_within_a_day(cfg in valid_config(), day in 0i64..730, a in 0u32..86_400, b in 0u32..86_400) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + Duration::days(day);
        let at = |s: u32| date.and_hms_opt(s / 3600, (s / 60) % 60, s % 60).unwrap();
        let rate = targets(&cfg).unwrap().earnings_per_second;
        prop_assert!(elapsed_earnings_today(&cfg, rate, at(lo)) <= elapsed_earnings_today(&cfg, rate, at(hi)));
    }

    #[test]
    fn today_resets_at_midnight(cfg in valid_config(), day in 0i64..730) {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + Duration::days(day);
        let rate = targets(&cfg).unwrap().earnings_per_second;
        let midnight = date.and_hms_opt(0, 0, 0).unwrap();
        prop_assert_eq!(elapsed_earnings_today(&cfg, rate, midnight), 0.0);
    }

    #[test]
    fn today_resets_before_next_working_day_starts(cfg in valid_config(), day in 0i64..730) {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + Duration::days(day);
        let t = targets(&cfg).unwrap();
        let working_days: Vec<NaiveDate> = (0..15)
            .map(|i| start + Duration::days(i))
            .filter(|d| is_working_day(&cfg, *d))
            .take(2)
            .collect();
        prop_assume!(working_days.len() == 2);
        let (day_n, next) = (working_days[0], working_days[1]);

        let after_work = day_n.and_hms_opt(u32::from(cfg.work_end_hour), 0, 0).unwrap();
        let full_day = elapsed_earnings_today(&cfg, t.earnings_per_second, after_work);
        prop_assert!((full_day - t.daily_target).abs() <= 1e-9 * t.daily_target.max(1.0));

        let opening = next.and_hms_opt(u32::from(cfg.work_start_hour), 0, 0).unwrap();
        prop_assert_eq!(elapsed_earnings_today(&cfg, t.earnings_per_second, opening), 0.0);
        if cfg.work_start_hour > 0 {
            let before_work = next.and_hms_opt(u32::from(cfg.work_start_hour) - 1, 59, 59).unwrap();
            prop_assert_eq!(elapsed_earnings_today(&cfg, t.earnings_per_second, before_work), 0.0);
        }
    }

    #[test]
    fn any_accepted_salary_keeps_figures_finite(
        mut cfg in valid_config(),
        salary_amount in 0.0f64..=MAX_SALARY_AMOUNT,
        now in local_time(),
    ) {
        cfg.salary_amount = salary_amount;
        let t = targets(&cfg).unwrap();
        for value in [t.earnings_per_second, t.daily_target, t.weekly_target, t.monthly_target] {
            prop_assert!(value.is_finite());
        }
        prop_assert!(elapsed_earnings_today(&cfg, t.earnings_per_second, now).is_finite());
    }
}

#[test]
fn documented_example_values() {
    let cfg = WorkConfig::default();
    let t = targets(&cfg).unwrap();
    assert_eq!(annual_salary(&cfg), 37_800.0);
    assert!((cfg.working_days_per_year() - 260.714).abs() < 1e-3);
    assert_eq!(cfg.working_hours_per_day(), 9.0);
    assert!((t.earnings_per_second - 0.004474).abs() < 1e-5);
    assert!((t.daily_target - 145.0).abs() < 0.05);

    // Wednesday 2025-01-15, noon.
    let noon = NaiveDate::from_ymd_opt(2025, 1, 15)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();
    let earned = elapsed_earnings_today(&cfg, t.earnings_per_second, noon);
    assert!((earned - 64.43).abs() < 0.05);
}

#[test]
fn equal_start_and_end_is_rejected() {
    let cfg = WorkConfig {
        work_start_hour: 12,
        work_end_hour: 12,
        ..WorkConfig::default()
    };
    assert!(targets(&cfg).is_err());
}

#[test]
fn salary_too_large_for_the_engine_is_rejected() {
    let cfg = WorkConfig {
        salary_amount: 1e308,
        ..WorkConfig::default()
    };
    assert!(targets(&cfg).is_err());
    assert!(WorkConfig::default()
        .apply(ConfigField::SalaryAmount, "1e308")
        .is_err());
}
