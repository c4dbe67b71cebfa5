use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

use super::rates::SECONDS_PER_HOUR;
use crate::config::WorkConfig;
use crate::snapshot::Targets;

/// Weekday of `date` with Sunday = 0 … Saturday = 6.
pub fn weekday_index(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_sunday()
}

/// Working days are the contiguous block Monday (1) ..= `days_per_week`.
///
/// Sunday (0) is never a working day, not even with a seven-day week.
pub fn is_working_day(config: &WorkConfig, date: NaiveDate) -> bool {
    let weekday = weekday_index(date);
    weekday >= 1 && weekday <= u32::from(config.days_per_week)
}

/// True on a working day inside the half-open window `[start, end)`.
pub fn is_working_now(config: &WorkConfig, now: NaiveDateTime) -> bool {
    let hour = now.hour();
    is_working_day(config, now.date())
        && hour >= u32::from(config.work_start_hour)
        && hour < u32::from(config.work_end_hour)
}

/// Earnings accrued so far today at `rate` per second.
pub fn elapsed_earnings_today(config: &WorkConfig, rate: f64, now: NaiveDateTime) -> f64 {
    if !is_working_day(config, now.date()) {
        return 0.0;
    }

    let seconds_worked = if is_working_now(config, now) {
        let start = f64::from(config.work_start_hour) * SECONDS_PER_HOUR;
        (f64::from(now.num_seconds_from_midnight()) - start).max(0.0)
    } else if now.hour() >= u32::from(config.work_end_hour) {
        config.working_hours_per_day() * SECONDS_PER_HOUR
    } else {
        0.0
    };

    seconds_worked * rate
}

/// Completed working days earlier this week plus today's accrual.
///
/// Weeks start on Sunday (index 0), so earlier days are indices
/// `1 .. min(today, days_per_week + 1)`.
pub fn elapsed_earnings_this_week(config: &WorkConfig, targets: &Targets, now: NaiveDateTime) -> f64 {
    let today = weekday_index(now.date());
    let bound = today.min(u32::from(config.days_per_week) + 1);

    let completed: f64 = (1..bound).map(|_| targets.daily_target).sum();
    completed + elapsed_earnings_today(config, targets.earnings_per_second, now)
}

/// Completed working days earlier this calendar month plus today's accrual.
pub fn elapsed_earnings_this_month(config: &WorkConfig, targets: &Targets, now: NaiveDateTime) -> f64 {
    let date = now.date();
    let completed: f64 = (1..date.day())
        .filter_map(|day| NaiveDate::from_ymd_opt(date.year(), date.month(), day))
        .filter(|d| is_working_day(config, *d))
        .map(|_| targets.daily_target)
        .sum();
    completed + elapsed_earnings_today(config, targets.earnings_per_second, now)
}
