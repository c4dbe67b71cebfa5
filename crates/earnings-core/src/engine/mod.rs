//! Earnings engine.
//!
//! Pure functions from a [`WorkConfig`](crate::config::WorkConfig) and a
//! local wall-clock time to rates, period targets and elapsed earnings.
//! Nothing here reads the clock; callers pass `now` in.

mod elapsed;
mod rates;

pub use elapsed::{
    elapsed_earnings_this_month, elapsed_earnings_this_week, elapsed_earnings_today,
    is_working_day, is_working_now, weekday_index,
};
pub use rates::{annual_salary, earnings_per_second, targets, AVG_DAYS_PER_MONTH, SECONDS_PER_HOUR};
