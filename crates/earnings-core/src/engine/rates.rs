use crate::config::{SalaryType, WorkConfig};
use crate::error::ValidationError;
use crate::snapshot::Targets;

pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Average calendar days per month. Fixed, never derived from the actual month.
pub const AVG_DAYS_PER_MONTH: f64 = 30.44;

/// Convert the configured salary into an annual figure.
pub fn annual_salary(config: &WorkConfig) -> f64 {
    match config.salary_type {
        SalaryType::Monthly => config.salary_amount * 12.0,
        SalaryType::Annual => config.salary_amount,
        SalaryType::Hourly => {
            config.salary_amount * config.working_hours_per_day() * config.working_days_per_year()
        }
        SalaryType::Unknown => 0.0,
    }
}

/// Annual salary spread over every working second of the year.
///
/// # Errors
/// Returns a [`ValidationError`] for a configuration whose working window is
/// empty, instead of producing an infinite or NaN rate.
pub fn earnings_per_second(config: &WorkConfig) -> Result<f64, ValidationError> {
    Ok(targets(config)?.earnings_per_second)
}

/// Rate and full-period targets for a configuration.
///
/// The daily target is `annual / working_days_per_year`; the per-second
/// rate is derived from it so a fully worked day always accrues exactly
/// the daily target.
///
/// # Errors
/// Returns the first validation failure of `config`.
pub fn targets(config: &WorkConfig) -> Result<Targets, ValidationError> {
    config.validate()?;

    let daily_target = annual_salary(config) / config.working_days_per_year();
    let earnings_per_second = daily_target / (config.working_hours_per_day() * SECONDS_PER_HOUR);
    let days = f64::from(config.days_per_week);

    Ok(Targets {
        earnings_per_second,
        daily_target,
        weekly_target: daily_target * days,
        monthly_target: daily_target * (days / 7.0) * AVG_DAYS_PER_MONTH,
    })
}
