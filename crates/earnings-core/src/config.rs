//! Work configuration: salary and schedule as entered by the user.
//!
//! The persisted layout uses camelCase keys so blobs written by older
//! versions keep loading. Every field has a default, so a blob missing a
//! later-added key still yields a complete configuration. The legacy
//! `hoursPerDay` key is ignored: hours per day are always derived from
//! the start/end hours.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// How `salary_amount` is denominated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SalaryType {
    Monthly,
    Annual,
    Hourly,
    /// Any unrecognised stored value. Earns nothing.
    #[serde(other)]
    Unknown,
}

impl SalaryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SalaryType::Monthly => "monthly",
            SalaryType::Annual => "annual",
            SalaryType::Hourly => "hourly",
            SalaryType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for SalaryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SalaryType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "monthly" | "mensal" => Ok(SalaryType::Monthly),
            "annual" | "anual" => Ok(SalaryType::Annual),
            "hourly" | "por-hora" => Ok(SalaryType::Hourly),
            other => Err(ValidationError::UnknownSalaryType(other.to_string())),
        }
    }
}

/// User-entered schedule and pay data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkConfig {
    #[serde(default = "default_salary_type")]
    pub salary_type: SalaryType,
    #[serde(default = "default_salary_amount")]
    pub salary_amount: f64,
    #[serde(default = "default_days_per_week")]
    pub days_per_week: u8,
    #[serde(default = "default_work_start_hour")]
    pub work_start_hour: u8,
    #[serde(default = "default_work_end_hour")]
    pub work_end_hour: u8,
}

fn default_salary_type() -> SalaryType {
    SalaryType::Monthly
}
fn default_salary_amount() -> f64 {
    3150.0
}
fn default_days_per_week() -> u8 {
    5
}
fn default_work_start_hour() -> u8 {
    8
}
fn default_work_end_hour() -> u8 {
    17
}

impl Default for WorkConfig {
    fn default() -> Self {
        Self {
            salary_type: default_salary_type(),
            salary_amount: default_salary_amount(),
            days_per_week: default_days_per_week(),
            work_start_hour: default_work_start_hour(),
            work_end_hour: default_work_end_hour(),
        }
    }
}

/// Largest accepted salary amount. Every derived figure stays finite up to it,
/// hourly wages over a 23-hour, seven-day week included.
pub const MAX_SALARY_AMOUNT: f64 = 1e12;

/// An editable field of [`WorkConfig`], with the bounds the settings form declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigField {
    SalaryType,
    SalaryAmount,
    DaysPerWeek,
    WorkStartHour,
    WorkEndHour,
}

impl ConfigField {
    pub const ALL: [ConfigField; 5] = [
        ConfigField::SalaryType,
        ConfigField::SalaryAmount,
        ConfigField::DaysPerWeek,
        ConfigField::WorkStartHour,
        ConfigField::WorkEndHour,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ConfigField::SalaryType => "salary-type",
            ConfigField::SalaryAmount => "salary-amount",
            ConfigField::DaysPerWeek => "days-per-week",
            ConfigField::WorkStartHour => "work-start-hour",
            ConfigField::WorkEndHour => "work-end-hour",
        }
    }

    /// Inclusive `(min, max)` bounds; `None` for the salary type selector.
    pub fn bounds(&self) -> Option<(f64, Option<f64>)> {
        match self {
            ConfigField::SalaryType => None,
            ConfigField::SalaryAmount => Some((0.0, Some(MAX_SALARY_AMOUNT))),
            ConfigField::DaysPerWeek => Some((1.0, Some(7.0))),
            ConfigField::WorkStartHour | ConfigField::WorkEndHour => Some((0.0, Some(23.0))),
        }
    }

    fn is_integer(&self) -> bool {
        !matches!(self, ConfigField::SalaryType | ConfigField::SalaryAmount)
    }

    /// Parse raw text the way the numeric inputs do: number, then min, then max.
    fn parse_number(&self, raw: &str) -> Result<f64, ValidationError> {
        let field = self.name().to_string();
        let value: f64 = raw
            .trim()
            .parse()
            .ok()
            .filter(|v: &f64| v.is_finite())
            .ok_or(ValidationError::NotANumber { field })?;
        self.check(value)?;
        Ok(value)
    }

    /// Integer and min/max checks for an already parsed value.
    fn check(&self, value: f64) -> Result<(), ValidationError> {
        let field = self.name().to_string();
        if self.is_integer() && value.fract() != 0.0 {
            return Err(ValidationError::NotAnInteger { field });
        }
        if let Some((min, max)) = self.bounds() {
            if value < min {
                return Err(ValidationError::BelowMin { field, min });
            }
            if let Some(max) = max {
                if value > max {
                    return Err(ValidationError::AboveMax { field, max });
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for ConfigField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ConfigField {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace('_', "-").to_lowercase();
        ConfigField::ALL
            .into_iter()
            .find(|f| f.name() == normalized)
            .ok_or_else(|| ValidationError::UnknownField(s.to_string()))
    }
}

impl WorkConfig {
    /// Hours in the working window (`work_end_hour - work_start_hour`).
    ///
    /// Negative for an inverted window; [`WorkConfig::validate`] rejects those.
    pub fn working_hours_per_day(&self) -> f64 {
        f64::from(self.work_end_hour) - f64::from(self.work_start_hour)
    }

    /// `365 × daysPerWeek / 7`.
    pub fn working_days_per_year(&self) -> f64 {
        365.0 * (f64::from(self.days_per_week) / 7.0)
    }

    /// Check every invariant the engine relies on.
    ///
    /// # Errors
    /// Returns the first violated bound, or [`ValidationError::EmptyWorkWindow`]
    /// when the end hour does not come after the start hour.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let amount = self.salary_amount;
        if !amount.is_finite() {
            return Err(ValidationError::NotANumber {
                field: ConfigField::SalaryAmount.name().into(),
            });
        }
        for (field, value) in [
            (ConfigField::SalaryAmount, amount),
            (ConfigField::DaysPerWeek, f64::from(self.days_per_week)),
            (ConfigField::WorkStartHour, f64::from(self.work_start_hour)),
            (ConfigField::WorkEndHour, f64::from(self.work_end_hour)),
        ] {
            field.check(value)?;
        }
        if self.work_end_hour <= self.work_start_hour {
            return Err(ValidationError::EmptyWorkWindow {
                start: self.work_start_hour,
                end: self.work_end_hour,
            });
        }
        Ok(())
    }

    /// Return a copy with `field` set from raw user input.
    ///
    /// `self` is never modified, so a rejected edit leaves the last valid
    /// configuration in effect.
    ///
    /// # Errors
    /// Returns the validation message for the field, or for the whole
    /// configuration if the edit empties the working window.
    pub fn apply(&self, field: ConfigField, raw: &str) -> Result<WorkConfig, ValidationError> {
        let mut next = self.clone();
        match field {
            ConfigField::SalaryType => next.salary_type = raw.parse()?,
            // Bounds already checked, so the integer casts cannot truncate.
            ConfigField::SalaryAmount => next.salary_amount = field.parse_number(raw)?,
            ConfigField::DaysPerWeek => next.days_per_week = field.parse_number(raw)? as u8,
            ConfigField::WorkStartHour => next.work_start_hour = field.parse_number(raw)? as u8,
            ConfigField::WorkEndHour => next.work_end_hour = field.parse_number(raw)? as u8,
        }
        next.validate()?;
        Ok(next)
    }

    /// Current value of `field`, formatted for display.
    pub fn get(&self, field: ConfigField) -> String {
        match field {
            ConfigField::SalaryType => self.salary_type.to_string(),
            ConfigField::SalaryAmount => self.salary_amount.to_string(),
            ConfigField::DaysPerWeek => self.days_per_week.to_string(),
            ConfigField::WorkStartHour => self.work_start_hour.to_string(),
            ConfigField::WorkEndHour => self.work_end_hour.to_string(),
        }
    }
}
