//! Derived earnings state. Recomputed, never persisted.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::config::WorkConfig;
use crate::engine;

/// Rate and full-period targets. Depends only on the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Targets {
    pub earnings_per_second: f64,
    pub daily_target: f64,
    pub weekly_target: f64,
    pub monthly_target: f64,
}

/// Everything the presentation layer renders for one instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EarningsSnapshot {
    #[serde(flatten)]
    pub targets: Targets,
    pub daily_earnings: f64,
    pub weekly_earnings: f64,
    pub monthly_earnings: f64,
    pub is_working_now: bool,
    pub at: NaiveDateTime,
}

impl EarningsSnapshot {
    /// Compute the time-dependent fields from already computed targets.
    pub fn at(config: &WorkConfig, targets: &Targets, now: NaiveDateTime) -> Self {
        Self {
            targets: *targets,
            daily_earnings: engine::elapsed_earnings_today(config, targets.earnings_per_second, now),
            weekly_earnings: engine::elapsed_earnings_this_week(config, targets, now),
            monthly_earnings: engine::elapsed_earnings_this_month(config, targets, now),
            is_working_now: engine::is_working_now(config, now),
            at: now,
        }
    }

    pub fn earnings_per_minute(&self) -> f64 {
        self.targets.earnings_per_second * 60.0
    }

    pub fn daily_progress_pct(&self) -> f64 {
        progress_pct(self.daily_earnings, self.targets.daily_target)
    }

    pub fn weekly_progress_pct(&self) -> f64 {
        progress_pct(self.weekly_earnings, self.targets.weekly_target)
    }

    pub fn monthly_progress_pct(&self) -> f64 {
        progress_pct(self.monthly_earnings, self.targets.monthly_target)
    }
}

/// `current / target` as a percentage capped at 100; 0 for a zero target.
pub fn progress_pct(current: f64, target: f64) -> f64 {
    if target <= 0.0 {
        return 0.0;
    }
    (current / target * 100.0).min(100.0)
}
