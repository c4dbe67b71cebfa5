//! Explicit state container for the presentation layer.
//!
//! Holds the current [`WorkConfig`], the targets derived from it and the
//! most recent snapshot. Targets are recomputed only when the configuration
//! changes, either through an edit or through [`EarningsStore::reload`]
//! picking up a write made by another process.

use chrono::NaiveDateTime;
use tracing::debug;

use crate::config::{ConfigField, WorkConfig};
use crate::engine;
use crate::error::ValidationError;
use crate::snapshot::{EarningsSnapshot, Targets};
use crate::storage::ConfigStore;

pub struct EarningsStore {
    config: WorkConfig,
    targets: Targets,
    snapshot: EarningsSnapshot,
    persistence: Option<ConfigStore>,
}

impl EarningsStore {
    /// Build a store around `config` without persistence.
    ///
    /// # Errors
    /// Returns an error if `config` is invalid.
    pub fn new(config: WorkConfig, now: NaiveDateTime) -> Result<Self, ValidationError> {
        let targets = engine::targets(&config)?;
        let snapshot = EarningsSnapshot::at(&config, &targets, now);
        Ok(Self {
            config,
            targets,
            snapshot,
            persistence: None,
        })
    }

    /// Load the configuration from `persistence` and save every later change back.
    pub fn with_persistence(persistence: ConfigStore, now: NaiveDateTime) -> Self {
        let config = persistence.load();
        // `load` only returns validated configs, but stay total regardless.
        let (config, targets) = match engine::targets(&config) {
            Ok(targets) => (config, targets),
            Err(_) => {
                let config = WorkConfig::default();
                let targets = engine::targets(&config).unwrap_or_default();
                (config, targets)
            }
        };
        let snapshot = EarningsSnapshot::at(&config, &targets, now);
        Self {
            config,
            targets,
            snapshot,
            persistence: Some(persistence),
        }
    }

    pub fn config(&self) -> &WorkConfig {
        &self.config
    }

    pub fn targets(&self) -> &Targets {
        &self.targets
    }

    pub fn snapshot(&self) -> &EarningsSnapshot {
        &self.snapshot
    }

    pub fn persistence(&self) -> Option<&ConfigStore> {
        self.persistence.as_ref()
    }

    /// Replace the configuration, recompute targets and persist.
    ///
    /// # Errors
    /// Returns an error, and keeps the previous configuration, if `config`
    /// is invalid.
    pub fn set_config(&mut self, config: WorkConfig, now: NaiveDateTime) -> Result<(), ValidationError> {
        let targets = engine::targets(&config)?;
        debug!(?config, ?targets, "configuration changed, targets recomputed");
        if let Some(store) = &self.persistence {
            store.save(&config);
        }
        self.config = config;
        self.targets = targets;
        self.snapshot = EarningsSnapshot::at(&self.config, &self.targets, now);
        Ok(())
    }

    /// Edit one field from raw form input.
    ///
    /// # Errors
    /// Returns the field's validation message; nothing is committed.
    pub fn apply_field(
        &mut self,
        field: ConfigField,
        raw: &str,
        now: NaiveDateTime,
    ) -> Result<(), ValidationError> {
        let next = self.config.apply(field, raw)?;
        self.set_config(next, now)
    }

    /// Re-read the persisted configuration.
    ///
    /// Returns `true` when it differs from the one in use; targets and the
    /// snapshot are then recomputed. Without persistence this is a no-op.
    pub fn reload(&mut self, now: NaiveDateTime) -> bool {
        let Some(store) = &self.persistence else {
            return false;
        };
        let config = store.load();
        if config == self.config {
            return false;
        }
        let Ok(targets) = engine::targets(&config) else {
            return false;
        };
        debug!(?config, ?targets, "stored configuration changed, targets recomputed");
        self.config = config;
        self.targets = targets;
        self.snapshot = EarningsSnapshot::at(&self.config, &self.targets, now);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::KvStore;
    use chrono::NaiveDate;

    fn wednesday(h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 15)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn reload_picks_up_writes_from_another_handle() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("earnings.db");
        let open = || ConfigStore::new(KvStore::open_at(&path).unwrap());

        let mut store = EarningsStore::with_persistence(open(), wednesday(9));
        assert!(!store.reload(wednesday(9)));
        let before = *store.targets();

        let edited = WorkConfig {
            days_per_week: 6,
            ..WorkConfig::default()
        };
        open().save(&edited);

        assert!(store.reload(wednesday(10)));
        assert_eq!(store.config(), &edited);
        assert_ne!(*store.targets(), before);
        assert_eq!(store.snapshot().targets, *store.targets());
        assert!(!store.reload(wednesday(11)));
    }

    #[test]
    fn reload_without_persistence_is_a_no_op() {
        let mut store = EarningsStore::new(WorkConfig::default(), wednesday(9)).unwrap();
        assert!(!store.reload(wednesday(10)));
    }

    #[test]
    fn invalid_edit_keeps_last_valid_config() {
        let mut store = EarningsStore::new(WorkConfig::default(), wednesday(9)).unwrap();
        let err = store
            .apply_field(ConfigField::WorkEndHour, "8", wednesday(9))
            .unwrap_err();
        assert!(matches!(err, ValidationError::EmptyWorkWindow { .. }));
        assert_eq!(store.config(), &WorkConfig::default());
    }

    #[test]
    fn valid_edit_recomputes_and_persists() {
        let kv = KvStore::open_memory().unwrap();
        let mut store = EarningsStore::with_persistence(ConfigStore::new(kv), wednesday(9));
        let old_daily = store.targets().daily_target;

        store
            .apply_field(ConfigField::SalaryAmount, "6300", wednesday(9))
            .unwrap();
        assert!((store.targets().daily_target - 2.0 * old_daily).abs() < 1e-9);
        assert_eq!(store.config().salary_amount, 6300.0);
        assert_eq!(store.persistence().unwrap().load().salary_amount, 6300.0);
    }

    #[test]
    fn new_rejects_degenerate_config() {
        let cfg = WorkConfig {
            work_start_hour: 10,
            work_end_hour: 9,
            ..WorkConfig::default()
        };
        assert!(EarningsStore::new(cfg, wednesday(9)).is_err());
    }
}
