//! Persistence for the work configuration.
//!
//! The configuration is one JSON blob under [`CONFIG_KEY`]. Reads and
//! writes never fail from the caller's point of view: problems are logged
//! and the defaults stand in.

use tracing::{debug, warn};

use super::kv::KvStore;
use crate::config::WorkConfig;
use crate::error::StorageError;

pub const CONFIG_KEY: &str = "earnings-tracker-config";
pub const WALLPAPER_KEY: &str = "current-wallpaper";

pub struct ConfigStore {
    kv: Option<KvStore>,
}

impl ConfigStore {
    pub fn new(kv: KvStore) -> Self {
        Self { kv: Some(kv) }
    }

    /// Open the on-disk store. If it cannot be opened the store runs
    /// detached: loads return defaults and saves are dropped.
    pub fn open() -> Self {
        match KvStore::open() {
            Ok(kv) => Self::new(kv),
            Err(e) => {
                warn!(error = %e, "config store unavailable, using defaults");
                Self { kv: None }
            }
        }
    }

    /// Last saved configuration, or the defaults if there is none or it is
    /// unreadable, corrupt or invalid.
    pub fn load(&self) -> WorkConfig {
        match self.try_load() {
            Ok(Some(config)) => config,
            Ok(None) => {
                debug!("no stored config, using defaults");
                WorkConfig::default()
            }
            Err(e) => {
                warn!(error = %e, "failed to load config, using defaults");
                WorkConfig::default()
            }
        }
    }

    /// Like [`ConfigStore::load`] but reports why a stored blob was rejected.
    ///
    /// # Errors
    /// Returns an error if the store cannot be read or the blob does not
    /// parse into a valid configuration.
    pub fn try_load(&self) -> Result<Option<WorkConfig>, StorageError> {
        let Some(kv) = &self.kv else {
            return Ok(None);
        };
        let Some(raw) = kv.get(CONFIG_KEY)? else {
            return Ok(None);
        };
        let config: WorkConfig =
            serde_json::from_str(&raw).map_err(|e| StorageError::Corrupt {
                key: CONFIG_KEY.to_string(),
                message: e.to_string(),
            })?;
        config.validate().map_err(|e| StorageError::Corrupt {
            key: CONFIG_KEY.to_string(),
            message: e.to_string(),
        })?;
        Ok(Some(config))
    }

    /// Persist `config`, logging any failure.
    pub fn save(&self, config: &WorkConfig) {
        if let Err(e) = self.try_save(config) {
            warn!(error = %e, "failed to save config");
        }
    }

    /// # Errors
    /// Returns an error if the store is detached or the write fails.
    pub fn try_save(&self, config: &WorkConfig) -> Result<(), StorageError> {
        let kv = self.attached()?;
        let json = serde_json::to_string(config).map_err(|e| StorageError::Corrupt {
            key: CONFIG_KEY.to_string(),
            message: e.to_string(),
        })?;
        kv.set(CONFIG_KEY, &json)
    }

    /// URL of the last chosen wallpaper, if any.
    pub fn load_wallpaper(&self) -> Option<String> {
        let kv = self.kv.as_ref()?;
        kv.get(WALLPAPER_KEY)
            .map_err(|e| warn!(error = %e, "failed to read wallpaper"))
            .ok()
            .flatten()
    }

    pub fn save_wallpaper(&self, url: &str) {
        let result = self.attached().and_then(|kv| kv.set(WALLPAPER_KEY, url));
        if let Err(e) = result {
            warn!(error = %e, "failed to save wallpaper");
        }
    }

    fn attached(&self) -> Result<&KvStore, StorageError> {
        self.kv.as_ref().ok_or_else(|| {
            StorageError::DataDir(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "store is detached",
            ))
        })
    }
}
