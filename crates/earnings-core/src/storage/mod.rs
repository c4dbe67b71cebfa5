mod config_store;
pub mod kv;
pub mod preferences;

pub use config_store::{ConfigStore, CONFIG_KEY, WALLPAPER_KEY};
pub use kv::KvStore;
pub use preferences::{Preferences, Theme};

use std::path::PathBuf;

/// Returns the directory holding the store and preferences.
///
/// `EARNINGS_TRACKER_DATA_DIR` wins when set. Otherwise
/// `~/.config/earnings-tracker[-dev]/`, with the `-dev` suffix selected by
/// `EARNINGS_TRACKER_ENV=dev`.
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn data_dir() -> Result<PathBuf, std::io::Error> {
    let dir = match std::env::var_os("EARNINGS_TRACKER_DATA_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env =
                std::env::var("EARNINGS_TRACKER_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("earnings-tracker-dev")
            } else {
                base_dir.join("earnings-tracker")
            }
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
