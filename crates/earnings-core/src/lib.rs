//! # Earnings Core Library
//!
//! Business logic for the earnings tracker: given a salary and a work
//! schedule, how much has been earned so far today, this week and this
//! month, and how that compares to the daily, weekly and monthly targets.
//! The `earnings` CLI is a thin skin over this crate.
//!
//! ## Architecture
//!
//! - **Engine**: pure rate/target arithmetic and elapsed-earnings functions
//!   that take the current local time as an argument
//! - **Store**: explicit state container caching targets between clock ticks
//! - **Driver**: a one-second tokio ticker publishing snapshots
//! - **Storage**: SQLite key-value table for the configuration blob and
//!   TOML display preferences
//!
//! ## Key Components
//!
//! - [`WorkConfig`]: user-entered salary and schedule
//! - [`EarningsStore`]: config + cached targets + latest snapshot
//! - [`LiveClock`]: cancellable periodic recomputation
//! - [`ConfigStore`]: never-failing load/save of the configuration

pub mod config;
pub mod driver;
pub mod engine;
pub mod error;
pub mod format;
pub mod now_playing;
pub mod snapshot;
pub mod storage;
pub mod store;
pub mod wallpaper;

pub use config::{ConfigField, SalaryType, WorkConfig};
pub use driver::{Clock, LiveClock, SystemClock, TICK_PERIOD};
pub use error::{CoreError, NowPlayingError, StorageError, ValidationError};
pub use format::{format_brl, format_hour_range};
pub use now_playing::{NowPlayingClient, NowPlayingState, Track};
pub use snapshot::{progress_pct, EarningsSnapshot, Targets};
pub use storage::{ConfigStore, KvStore, Preferences, Theme};
pub use store::EarningsStore;
pub use wallpaper::Wallpaper;
