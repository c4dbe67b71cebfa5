//! Live clock driver.
//!
//! A single tokio task ticking once per second. Each tick recomputes the
//! elapsed-earnings figures from cached targets and publishes the snapshot
//! on a watch channel. The task is owned by [`LiveClock`]: restarting
//! aborts the previous task before spawning the next, and dropping the
//! clock aborts it, so two tasks never tick at once.
//!
//! ## Usage
//!
//! ```ignore
//! let mut clock = LiveClock::new(SystemClock);
//! let mut rx = clock.subscribe();
//! clock.restart(store.config().clone(), *store.targets());
//! while rx.changed().await.is_ok() {
//!     render(rx.borrow_and_update().as_ref());
//! }
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::{Local, NaiveDateTime};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::debug;

use crate::config::WorkConfig;
use crate::snapshot::{EarningsSnapshot, Targets};

pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Source of local wall-clock time.
pub trait Clock: Send + Sync + 'static {
    fn now(&self) -> NaiveDateTime;
}

/// The host machine's local clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

pub struct LiveClock<C: Clock> {
    clock: Arc<C>,
    tx: Arc<watch::Sender<Option<EarningsSnapshot>>>,
    handle: Option<JoinHandle<()>>,
    ticks: Arc<AtomicU64>,
}

impl<C: Clock> LiveClock<C> {
    pub fn new(clock: C) -> Self {
        let (tx, _rx) = watch::channel(None);
        Self {
            clock: Arc::new(clock),
            tx: Arc::new(tx),
            handle: None,
            ticks: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Receiver for published snapshots. `None` until the first tick.
    pub fn subscribe(&self) -> watch::Receiver<Option<EarningsSnapshot>> {
        self.tx.subscribe()
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Total snapshots published since the clock was created.
    pub fn ticks(&self) -> u64 {
        self.ticks.load(Ordering::Relaxed)
    }

    /// Stop the current task and start ticking for `config`/`targets`.
    ///
    /// The first tick fires immediately. Must be called inside a tokio runtime.
    pub fn restart(&mut self, config: WorkConfig, targets: Targets) {
        self.stop();
        debug!(?targets, "live clock restarted");

        let clock = Arc::clone(&self.clock);
        let tx = Arc::clone(&self.tx);
        let ticks = Arc::clone(&self.ticks);
        self.handle = Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval(TICK_PERIOD);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                interval.tick().await;
                let snapshot = EarningsSnapshot::at(&config, &targets, clock.now());
                tx.send_replace(Some(snapshot));
                ticks.fetch_add(1, Ordering::Relaxed);
            }
        }));
    }

    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            debug!("live clock stopped");
        }
    }
}

impl<C: Clock> Drop for LiveClock<C> {
    fn drop(&mut self) {
        self.stop();
    }
}
