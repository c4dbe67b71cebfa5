use std::future::Future;
use std::io::{IsTerminal, Write};

use chrono::NaiveDateTime;
use earnings_core::{
    Clock, ConfigStore, CoreError, EarningsStore, LiveClock, NowPlayingState, Preferences,
    SystemClock,
};
use tracing::debug;

use super::now_playing;
use crate::render;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

pub fn run() -> Result<(), CoreError> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(watch())
}

async fn watch() -> Result<(), CoreError> {
    let prefs = Preferences::load_or_default();
    let store = EarningsStore::with_persistence(ConfigStore::open(), SystemClock.now());
    let redraw = std::io::stdout().is_terminal();
    let clock = LiveClock::new(SystemClock);
    view_until(store, clock, &prefs, redraw, tokio::signal::ctrl_c(), std::io::stdout()).await
}

/// Render every published snapshot to `out` until `shutdown` completes.
///
/// `shutdown` is polled across iterations, never recreated, so a signal
/// arriving mid-frame is still seen.
async fn view_until<C, S, W>(
    mut store: EarningsStore,
    mut clock: LiveClock<C>,
    prefs: &Preferences,
    redraw: bool,
    shutdown: S,
    mut out: W,
) -> Result<(), CoreError>
where
    C: Clock,
    S: Future,
    W: Write,
{
    // Fetched once per session, independently of the ticking figures.
    let mut now_playing = if prefs.now_playing {
        NowPlayingState::Loading
    } else {
        NowPlayingState::Disabled
    };
    let mut fetch = prefs
        .now_playing
        .then(|| tokio::spawn(now_playing::fetch_state()));

    let mut rx = clock.subscribe();
    clock.restart(store.config().clone(), *store.targets());
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            changed = rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let Some(snapshot) = rx.borrow_and_update().clone() else {
                    continue;
                };
                // The restarted clock publishes a fresh snapshot right away.
                if follow_config_changes(&mut store, &mut clock, snapshot.at) {
                    continue;
                }
                if redraw {
                    write!(out, "{CLEAR_SCREEN}")?;
                }
                writeln!(out, "{}", render::snapshot(&snapshot, store.config(), prefs))?;
                if prefs.now_playing {
                    writeln!(out, "\n{}", now_playing::describe(&now_playing))?;
                }
                out.flush()?;
            }
            Some(result) = async {
                match fetch.as_mut() {
                    Some(handle) => Some(handle.await),
                    None => None,
                }
            }, if fetch.is_some() => {
                fetch = None;
                now_playing = result.unwrap_or_else(|e| NowPlayingState::Failed(e.to_string()));
            }
            _ = &mut shutdown => {
                debug!("interrupted, stopping live clock");
                break;
            }
        }
    }

    clock.stop();
    Ok(())
}

/// Restart `clock` if the stored configuration was edited since the last
/// check, e.g. by `earnings config set` in another terminal.
fn follow_config_changes<C: Clock>(
    store: &mut EarningsStore,
    clock: &mut LiveClock<C>,
    now: NaiveDateTime,
) -> bool {
    if !store.reload(now) {
        return false;
    }
    debug!(targets = ?store.targets(), "configuration edited while watching");
    clock.restart(store.config().clone(), *store.targets());
    true
}
