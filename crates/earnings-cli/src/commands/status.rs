use chrono::NaiveDateTime;
use clap::Args;
use earnings_core::{Clock, ConfigStore, CoreError, EarningsStore, Preferences, SystemClock};

use crate::render;

#[derive(Args)]
pub struct StatusArgs {
    /// Print the snapshot as JSON
    #[arg(long)]
    json: bool,
    /// Evaluate at this local time instead of now (YYYY-MM-DDTHH:MM:SS)
    #[arg(long, value_parser = parse_local_time)]
    at: Option<NaiveDateTime>,
}

fn parse_local_time(raw: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .map_err(|e| format!("expected YYYY-MM-DDTHH:MM:SS: {e}"))
}

pub fn run(args: StatusArgs) -> Result<(), CoreError> {
    let now = args.at.unwrap_or_else(|| SystemClock.now());
    let store = EarningsStore::with_persistence(ConfigStore::open(), now);

    if args.json {
        println!("{}", serde_json::to_string_pretty(store.snapshot())?);
    } else {
        let prefs = Preferences::load_or_default();
        println!("{}", render::snapshot(store.snapshot(), store.config(), &prefs));
    }
    Ok(())
}
