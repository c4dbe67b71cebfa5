use clap::Subcommand;
use earnings_core::{Clock, ConfigField, ConfigStore, CoreError, EarningsStore, SystemClock, WorkConfig};

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the whole configuration as JSON
    Show,
    /// Get one field (salary-type, salary-amount, days-per-week, work-start-hour, work-end-hour)
    Get {
        field: String,
    },
    /// Set one field; invalid values are rejected and nothing is saved
    Set {
        field: String,
        value: String,
    },
    /// Reset to the default configuration
    Reset,
}

pub fn run(action: ConfigAction) -> Result<(), CoreError> {
    let now = SystemClock.now();
    let mut store = EarningsStore::with_persistence(ConfigStore::open(), now);

    match action {
        ConfigAction::Show => {
            println!("{}", serde_json::to_string_pretty(store.config())?);
        }
        ConfigAction::Get { field } => {
            let field: ConfigField = field.parse()?;
            println!("{}", store.config().get(field));
        }
        ConfigAction::Set { field, value } => {
            let field: ConfigField = field.parse()?;
            store.apply_field(field, &value, now)?;
            println!("{field} = {}", store.config().get(field));
        }
        ConfigAction::Reset => {
            store.set_config(WorkConfig::default(), now)?;
            println!("config reset to defaults");
        }
    }
    Ok(())
}
