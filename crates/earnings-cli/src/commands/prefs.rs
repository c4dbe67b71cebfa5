use clap::Subcommand;
use earnings_core::{CoreError, Preferences, StorageError};

#[derive(Subcommand)]
pub enum PrefsAction {
    /// Get a preference (theme, color, now_playing)
    Get { key: String },
    /// Set a preference
    Set { key: String, value: String },
    /// Switch between dark and light theme
    ToggleTheme,
    /// List all preferences
    List,
}

pub fn run(action: PrefsAction) -> Result<(), CoreError> {
    match action {
        PrefsAction::Get { key } => {
            let prefs = Preferences::load()?;
            let value = prefs
                .get(&key)
                .ok_or_else(|| StorageError::Preferences(format!("unknown key: {key}")))?;
            println!("{value}");
        }
        PrefsAction::Set { key, value } => {
            let mut prefs = Preferences::load()?;
            prefs.set(&key, &value)?;
            prefs.save()?;
            println!("ok");
        }
        PrefsAction::ToggleTheme => {
            let mut prefs = Preferences::load()?;
            prefs.theme = prefs.theme.toggled();
            prefs.save()?;
            println!("theme = {}", prefs.theme);
        }
        PrefsAction::List => {
            let prefs = Preferences::load()?;
            for key in Preferences::KEYS {
                println!("{key} = {}", prefs.get(key).unwrap_or_default());
            }
        }
    }
    Ok(())
}
