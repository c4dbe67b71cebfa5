use clap::Subcommand;
use earnings_core::wallpaper::{self, WALLPAPERS};
use earnings_core::{ConfigStore, CoreError};

#[derive(Subcommand)]
pub enum WallpaperAction {
    /// Pick a new random wallpaper
    Next,
    /// Show the current wallpaper
    Current,
    /// List the catalogue
    List,
}

pub fn run(action: WallpaperAction) -> Result<(), CoreError> {
    match action {
        WallpaperAction::Next => {
            let store = ConfigStore::open();
            let chosen = wallpaper::next_wallpaper(&store, &mut rand::thread_rng());
            println!("{}\n{}", chosen.name, chosen.url);
        }
        WallpaperAction::Current => {
            let store = ConfigStore::open();
            match store.load_wallpaper() {
                Some(url) => {
                    let name = wallpaper::find_by_url(&url).map_or("custom", |w| w.name);
                    println!("{name}\n{url}");
                }
                None => println!("no wallpaper selected"),
            }
        }
        WallpaperAction::List => {
            for w in WALLPAPERS {
                println!("{:<18} {}", w.name, w.url);
            }
        }
    }
    Ok(())
}
