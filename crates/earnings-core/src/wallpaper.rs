//! Background wallpaper catalogue and random picker.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::storage::ConfigStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Wallpaper {
    pub name: &'static str,
    pub url: &'static str,
}

const fn unsplash(name: &'static str, url: &'static str) -> Wallpaper {
    Wallpaper { name, url }
}

pub const WALLPAPERS: &[Wallpaper] = &[
    unsplash("Mountain Lake", "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=1920&h=1080&fit=crop&crop=center"),
    unsplash("Forest Path", "https://images.unsplash.com/photo-1441974231531-c6227db76b6e?w=1920&h=1080&fit=crop&crop=center"),
    unsplash("Ocean Waves", "https://images.unsplash.com/photo-1507525428034-b723cf961d3e?w=1920&h=1080&fit=crop&crop=center"),
    unsplash("Desert Sunset", "https://images.unsplash.com/photo-1470071459604-3b5ec3a7fe05?w=1920&h=1080&fit=crop&crop=center"),
    unsplash("Aurora Borealis", "https://images.unsplash.com/photo-1531366936337-7c912a4589a7?w=1920&h=1080&fit=crop&crop=center"),
    unsplash("City Lights", "https://images.unsplash.com/photo-1519501025264-65ba15a82390?w=1920&h=1080&fit=crop&crop=center"),
    unsplash("Cherry Blossoms", "https://images.unsplash.com/photo-1522383225653-ed111181a951?w=1920&h=1080&fit=crop&crop=center"),
    unsplash("Starry Night", "https://images.unsplash.com/photo-1534796636912-3b95b3ab5986?w=1920&h=1080&fit=crop&crop=center"),
    unsplash("Lavender Fields", "https://images.unsplash.com/photo-1499002238440-d264edd596ec?w=1920&h=1080&fit=crop&crop=center"),
];

/// Look a wallpaper up by URL.
pub fn find_by_url(url: &str) -> Option<&'static Wallpaper> {
    WALLPAPERS.iter().find(|w| w.url == url)
}

/// Pick any wallpaper at random.
pub fn random_wallpaper<R: Rng + ?Sized>(rng: &mut R) -> &'static Wallpaper {
    WALLPAPERS
        .choose(rng)
        .unwrap_or(&WALLPAPERS[0])
}

/// Pick a random wallpaper and remember it as the current one.
pub fn next_wallpaper<R: Rng + ?Sized>(store: &ConfigStore, rng: &mut R) -> &'static Wallpaper {
    let wallpaper = random_wallpaper(rng);
    store.save_wallpaper(wallpaper.url);
    wallpaper
}
