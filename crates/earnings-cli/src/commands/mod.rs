pub mod config;
pub mod now_playing;
pub mod prefs;
pub mod status;
pub mod wallpaper;
pub mod watch;
