use clap::{CommandFactory, Parser, Subcommand};

mod commands;
mod logging;
mod render;

#[derive(Parser)]
#[command(name = "earnings", version, about = "Live earnings tracker")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print earnings for one instant
    Status(commands::status::StatusArgs),
    /// Live view, refreshed every second until Ctrl-C
    Watch,
    /// Work configuration (salary and schedule)
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Display preferences
    Prefs {
        #[command(subcommand)]
        action: commands::prefs::PrefsAction,
    },
    /// Background wallpaper
    Wallpaper {
        #[command(subcommand)]
        action: commands::wallpaper::WallpaperAction,
    },
    /// Show the track currently playing on Spotify
    NowPlaying {
        /// Print the widget state as JSON
        #[arg(long)]
        json: bool,
    },
    /// Generate shell completions
    Completions {
        shell: clap_complete::Shell,
    },
}

fn main() {
    logging::init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Status(args) => commands::status::run(args),
        Commands::Watch => commands::watch::run(),
        Commands::Config { action } => commands::config::run(action),
        Commands::Prefs { action } => commands::prefs::run(action),
        Commands::Wallpaper { action } => commands::wallpaper::run(action),
        Commands::NowPlaying { json } => commands::now_playing::run(json),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "earnings", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
