use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "drydock-cli", version, about = "Drydock CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Daily dry/wet logging
    Log {
        #[command(subcommand)]
        action: commands::log::LogAction,
    },
    /// Profile management
    Profile {
        #[command(subcommand)]
        action: commands::profile::ProfileAction,
    },
    /// Achievement badges
    Badges {
        #[command(subcommand)]
        action: commands::badges::BadgesAction,
    },
    /// Progress statistics
    Stats {
        #[command(subcommand)]
        action: commands::stats::StatsAction,
    },
    /// Reminder settings
    Settings {
        #[command(subcommand)]
        action: commands::settings::SettingsAction,
    },
    /// Bladder diary
    Bladder {
        #[command(subcommand)]
        action: commands::bladder::BladderAction,
    },
    /// Run the reminder poll loop in the foreground
    Watch,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Log { action } => commands::log::run(action),
        Commands::Profile { action } => commands::profile::run(action),
        Commands::Badges { action } => commands::badges::run(action),
        Commands::Stats { action } => commands::stats::run(action),
        Commands::Settings { action } => commands::settings::run(action),
        Commands::Bladder { action } => commands::bladder::run(action),
        Commands::Watch => commands::watch::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
