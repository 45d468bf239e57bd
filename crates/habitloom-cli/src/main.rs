use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "habitloom-cli", version, about = "Habitloom CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Habit record validation
    Habit {
        #[command(subcommand)]
        action: commands::habit::HabitAction,
    },
    /// Check-in validation
    Checkin {
        #[command(subcommand)]
        action: commands::checkin::CheckinAction,
    },
    /// Schedule invariant checks
    Schedule {
        #[command(subcommand)]
        action: commands::schedule::ScheduleAction,
    },
    /// Preference resolution
    Prefs {
        #[command(subcommand)]
        action: commands::prefs::PrefsAction,
    },
    /// Time-window utilities
    Windows {
        #[command(subcommand)]
        action: commands::windows::WindowsAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Habit { action } => commands::habit::run(action),
        Commands::Checkin { action } => commands::checkin::run(action),
        Commands::Schedule { action } => commands::schedule::run(action),
        Commands::Prefs { action } => commands::prefs::run(action),
        Commands::Windows { action } => commands::windows::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
