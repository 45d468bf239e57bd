use std::path::PathBuf;

use clap::Subcommand;
use habitloom_core::requests::CreateHabitRequest;
use habitloom_core::validate::normalize_windows;

#[derive(Subcommand)]
pub enum HabitAction {
    /// Validate a habit-creation request from a JSON file
    Validate {
        /// Path to a CreateHabitRequest JSON file
        file: PathBuf,
    },
    /// Show a habit request with its window set normalized
    Show {
        /// Path to a CreateHabitRequest JSON file
        file: PathBuf,
    },
}

pub fn run(action: HabitAction) -> habitloom_core::Result<()> {
    match action {
        HabitAction::Validate { file } => {
            let text = std::fs::read_to_string(&file)?;
            let request: CreateHabitRequest = serde_json::from_str(&text)?;
            match request.validate() {
                Ok(()) => println!("ok"),
                Err(e) => {
                    eprintln!("invalid habit: {e}");
                    std::process::exit(1);
                }
            }
        }
        HabitAction::Show { file } => {
            let text = std::fs::read_to_string(&file)?;
            let mut request: CreateHabitRequest = serde_json::from_str(&text)?;
            request.validate()?;
            request.preferred_windows = normalize_windows(&request.preferred_windows);
            let json = serde_json::to_string_pretty(&request)?;
            println!("{json}");
        }
    }
    Ok(())
}
