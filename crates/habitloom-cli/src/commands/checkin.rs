use std::path::PathBuf;

use clap::Subcommand;
use habitloom_core::requests::CreateCheckInRequest;

#[derive(Subcommand)]
pub enum CheckinAction {
    /// Validate a check-in request from a JSON file
    Validate {
        /// Path to a CreateCheckInRequest JSON file
        file: PathBuf,
    },
}

pub fn run(action: CheckinAction) -> habitloom_core::Result<()> {
    match action {
        CheckinAction::Validate { file } => {
            let text = std::fs::read_to_string(&file)?;
            let request: CreateCheckInRequest = serde_json::from_str(&text)?;
            match request.validate() {
                Ok(()) => println!("ok"),
                Err(e) => {
                    eprintln!("invalid check-in: {e}");
                    std::process::exit(1);
                }
            }
        }
    }
    Ok(())
}
