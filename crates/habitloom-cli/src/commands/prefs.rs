use std::path::PathBuf;

use clap::Subcommand;
use habitloom_core::preferences::{resolve, PartialPreferences};

#[derive(Subcommand)]
pub enum PrefsAction {
    /// Resolve a partial preference file against the defaults
    Resolve {
        /// Path to a partial preference file (.json or .toml). Omit for
        /// the pure default table.
        file: Option<PathBuf>,
        /// Print TOML instead of JSON
        #[arg(long)]
        toml: bool,
    },
}

pub fn run(action: PrefsAction) -> habitloom_core::Result<()> {
    match action {
        PrefsAction::Resolve { file, toml } => {
            let partial = match &file {
                Some(path) => {
                    let text = std::fs::read_to_string(path)?;
                    if path.extension().is_some_and(|ext| ext == "toml") {
                        PartialPreferences::from_toml_str(&text)?
                    } else {
                        PartialPreferences::from_json_str(&text)?
                    }
                }
                None => PartialPreferences::default(),
            };

            match resolve(&partial) {
                Ok(resolved) => {
                    if toml {
                        println!("{}", toml::to_string_pretty(&resolved)?);
                    } else {
                        println!("{}", serde_json::to_string_pretty(&resolved)?);
                    }
                }
                Err(e) => {
                    eprintln!("invalid preferences: {e}");
                    std::process::exit(1);
                }
            }
        }
    }
    Ok(())
}
