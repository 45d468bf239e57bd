use clap::Subcommand;
use habitloom_core::domain::TimeWindow;
use habitloom_core::validate::normalize_windows;

#[derive(Subcommand)]
pub enum WindowsAction {
    /// Normalize a preferred-window set to its canonical form
    Normalize {
        /// Window names (e.g. MORNING EVENING ANY)
        names: Vec<String>,
    },
    /// List the window vocabulary with minute bounds
    List,
}

pub fn run(action: WindowsAction) -> habitloom_core::Result<()> {
    match action {
        WindowsAction::Normalize { names } => {
            let mut windows = Vec::with_capacity(names.len());
            for name in &names {
                match TimeWindow::from_name(name) {
                    Some(w) => windows.push(w),
                    None => {
                        eprintln!("unknown window: {name}");
                        std::process::exit(1);
                    }
                }
            }
            let normalized = normalize_windows(&windows);
            let json = serde_json::to_string(&normalized)?;
            println!("{json}");
        }
        WindowsAction::List => {
            for w in TimeWindow::ALL {
                let name = serde_json::to_string(&w)?;
                println!(
                    "{} {:04}-{:04}",
                    name.trim_matches('"'),
                    w.start_minute(),
                    w.end_minute()
                );
            }
        }
    }
    Ok(())
}
