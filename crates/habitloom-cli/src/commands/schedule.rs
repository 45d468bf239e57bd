use std::collections::HashMap;
use std::path::PathBuf;

use clap::Subcommand;
use habitloom_core::habit::Habit;
use habitloom_core::schedule::Schedule;
use habitloom_core::validate::validate_schedule;
use uuid::Uuid;

#[derive(Subcommand)]
pub enum ScheduleAction {
    /// Check a generated schedule against its habit set
    Check {
        /// Path to a Schedule JSON file
        file: PathBuf,
        /// Path to a JSON array of Habit records
        #[arg(long)]
        habits: PathBuf,
    },
}

pub fn run(action: ScheduleAction) -> habitloom_core::Result<()> {
    match action {
        ScheduleAction::Check { file, habits } => {
            let schedule: Schedule = serde_json::from_str(&std::fs::read_to_string(&file)?)?;
            let habit_list: Vec<Habit> = serde_json::from_str(&std::fs::read_to_string(&habits)?)?;

            let mut by_id: HashMap<Uuid, Habit> = HashMap::new();
            for habit in habit_list {
                habit.validate()?;
                by_id.insert(habit.id, habit);
            }

            match validate_schedule(&schedule, &by_id) {
                Ok(()) => println!("ok: {} slots", schedule.slots.len()),
                Err(e) => {
                    eprintln!("invalid schedule: {e}");
                    std::process::exit(1);
                }
            }
        }
    }
    Ok(())
}
