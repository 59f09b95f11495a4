/// Command line entry point for habitrack
///
/// This file sets up logging, parses command line arguments, and drives
/// the tracker. The CLI is a thin presentation layer: it reads the cached
/// per-habit fields and calls the metrics functions, and never derives
/// statistics from raw history itself.

use std::path::PathBuf;

use chrono::Datelike;
use clap::{Parser, Subcommand};

use habitrack::{
    completion_rate, dates, month_completion_rate, AppError, Backup, HabitId, HabitTracker,
    JsonFileStore,
};

/// Command line arguments for habitrack
#[derive(Parser, Debug)]
#[command(author, version, about = "Track habits, streaks, and completion rates", long_about = None)]
struct Args {
    /// Path to the data file
    /// If not provided, uses a default location in the user's data directory
    #[arg(long)]
    data_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add a new habit
    Add {
        /// Display name for the habit
        name: String,
    },
    /// Log a habit for a day
    Log {
        /// Habit name or id
        habit: String,
        /// Day to log, YYYY-MM-DD; defaults to today
        #[arg(long)]
        date: Option<String>,
        /// Log the day as missed instead of done
        #[arg(long)]
        missed: bool,
    },
    /// List habits with their streak statistics
    List,
    /// Show summary statistics across all habits
    Stats,
    /// Delete a habit and its whole history
    Delete {
        /// Habit name or id
        habit: String,
    },
    /// Export all data to a backup file
    Export {
        /// Output file; defaults to habitrack-backup-YYYY-MM-DD.json
        file: Option<PathBuf>,
    },
    /// Replace all data with the contents of a backup file
    Import {
        /// Backup file to read
        file: PathBuf,
    },
    /// Delete all habit data
    Reset {
        /// Confirm deletion
        #[arg(long)]
        yes: bool,
    },
}

/// Resolve a habit by exact name first, then by id
fn find_habit(tracker: &HabitTracker, needle: &str) -> Option<HabitId> {
    if let Some(habit) = tracker.habits().iter().find(|h| h.name == needle) {
        return Some(habit.id);
    }
    HabitId::from_string(needle)
        .ok()
        .and_then(|id| tracker.habit(id).map(|h| h.id))
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(format!("habitrack={}", log_level))
        .with_writer(std::io::stderr) // Keep stdout for command output
        .init();

    let store = JsonFileStore::new(args.data_file.unwrap_or_else(JsonFileStore::default_path));
    tracing::info!("Using data file at {}", store.path().display());

    let mut tracker = HabitTracker::load_from(&store);

    match args.command {
        Command::Add { name } => {
            tracker.add_habit(&name)?;
            tracker.save_to(&store)?;
            println!("Added habit '{}'", name.trim());
        }

        Command::Log { habit, date, missed } => {
            let Some(id) = find_habit(&tracker, &habit) else {
                println!("No habit matches '{}'", habit);
                return Ok(());
            };

            let date = match date {
                Some(raw) => dates::parse_day_key(&raw)?,
                None => dates::today(),
            };

            if tracker.log_habit(id, date, !missed)? {
                tracker.save_to(&store)?;
                if let Some(habit) = tracker.habit(id) {
                    if missed {
                        println!("Logged {} as missed for '{}'", date, habit.name);
                    } else {
                        println!(
                            "Logged {} as done for '{}'; current streak: {}",
                            date, habit.name, habit.streak
                        );
                    }
                }
            }
        }

        Command::List => {
            if tracker.habits().is_empty() {
                println!("No habits yet. Add one with `habitrack add <name>`.");
            }
            for habit in tracker.habits() {
                println!(
                    "{}  streak {}  best {}  missed {}  ({})",
                    habit.name, habit.streak, habit.longest_streak, habit.missed, habit.id
                );
            }
        }

        Command::Stats => {
            let summary = tracker.summary();
            let today = dates::today();

            println!("Total completed:  {}", summary.total_completed);
            println!("Completion rate:  {}%", summary.overall_completion_rate);
            println!("Longest streak:   {}", summary.longest_streak);
            println!("Streak momentum:  {}", summary.current_streak_sum);

            for habit in tracker.habits() {
                println!(
                    "  {}: {}% all time, {}% this month",
                    habit.name,
                    completion_rate(&habit.history),
                    month_completion_rate(&habit.history, today.year(), today.month()),
                );
            }
        }

        Command::Delete { habit } => match find_habit(&tracker, &habit) {
            Some(id) => {
                tracker.delete_habit(id);
                tracker.save_to(&store)?;
                println!("Deleted '{}'", habit);
            }
            None => println!("No habit matches '{}'", habit),
        },

        Command::Export { file } => {
            let file = file.unwrap_or_else(|| {
                PathBuf::from(format!("habitrack-backup-{}.json", dates::today()))
            });
            let backup = tracker.export();
            std::fs::write(&file, backup.to_json()?)?;
            println!(
                "Exported {} habits to {}",
                tracker.habits().len(),
                file.display()
            );
        }

        Command::Import { file } => {
            let raw = std::fs::read_to_string(&file)?;
            let backup = Backup::parse(&raw)?;
            let count = tracker.import(backup);
            tracker.save_to(&store)?;
            println!("Imported {} habits from {}", count, file.display());
        }

        Command::Reset { yes } => {
            if !yes {
                println!("This deletes all habit data. Re-run with --yes to confirm.");
                return Ok(());
            }
            tracker.reset();
            tracker.save_to(&store)?;
            println!("All habit data deleted");
        }
    }

    Ok(())
}
