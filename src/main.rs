/// Main entry point for the habit store CLI
///
/// This file sets up logging, parses command line arguments, and runs one
/// store operation against the file-backed storage. The store is loaded at
/// startup (seeding defaults on first run) and every mutation is written
/// back before the process exits.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

use habit_store::{
    DomainError, FileStorage, Frequency, HabitId, HabitStore,
};

/// Get the default data directory with a fallback strategy
fn get_default_data_dir() -> Result<PathBuf, Box<dyn std::error::Error>> {
    // Try various locations in order of preference
    let potential_paths = [
        // 1. User's data directory (platform-specific)
        dirs::data_dir().map(|mut p| {
            p.push("habit_store");
            p
        }),
        // 2. User's home directory
        dirs::home_dir().map(|mut p| {
            p.push(".habit_store");
            p
        }),
        // 3. Current working directory (last resort)
        std::env::current_dir().ok().map(|mut p| {
            p.push(".habit_store");
            p
        }),
    ];

    for potential_path in potential_paths.iter().flatten() {
        // Try to create the directory and verify it is writable
        if std::fs::create_dir_all(potential_path).is_ok() {
            let test_file = potential_path.join(".test_write");
            if std::fs::write(&test_file, "test").is_ok() {
                let _ = std::fs::remove_file(&test_file);
                return Ok(potential_path.clone());
            }
        }
    }

    // Ultimate fallback: use a temporary directory
    let mut temp_path = std::env::temp_dir();
    temp_path.push("habit_store");
    std::fs::create_dir_all(&temp_path)?;

    tracing::warn!("Using temporary directory for habit data: {}", temp_path.display());
    Ok(temp_path)
}

/// Command line arguments for the habit store CLI
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding the habit data file
    /// If not provided, uses a default location in the user's data directory
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Enable verbose output (implies debug)
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List all habits and their completion history
    List,
    /// Add a new habit
    Add {
        /// Display name of the habit
        name: String,
        /// How often the habit should be performed (daily or weekly)
        #[arg(long, default_value = "daily")]
        frequency: String,
    },
    /// Flip the completion state of a habit for a date
    Toggle {
        /// Id of the habit
        id: String,
        /// Date in YYYY-MM-DD form (defaults to today)
        date: Option<String>,
    },
    /// Delete a habit
    Delete {
        /// Id of the habit
        id: String,
    },
}

fn parse_habit_id(s: &str) -> Result<HabitId, Box<dyn std::error::Error>> {
    Ok(HabitId::from_string(s)?)
}

fn parse_date(s: Option<&str>) -> Result<chrono::NaiveDate, DomainError> {
    match s {
        Some(s) => s
            .parse()
            .map_err(|_| DomainError::InvalidDate(format!("expected YYYY-MM-DD, got '{}'", s))),
        None => Ok(chrono::Utc::now().date_naive()),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Set up logging based on command line flags
    let log_level = if args.verbose {
        "debug"
    } else if args.debug {
        "info"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(format!("habit_store={}", log_level))
        .with_writer(std::io::stderr) // Keep stdout for command output
        .init();

    // Determine the data directory
    let data_dir = match args.data_dir {
        Some(dir) => dir,
        None => get_default_data_dir()?,
    };

    info!("Using habit data in: {}", data_dir.display());

    let storage = FileStorage::new(&data_dir)?;
    let mut store = HabitStore::new(storage);

    // Bootstrap from storage; on first run this seeds the default habits.
    store.fetch_habits().await;
    if let Some(message) = store.state().error() {
        return Err(message.to_string().into());
    }

    match args.command {
        Command::List => {
            for habit in store.state().habits() {
                println!(
                    "{}  {} ({}), {} completions",
                    habit.id,
                    habit.name,
                    habit.frequency,
                    habit.completed_dates.len()
                );
            }
        }
        Command::Add { name, frequency } => {
            let frequency: Frequency = frequency.parse()?;
            let habit = store.add_habit(name, frequency)?;
            println!("Added habit '{}' with id {}", habit.name, habit.id);
        }
        Command::Toggle { id, date } => {
            let id = parse_habit_id(&id)?;
            let date = parse_date(date.as_deref())?;
            store.toggle_habit(&id, date)?;
            println!("Toggled {} for {}", id, date);
        }
        Command::Delete { id } => {
            let id = parse_habit_id(&id)?;
            store.delete_habit(&id)?;
            println!("Deleted {}", id);
        }
    }

    Ok(())
}
