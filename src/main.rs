/// Main entry point for the monthly habit tracker server
///
/// This file sets up logging, parses command line arguments, and starts the server.
/// The server listens for JSON-RPC requests over stdin/stdout following the MCP protocol.

use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use monthly_habit_tracker::{
    HabitTrackerServer, MonthArg, SessionOptions, TrackerConfig, DEFAULT_STORAGE_KEY,
};

/// Get the default database path with robust fallback strategy
fn get_default_database_path() -> Result<PathBuf, Box<dyn std::error::Error>> {
    // Try various locations in order of preference
    let potential_paths = [
        // 1. User's home directory (preferred)
        dirs::home_dir().map(|mut p| {
            p.push(".habit_tracker");
            p
        }),
        // 2. User's data directory (platform-specific)
        dirs::data_dir().map(|mut p| {
            p.push("monthly_habit_tracker");
            p
        }),
        // 3. Current working directory (last resort)
        std::env::current_dir().ok().map(|mut p| {
            p.push(".habit_tracker");
            p
        }),
    ];

    for potential_path in potential_paths.iter().flatten() {
        if std::fs::create_dir_all(potential_path).is_ok() {
            // Test if we can write to this directory
            let test_file = potential_path.join(".test_write");
            if std::fs::write(&test_file, "test").is_ok() {
                let _ = std::fs::remove_file(&test_file);
                return Ok(potential_path.join("monthly.db"));
            }
        }
    }

    // Ultimate fallback: use a temporary directory
    let mut temp_path = std::env::temp_dir();
    temp_path.push("monthly_habit_tracker");
    std::fs::create_dir_all(&temp_path)?;
    temp_path.push("monthly.db");

    tracing::warn!("Using temporary directory for database: {}", temp_path.display());
    Ok(temp_path)
}

/// Command line arguments for the monthly habit tracker
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the SQLite database file
    /// If not provided, uses a default location in the user's home directory
    #[arg(long)]
    database: Option<PathBuf>,

    /// Key the tracker document is stored under
    #[arg(long, default_value = DEFAULT_STORAGE_KEY)]
    storage_key: String,

    /// Year to open (defaults to the current year)
    #[arg(long)]
    year: Option<i32>,

    /// Month to open, by name ("March") or zero-based index (defaults to the current month)
    #[arg(long)]
    month: Option<String>,

    /// Reopen the month that was active when the tracker last saved
    #[arg(long)]
    resume: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Enable verbose output (implies debug)
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    /// Starting month: today's, overridden by `--year` and `--month`
    fn session_options(&self) -> Result<SessionOptions, Box<dyn std::error::Error>> {
        let mut options = SessionOptions::today();
        options.resume = self.resume;

        if let Some(year) = self.year {
            options.start.0 = year;
        }
        if let Some(month) = &self.month {
            let arg = match month.trim().parse::<u32>() {
                Ok(index) => MonthArg::Index(index),
                Err(_) => MonthArg::Name(month.clone()),
            };
            options.start.1 = arg.resolve()?;
        }

        Ok(options)
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
        .with_env_filter(format!("monthly_habit_tracker={}", log_level))
        .with_writer(std::io::stderr) // Send logs to stderr, not stdout
        .init();

    info!("Starting monthly habit tracker");

    let db_path = match &args.database {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            path.clone()
        }
        None => get_default_database_path()?,
    };

    info!("Using database at: {}", db_path.display());

    let config = TrackerConfig {
        db_path,
        storage_key: args.storage_key.clone(),
        session: args.session_options()?,
    };

    let server = HabitTrackerServer::new(config)?;

    // Run the server - this will handle JSON-RPC communication over stdin/stdout
    server.run().await?;

    info!("Monthly habit tracker shutdown complete");
    Ok(())
}
