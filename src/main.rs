/// Main entry point for the Mood Journal MCP server
///
/// This file sets up logging, parses command line arguments, and starts the MCP server.
/// The server listens for JSON-RPC requests over stdin/stdout following the MCP protocol.

use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use mood_journal_mcp::config::{default_database_path, JournalConfig};
use mood_journal_mcp::MoodJournalServer;

/// Command line arguments for the Mood Journal MCP server
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the SQLite database file
    /// If not provided, uses a default location in the user's home directory
    #[arg(long)]
    database: Option<PathBuf>,

    /// Name the journal is stored under inside the database
    #[arg(long)]
    blob_name: Option<String>,

    /// Number of recent entries the statistics look at
    #[arg(long)]
    window: Option<usize>,

    /// Offset from UTC, in minutes, used to group entries into days
    /// Defaults to the machine's local offset
    #[arg(long, allow_hyphen_values = true)]
    utc_offset_minutes: Option<i32>,

    /// Write a week of sample entries if the journal is empty
    #[arg(long)]
    seed_demo: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Enable verbose output (implies debug)
    #[arg(short, long)]
    verbose: bool,
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
        .with_env_filter(format!("mood_journal_mcp={}", log_level))
        .with_writer(std::io::stderr) // Send logs to stderr, not stdout
        .init();

    info!("Starting Mood Journal MCP server");

    let db_path = match args.database {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            path
        }
        None => default_database_path()?,
    };

    info!("Using database at: {}", db_path.display());

    let mut config = JournalConfig::new(db_path);
    if let Some(blob_name) = args.blob_name {
        config.blob_name = blob_name;
    }
    if let Some(window) = args.window {
        config.window = window;
    }
    if let Some(minutes) = args.utc_offset_minutes {
        config = config.with_offset_minutes(minutes)?;
    }
    config.seed_demo_data = args.seed_demo;

    let server = MoodJournalServer::new(config)?;

    // Run the MCP server - this will handle JSON-RPC communication over stdin/stdout
    server.run().await?;

    info!("Mood Journal MCP server shutdown complete");
    Ok(())
}
