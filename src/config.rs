/// Runtime configuration for the mood journal server
///
/// Built from command line flags in `main`. Anything not given falls back to
/// a default: the database lives in the user's home directory and calendar
/// days follow the machine's local UTC offset.

use std::path::PathBuf;

use chrono::{FixedOffset, Local, Offset};

use crate::analytics::{AnalyticsEngine, DEFAULT_WINDOW};
use crate::storage::DEFAULT_BLOB_NAME;
use crate::ServerError;

#[derive(Debug, Clone)]
pub struct JournalConfig {
    /// SQLite file holding the journal blob
    pub database_path: PathBuf,
    /// Name the journal is stored under inside the database
    pub blob_name: String,
    /// How many recent entries the dashboard statistics look at
    pub window: usize,
    /// Offset used to decide which calendar day an entry belongs to
    pub utc_offset: FixedOffset,
    /// Write a week of sample entries when no journal exists yet
    pub seed_demo_data: bool,
}

impl JournalConfig {
    /// Defaults for everything except where the journal lives
    pub fn new(database_path: PathBuf) -> Self {
        Self {
            database_path,
            blob_name: DEFAULT_BLOB_NAME.to_string(),
            window: DEFAULT_WINDOW,
            utc_offset: Local::now().offset().fix(),
            seed_demo_data: false,
        }
    }

    /// Set the calendar offset from minutes east of UTC
    pub fn with_offset_minutes(mut self, minutes: i32) -> Result<Self, ServerError> {
        self.utc_offset = minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| {
                ServerError::Config(format!("UTC offset out of range: {} minutes", minutes))
            })?;
        Ok(self)
    }

    /// The analytics engine these settings describe
    pub fn analytics(&self) -> AnalyticsEngine {
        AnalyticsEngine::new(self.window, self.utc_offset)
    }
}

/// Get the default database path with robust fallback strategy
pub fn default_database_path() -> Result<PathBuf, ServerError> {
    // Try various locations in order of preference
    let potential_paths = [
        // 1. User's home directory (preferred)
        dirs::home_dir().map(|mut p| {
            p.push(".mood_journal");
            p
        }),
        // 2. User's data directory (platform-specific)
        dirs::data_dir().map(|mut p| {
            p.push("mood_journal");
            p
        }),
        // 3. User's config directory
        dirs::config_dir().map(|mut p| {
            p.push("mood_journal");
            p
        }),
        // 4. Current working directory (last resort)
        std::env::current_dir().ok().map(|mut p| {
            p.push(".mood_journal");
            p
        }),
    ];

    for potential_path in potential_paths.iter().flatten() {
        if std::fs::create_dir_all(potential_path).is_ok() {
            // Test if we can write to this directory
            let test_file = potential_path.join(".test_write");
            if std::fs::write(&test_file, "test").is_ok() {
                let _ = std::fs::remove_file(&test_file);
                return Ok(potential_path.join("journal.db"));
            }
        }
    }

    // Ultimate fallback: use a temporary directory
    let mut temp_path = std::env::temp_dir();
    temp_path.push("mood_journal");
    std::fs::create_dir_all(&temp_path)?;
    temp_path.push("journal.db");

    tracing::warn!("Using temporary directory for database: {}", temp_path.display());
    Ok(temp_path)
}
