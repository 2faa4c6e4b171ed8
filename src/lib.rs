/// Public library interface for the Mood Journal MCP server
///
/// This module exports the server implementation and the public types
/// that other applications or tests can use.

use chrono::Utc;
use thiserror::Error;

pub mod analytics;
pub mod config;
pub mod domain;
pub mod mcp;
pub mod storage;
pub mod tools;

// Re-export public modules and types
pub use analytics::{AnalyticsEngine, ChartPoint, DashboardSummary, SeriesField, SleepTier};
pub use config::JournalConfig;
pub use domain::*;
pub use storage::{
    BlobStore, EntryStore, LoadOutcome, MemoryBlobStore, MoodStore, SaveOutcome, SqliteBlobStore,
    StorageError,
};

/// Errors that can occur during server operation
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Database error: {0}")]
    Database(#[from] storage::StorageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Main mood journal server that implements the MCP protocol
///
/// Owns the entry store for the whole session and the analytics settings
/// every statistic is computed with.
pub struct MoodJournalServer<B: BlobStore = SqliteBlobStore> {
    store: EntryStore<B>,
    analytics: AnalyticsEngine,
    config: JournalConfig,
    startup: LoadOutcome,
}

impl MoodJournalServer<SqliteBlobStore> {
    /// Create a mood journal server backed by the configured SQLite file
    ///
    /// This initializes the database schema if it doesn't already exist.
    pub fn new(config: JournalConfig) -> Result<Self, ServerError> {
        tracing::info!(
            "Initializing Mood Journal server with database: {:?}",
            config.database_path
        );

        let medium = SqliteBlobStore::new(config.database_path.clone())?;
        Ok(Self::with_medium(medium, config))
    }
}

impl<B: BlobStore> MoodJournalServer<B> {
    /// Create a server over any persistence medium and load the journal
    pub fn with_medium(medium: B, config: JournalConfig) -> Self {
        let mut store = EntryStore::new(medium, config.blob_name.clone());
        let mut startup = store.initialize();

        if matches!(startup, LoadOutcome::Empty) && config.seed_demo_data {
            match store.seed_demo_data(Utc::now()) {
                Ok(save) => {
                    if let Some(warning) = save.warning() {
                        tracing::warn!("{}", warning);
                    }
                    startup = LoadOutcome::Seeded(store.len());
                }
                Err(e) => tracing::warn!("Could not seed sample entries: {}", e),
            }
        }

        match &startup {
            LoadOutcome::Empty => tracing::info!("Starting with an empty journal"),
            LoadOutcome::Loaded(count) => tracing::info!("Loaded {} journal entries", count),
            LoadOutcome::Seeded(count) => tracing::info!("Seeded {} sample entries", count),
            LoadOutcome::Recovered(e) => {
                tracing::warn!("Stored journal was unreadable, starting empty: {}", e)
            }
        }

        Self {
            store,
            analytics: config.analytics(),
            config,
            startup,
        }
    }

    /// Run the MCP server, handling JSON-RPC requests over stdin/stdout
    ///
    /// This method returns once stdin is closed.
    pub async fn run(self) -> Result<(), ServerError> {
        tracing::info!(
            "Server started successfully, journal has {} entries",
            self.store.len()
        );

        let mut mcp_server = mcp::McpServer::new(self);
        mcp_server.run().await?;

        Ok(())
    }

    /// Get a reference to the entry store (useful for testing)
    pub fn store(&self) -> &EntryStore<B> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut EntryStore<B> {
        &mut self.store
    }

    /// Get a reference to the analytics engine (useful for testing)
    pub fn analytics(&self) -> &AnalyticsEngine {
        &self.analytics
    }

    pub fn config(&self) -> &JournalConfig {
        &self.config
    }

    /// What was found in the persistence medium at startup
    pub fn startup(&self) -> &LoadOutcome {
        &self.startup
    }
}
