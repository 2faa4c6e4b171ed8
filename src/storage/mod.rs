/// Storage layer for persisting the mood journal
///
/// The journal is persisted as one named blob holding the whole
/// newest-first entry collection as JSON. `BlobStore` is the persistence
/// medium; `EntryStore` owns the in-memory collection on top of it.

pub mod entries;
pub mod memory;
pub mod migrations;
pub mod sqlite;

// Re-export the main storage types
pub use entries::*;
pub use memory::MemoryBlobStore;
pub use sqlite::SqliteBlobStore;

use thiserror::Error;

use crate::domain::DomainError;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database connection error: {0}")]
    Connection(String),

    #[error("Database query error: {0}")]
    Query(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid entry: {0}")]
    Domain(#[from] DomainError),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Migration error: {0}")]
    Migration(String),
}

/// Trait defining the persistence medium for named blobs
///
/// This lets the entry store run against SQLite on disk, or an in-memory
/// map in tests, without knowing which.
pub trait BlobStore {
    /// Read a blob by name; `None` if it was never written
    fn read_blob(&self, name: &str) -> Result<Option<String>, StorageError>;

    /// Replace the blob's contents in one write
    fn write_blob(&self, name: &str, contents: &str) -> Result<(), StorageError>;

    /// Remove a blob; removing a missing blob is not an error
    fn remove_blob(&self, name: &str) -> Result<(), StorageError>;
}
