/// SQLite implementation of the blob storage interface
///
/// Each named blob is one row in the `blobs` table. Writes replace the
/// whole row, so a reader never sees half of a journal.

use std::path::PathBuf;

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};

use crate::storage::{migrations, BlobStore, StorageError};

/// SQLite-based blob storage
pub struct SqliteBlobStore {
    conn: Connection,
}

impl SqliteBlobStore {
    /// Open (or create) the database file and bring the schema up to date
    pub fn new(db_path: PathBuf) -> Result<Self, StorageError> {
        let conn = Connection::open(&db_path)
            .map_err(|e| StorageError::Connection(format!("Failed to open database: {}", e)))?;

        migrations::initialize_database(&conn)?;

        tracing::info!("SQLite storage initialized at: {:?}", db_path);

        Ok(Self { conn })
    }

    /// An in-memory database, gone when the store is dropped
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| StorageError::Connection(format!("Failed to open database: {}", e)))?;

        migrations::initialize_database(&conn)?;

        Ok(Self { conn })
    }
}

impl BlobStore for SqliteBlobStore {
    fn read_blob(&self, name: &str) -> Result<Option<String>, StorageError> {
        let contents = self
            .conn
            .query_row(
                "SELECT contents FROM blobs WHERE name = ?1",
                params![name],
                |row| row.get::<_, String>(0),
            )
            .optional()?;

        Ok(contents)
    }

    fn write_blob(&self, name: &str, contents: &str) -> Result<(), StorageError> {
        self.conn.execute(
            "INSERT INTO blobs (name, contents, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(name) DO UPDATE SET
                contents = excluded.contents,
                updated_at = excluded.updated_at",
            params![name, contents, Utc::now().to_rfc3339()],
        )?;

        tracing::debug!("Wrote blob '{}' ({} bytes)", name, contents.len());
        Ok(())
    }

    fn remove_blob(&self, name: &str) -> Result<(), StorageError> {
        self.conn
            .execute("DELETE FROM blobs WHERE name = ?1", params![name])?;

        tracing::debug!("Removed blob '{}'", name);
        Ok(())
    }
}
