/// In-memory blob storage
///
/// Used for tests and for running without a database. Writes can be made to
/// fail on demand to exercise the store's write-failure path.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::storage::{BlobStore, StorageError};

#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    blobs: RefCell<HashMap<String, String>>,
    fail_writes: Cell<bool>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an existing blob, e.g. a journal written by an older build
    pub fn with_blob(name: &str, contents: &str) -> Self {
        let store = Self::new();
        store
            .blobs
            .borrow_mut()
            .insert(name.to_string(), contents.to_string());
        store
    }

    /// Make every following write (and remove) fail until switched back off
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    fn check_writable(&self) -> Result<(), StorageError> {
        if self.fail_writes.get() {
            return Err(StorageError::Unavailable("writes are disabled".to_string()));
        }
        Ok(())
    }
}

impl BlobStore for MemoryBlobStore {
    fn read_blob(&self, name: &str) -> Result<Option<String>, StorageError> {
        Ok(self.blobs.borrow().get(name).cloned())
    }

    fn write_blob(&self, name: &str, contents: &str) -> Result<(), StorageError> {
        self.check_writable()?;
        self.blobs
            .borrow_mut()
            .insert(name.to_string(), contents.to_string());
        Ok(())
    }

    fn remove_blob(&self, name: &str) -> Result<(), StorageError> {
        self.check_writable()?;
        self.blobs.borrow_mut().remove(name);
        Ok(())
    }
}
