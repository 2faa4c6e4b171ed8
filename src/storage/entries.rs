/// The entry store: the canonical, newest-first mood journal
///
/// The in-memory collection is authoritative for the session. Every
/// successful create or update rewrites the whole collection to the
/// persistence medium as one blob.

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info, warn};

use crate::domain::{EntryId, MoodEntry, MoodEntryPatch, MoodLevel, NewMoodEntry};
use crate::storage::{BlobStore, StorageError};

/// Name of the blob the journal is stored under unless configured otherwise
pub const DEFAULT_BLOB_NAME: &str = "moodflow_entries";

/// What `initialize` found in the persistence medium
#[derive(Debug)]
pub enum LoadOutcome {
    /// No journal has been written yet
    Empty,
    /// A journal was read with this many entries
    Loaded(usize),
    /// No journal existed and this many sample entries were written
    Seeded(usize),
    /// The stored journal could not be read or parsed and was discarded
    Recovered(StorageError),
}

/// Whether a change reached the persistence medium
///
/// A failed write never rolls back the in-memory change.
#[derive(Debug)]
pub enum SaveOutcome {
    Persisted,
    NotPersisted(StorageError),
}

impl SaveOutcome {
    pub fn is_persisted(&self) -> bool {
        matches!(self, SaveOutcome::Persisted)
    }

    /// Message to show the user when the write did not go through
    pub fn warning(&self) -> Option<String> {
        match self {
            SaveOutcome::Persisted => None,
            SaveOutcome::NotPersisted(e) => Some(format!(
                "Saved for this session only, could not write the journal: {}",
                e
            )),
        }
    }
}

/// Result of creating an entry
#[derive(Debug)]
pub struct Created {
    pub id: EntryId,
    pub save: SaveOutcome,
}

/// Result of updating an entry
#[derive(Debug)]
pub enum Updated {
    /// The entry was changed
    Applied(SaveOutcome),
    /// No entry has this id; nothing changed and nothing was written
    NoMatch,
}

/// Trait defining the journal interface the tools work against
///
/// Consumers get a handle to something implementing this instead of looking
/// the journal up from global state.
pub trait MoodStore {
    /// Log a new entry, backdated to `occurred_at` if given
    fn create(
        &mut self,
        fields: NewMoodEntry,
        occurred_at: Option<DateTime<Utc>>,
    ) -> Result<Created, StorageError>;

    /// Merge `patch` into the entry with this id
    fn update(&mut self, id: &EntryId, patch: MoodEntryPatch) -> Result<Updated, StorageError>;

    /// All entries, newest first
    fn entries(&self) -> &[MoodEntry];

    /// Look up a single entry
    fn get(&self, id: &EntryId) -> Option<&MoodEntry> {
        self.entries().iter().find(|e| &e.id == id)
    }
}

/// `MoodStore` backed by a named blob in a `BlobStore`
pub struct EntryStore<B: BlobStore> {
    medium: B,
    blob_name: String,
    entries: Vec<MoodEntry>,
}

impl<B: BlobStore> EntryStore<B> {
    /// Create an empty store; call `initialize` to load the saved journal
    pub fn new(medium: B, blob_name: impl Into<String>) -> Self {
        Self {
            medium,
            blob_name: blob_name.into(),
            entries: Vec::new(),
        }
    }

    /// Load the persisted journal
    ///
    /// A journal that cannot be read or parsed is discarded and the store
    /// starts empty. The bad blob is left in place until the next write
    /// replaces it.
    pub fn initialize(&mut self) -> LoadOutcome {
        let raw = match self.medium.read_blob(&self.blob_name) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                info!("No saved journal under '{}', starting empty", self.blob_name);
                self.entries.clear();
                return LoadOutcome::Empty;
            }
            Err(e) => {
                warn!("Failed to read journal '{}': {}", self.blob_name, e);
                self.entries.clear();
                return LoadOutcome::Recovered(e);
            }
        };

        match serde_json::from_str::<Vec<MoodEntry>>(&raw) {
            Ok(entries) => {
                info!("Loaded {} journal entries", entries.len());
                self.entries = entries;
                LoadOutcome::Loaded(self.entries.len())
            }
            Err(e) => {
                warn!("Failed to parse journal '{}', starting empty: {}", self.blob_name, e);
                self.entries.clear();
                LoadOutcome::Recovered(e.into())
            }
        }
    }

    /// Fill an empty journal with a week of sample entries
    ///
    /// One entry per day going back from `now`, newest first.
    pub fn seed_demo_data(&mut self, now: DateTime<Utc>) -> Result<SaveOutcome, StorageError> {
        let mut seeded = Vec::with_capacity(7);
        for i in 0..7i64 {
            let mood = if i % 2 == 0 {
                MoodLevel::Great
            } else if i % 3 == 0 {
                MoodLevel::Good
            } else {
                MoodLevel::Okay
            };
            let fields = NewMoodEntry {
                mood,
                energy: 75,
                sleep_hours: 7.5,
                activities: ["work", "exercise"].into_iter().collect(),
                note: "Generated sample entry".to_string(),
                weather: None,
            };
            seeded.push(MoodEntry::new(fields, now - Duration::days(i))?);
        }

        info!("Seeded journal with {} sample entries", seeded.len());
        self.entries = seeded;
        Ok(self.persist())
    }

    /// Drop every entry and remove the saved journal
    pub fn clear(&mut self) -> SaveOutcome {
        self.entries.clear();
        match self.medium.remove_blob(&self.blob_name) {
            Ok(()) => SaveOutcome::Persisted,
            Err(e) => {
                warn!("Failed to remove journal '{}': {}", self.blob_name, e);
                SaveOutcome::NotPersisted(e)
            }
        }
    }

    /// A copy of the current collection
    pub fn snapshot(&self) -> Vec<MoodEntry> {
        self.entries.clone()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The persistence medium (useful for testing)
    pub fn medium(&self) -> &B {
        &self.medium
    }

    /// Write the whole collection as one blob
    fn persist(&self) -> SaveOutcome {
        let result = serde_json::to_string(&self.entries)
            .map_err(StorageError::from)
            .and_then(|json| self.medium.write_blob(&self.blob_name, &json));

        match result {
            Ok(()) => SaveOutcome::Persisted,
            Err(e) => {
                warn!("Journal write failed, keeping in-memory state: {}", e);
                SaveOutcome::NotPersisted(e)
            }
        }
    }
}

impl<B: BlobStore> MoodStore for EntryStore<B> {
    fn create(
        &mut self,
        fields: NewMoodEntry,
        occurred_at: Option<DateTime<Utc>>,
    ) -> Result<Created, StorageError> {
        let entry = MoodEntry::new(fields, occurred_at.unwrap_or_else(Utc::now))?;
        let id = entry.id.clone();

        debug!("Created mood entry {} ({})", id, entry.mood);
        self.entries.insert(0, entry);

        Ok(Created {
            id,
            save: self.persist(),
        })
    }

    fn update(&mut self, id: &EntryId, patch: MoodEntryPatch) -> Result<Updated, StorageError> {
        let Some(entry) = self.entries.iter_mut().find(|e| &e.id == id) else {
            debug!("Update for unknown entry {} ignored", id);
            return Ok(Updated::NoMatch);
        };

        entry.apply(patch)?;
        debug!("Updated mood entry {}", id);

        Ok(Updated::Applied(self.persist()))
    }

    fn entries(&self) -> &[MoodEntry] {
        &self.entries
    }
}
