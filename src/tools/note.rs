/// Tool for editing the journal note of an entry
///
/// This module implements the mood_note MCP tool. An id that matches no
/// entry is not an error: nothing changes and the caller is told so.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domain::{EntryId, MoodEntryPatch};
use crate::storage::{MoodStore, StorageError, Updated};

/// Parameters for editing a note
#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateNoteParams {
    /// ID of the entry to edit
    pub entry_id: String,
    /// New note text (replaces the old note)
    pub note: String,
}

/// Response from editing a note
#[derive(Debug, Serialize)]
pub struct UpdateNoteResponse {
    pub success: bool,
    /// Whether an entry with this id existed
    pub found: bool,
    pub message: String,
    pub warning: Option<String>,
}

/// Replace the note on an entry using the provided store
pub fn update_note<S: MoodStore>(
    store: &mut S,
    params: UpdateNoteParams,
) -> Result<UpdateNoteResponse, StorageError> {
    // A blank id can't match anything
    let Ok(entry_id) = EntryId::from_string(&params.entry_id) else {
        return Ok(not_found(&params.entry_id));
    };

    match store.update(&entry_id, MoodEntryPatch::note(params.note))? {
        Updated::Applied(save) => Ok(UpdateNoteResponse {
            success: true,
            found: true,
            message: format!("✏️ Updated note on entry {}", entry_id.short()),
            warning: save.warning(),
        }),
        Updated::NoMatch => Ok(not_found(&params.entry_id)),
    }
}

fn not_found(raw_id: &str) -> UpdateNoteResponse {
    UpdateNoteResponse {
        success: true,
        found: false,
        message: format!("No entry with ID '{}', nothing changed", raw_id),
        warning: None,
    }
}
