/// Tool for listing journal entries
///
/// This module implements the mood_list MCP tool, a newest-first timeline.

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::analytics::EnergyLevel;
use crate::domain::{activity, mood_definition, MoodEntry};
use crate::storage::MoodStore;

/// Parameters for listing entries
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct ListEntriesParams {
    /// Show at most this many entries (newest first)
    pub limit: Option<usize>,
}

/// One row of the timeline
#[derive(Debug, Serialize)]
pub struct EntrySummary {
    pub entry_id: String,
    /// "Today" or a short date such as "Mar 5"
    pub day: String,
    /// Local time of day, HH:MM
    pub time: String,
    pub mood: String,
    pub energy: u8,
    pub energy_level: String,
    pub sleep: f64,
    /// Activity labels; unknown ids are left out
    pub activities: Vec<String>,
    pub note: String,
}

/// Response from listing entries
#[derive(Debug, Serialize)]
pub struct ListEntriesResponse {
    pub entries: Vec<EntrySummary>,
    pub total: usize,
    pub message: String,
}

fn summarize_entry(entry: &MoodEntry, today: NaiveDate, offset: &FixedOffset) -> EntrySummary {
    let local = entry.occurred_at.with_timezone(offset);
    let day = if local.date_naive() == today {
        "Today".to_string()
    } else {
        local.format("%b %-d").to_string()
    };

    EntrySummary {
        entry_id: entry.id.to_string(),
        day,
        time: local.format("%H:%M").to_string(),
        mood: entry.mood.to_string(),
        energy: entry.energy,
        energy_level: EnergyLevel::from_energy(entry.energy).to_string(),
        sleep: entry.sleep_hours,
        activities: entry
            .activities
            .iter()
            .filter_map(activity)
            .map(|tag| tag.label.to_string())
            .collect(),
        note: entry.note.clone(),
    }
}

/// List entries from the provided store
pub fn list_entries<S: MoodStore>(
    store: &S,
    params: ListEntriesParams,
    offset: &FixedOffset,
    now: DateTime<Utc>,
) -> ListEntriesResponse {
    let all = store.entries();
    let shown = params.limit.unwrap_or(all.len()).min(all.len());
    let today = now.with_timezone(offset).date_naive();

    let entries: Vec<EntrySummary> = all[..shown]
        .iter()
        .map(|e| summarize_entry(e, today, offset))
        .collect();

    let message = if entries.is_empty() {
        "No entries yet. Log your first mood to get started!".to_string()
    } else {
        let rows = all[..shown]
            .iter()
            .zip(&entries)
            .map(|(entry, row)| {
                let mut line = format!(
                    "{} {} {} · {} ({})\n   Energy: {}% · Sleep: {}h",
                    row.day,
                    row.time,
                    mood_definition(entry.mood).emoji,
                    row.mood,
                    entry.id.short(),
                    row.energy,
                    row.sleep
                );
                if !row.activities.is_empty() {
                    line.push_str(&format!("\n   Activities: {}", row.activities.join(", ")));
                }
                if entry.has_note() {
                    line.push_str(&format!("\n   Note: {}", row.note));
                }
                line
            })
            .collect::<Vec<_>>()
            .join("\n\n");
        format!("📓 Journal ({} of {} entries)\n\n{}", shown, all.len(), rows)
    };

    ListEntriesResponse {
        entries,
        total: all.len(),
        message,
    }
}
