/// Tool for the dashboard summary
///
/// This module implements the mood_summary MCP tool.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::analytics::{AnalyticsEngine, DashboardSummary};
use crate::domain::mood_definition;
use crate::storage::MoodStore;

/// Response from the summary tool
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub summary: DashboardSummary,
    pub message: String,
}

/// Summarize the journal in the provided store
pub fn mood_summary<S: MoodStore>(
    store: &S,
    analytics: &AnalyticsEngine,
    now: DateTime<Utc>,
) -> SummaryResponse {
    let summary = analytics.summarize(store.entries(), analytics.today(now));

    let message = if summary.total_entries == 0 {
        "No entries yet. Log your first mood to start building a streak!".to_string()
    } else {
        let dominant = mood_definition(summary.dominant_mood);
        let sleep = match summary.average_sleep {
            Some(hours) => format!("{} ({:.1}h average)", summary.sleep_rating, hours),
            None => summary.sleep_rating.to_string(),
        };
        format!(
            "{} You felt mostly {} this week.\n\n\
             🔥 Streak: {} day{} (longest: {})\n\
             ⚖️ Stability: {}/100\n\
             🌙 Sleep: {}\n\
             📓 Entries: {}",
            dominant.emoji,
            summary.dominant_mood,
            summary.recent_streak,
            if summary.recent_streak == 1 { "" } else { "s" },
            summary.longest_streak,
            summary.average_mood_score,
            sleep,
            summary.total_entries
        )
    };

    SummaryResponse { summary, message }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::SleepTier;
    use crate::domain::{MoodLevel, NewMoodEntry};
    use crate::storage::{EntryStore, MemoryBlobStore, DEFAULT_BLOB_NAME};
    use chrono::TimeZone;

    #[test]
    fn test_summary_message() {
        let now = Utc.with_ymd_and_hms(2024, 3, 10, 20, 0, 0).unwrap();
        let mut store = EntryStore::new(MemoryBlobStore::new(), DEFAULT_BLOB_NAME);
        let fields = NewMoodEntry {
            mood: MoodLevel::Great,
            sleep_hours: 8.0,
            ..NewMoodEntry::default()
        };
        store.create(fields, Some(now)).unwrap();

        let response = mood_summary(&store, &AnalyticsEngine::utc(), now);
        assert_eq!(response.summary.average_mood_score, 100);
        assert_eq!(response.summary.sleep_rating, SleepTier::Great);
        assert!(response.message.contains("You felt mostly Great"));
        assert!(response.message.contains("Streak: 1 day "));
    }

    #[test]
    fn test_summary_of_empty_journal() {
        let store = EntryStore::new(MemoryBlobStore::new(), DEFAULT_BLOB_NAME);
        let response = mood_summary(&store, &AnalyticsEngine::utc(), Utc::now());

        assert_eq!(response.summary.dominant_mood, MoodLevel::Okay);
        assert!(response.message.contains("No entries"));
    }
}
