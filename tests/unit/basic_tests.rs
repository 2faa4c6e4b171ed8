/// Basic unit tests to verify core functionality
use chrono::{Duration, TimeZone, Utc};
use mood_journal_mcp::analytics::{average_mood_score, sleep_rating, DEFAULT_WINDOW};
use mood_journal_mcp::*;

fn store() -> EntryStore<MemoryBlobStore> {
    EntryStore::new(MemoryBlobStore::new(), storage::DEFAULT_BLOB_NAME)
}

fn logged(mood: MoodLevel, sleep_hours: f64) -> NewMoodEntry {
    NewMoodEntry {
        mood,
        energy: 50,
        sleep_hours,
        ..NewMoodEntry::default()
    }
}

#[cfg(test)]
mod basic_unit_tests {
    use super::*;

    #[test]
    fn test_create_prepends_one_entry() {
        let mut store = store();
        store.create(logged(MoodLevel::Okay, 7.0), None).unwrap();

        let before = store.len();
        let created = store.create(logged(MoodLevel::Great, 8.0), None).unwrap();

        assert_eq!(store.len(), before + 1);
        assert_eq!(store.entries()[0].id, created.id);
    }

    #[test]
    fn test_note_update_changes_only_the_note() {
        let mut store = store();
        let mut fields = logged(MoodLevel::Good, 6.5);
        fields.activities.insert("reading");
        fields.weather = Some(Weather {
            temp: 18.0,
            condition: "Cloudy".to_string(),
        });
        let created = store.create(fields, None).unwrap();
        let before = store.entries()[0].clone();

        store
            .update(&created.id, MoodEntryPatch::note("x"))
            .unwrap();

        let after = &store.entries()[0];
        assert_eq!(after.note, "x");
        assert_eq!(MoodEntry { note: String::new(), ..after.clone() }, before);
    }

    #[test]
    fn test_update_unknown_id_leaves_journal_unchanged() {
        let mut store = store();
        store.create(logged(MoodLevel::Low, 5.0), None).unwrap();
        let before = store.snapshot();

        let outcome = store
            .update(&EntryId::new(), MoodEntryPatch::note("x"))
            .unwrap();

        assert!(matches!(outcome, storage::Updated::NoMatch));
        assert_eq!(store.entries(), before.as_slice());
    }

    #[test]
    fn test_average_mood_score() {
        let now = Utc::now();
        let great = MoodEntry::new(logged(MoodLevel::Great, 7.0), now).unwrap();
        let bad = MoodEntry::new(logged(MoodLevel::Bad, 7.0), now).unwrap();

        assert_eq!(average_mood_score(&[]), 0);
        assert_eq!(average_mood_score(&[great]), 100);
        assert_eq!(average_mood_score(&[bad]), 20);
    }

    #[test]
    fn test_sleep_rating_thresholds() {
        let now = Utc::now();
        let rate = |hours: &[f64]| {
            let entries: Vec<MoodEntry> = hours
                .iter()
                .map(|h| MoodEntry::new(logged(MoodLevel::Okay, *h), now).unwrap())
                .collect();
            sleep_rating(&entries, DEFAULT_WINDOW)
        };

        assert_eq!(rate(&[5.0, 7.0]), SleepTier::Good);
        assert_eq!(rate(&[5.9]), SleepTier::Bad);
        assert_eq!(rate(&[7.0, 8.0]), SleepTier::Great);
        assert_eq!(rate(&[]).label(), "undefined");
    }

    #[test]
    fn test_weekly_series_is_oldest_first() {
        let mut store = store();
        let start = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        for (i, mood) in [MoodLevel::Okay, MoodLevel::Great, MoodLevel::Low]
            .into_iter()
            .enumerate()
        {
            store
                .create(logged(mood, 7.0), Some(start + Duration::days(i as i64)))
                .unwrap();
        }

        let points = AnalyticsEngine::utc().weekly_series(store.entries(), SeriesField::Mood);
        let values: Vec<f64> = points.iter().map(|p| p.value).collect();
        assert_eq!(values, vec![80.0, 120.0, 60.0]);
    }

    #[test]
    fn test_collection_round_trip() {
        let mut store = store();
        let start = Utc.with_ymd_and_hms(2024, 2, 28, 23, 30, 0).unwrap();
        for (i, mood) in MoodLevel::ALL.into_iter().enumerate() {
            let mut fields = logged(mood, 6.0 + i as f64 * 0.5);
            fields.note = format!("entry {}", i);
            fields.activities.insert("social");
            store
                .create(fields, Some(start + Duration::hours(i as i64 * 13)))
                .unwrap();
        }

        let json = serde_json::to_string(store.entries()).unwrap();
        let decoded: Vec<MoodEntry> = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, store.snapshot());
    }

    #[test]
    fn test_corrupt_blob_initializes_empty() {
        let medium = MemoryBlobStore::with_blob(storage::DEFAULT_BLOB_NAME, "{ not a journal");
        let mut store = EntryStore::new(medium, storage::DEFAULT_BLOB_NAME);

        assert!(matches!(store.initialize(), LoadOutcome::Recovered(_)));
        assert!(store.is_empty());
    }

    #[test]
    fn test_mood_parsing() {
        assert_eq!("great".parse::<MoodLevel>().unwrap(), MoodLevel::Great);
        assert_eq!("BAD".parse::<MoodLevel>().unwrap(), MoodLevel::Bad);
        assert!("meh".parse::<MoodLevel>().is_err());
    }
}
