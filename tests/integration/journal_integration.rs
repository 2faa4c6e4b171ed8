/// Journal persistence tests against a real SQLite file
use chrono::{TimeZone, Utc};
use mood_journal_mcp::*;
use std::path::PathBuf;
use tempfile::NamedTempFile;

fn config(path: PathBuf) -> JournalConfig {
    JournalConfig::new(path).with_offset_minutes(0).unwrap()
}

fn entry(mood: MoodLevel, sleep_hours: f64, activities: &[&str]) -> NewMoodEntry {
    NewMoodEntry {
        mood,
        energy: 60,
        sleep_hours,
        activities: activities.iter().map(|a| a.to_string()).collect(),
        note: String::new(),
        weather: None,
    }
}

#[cfg(test)]
mod journal_integration_tests {
    use super::*;

    #[test]
    fn test_journal_survives_restart() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let db_path = temp_file.path().to_path_buf();

        let written = {
            let mut server = MoodJournalServer::new(config(db_path.clone()))
                .expect("Failed to create first server");
            assert!(matches!(server.startup(), LoadOutcome::Empty));

            let store = server.store_mut();
            store
                .create(entry(MoodLevel::Good, 7.25, &["work"]), None)
                .unwrap();
            let backdated = Utc.with_ymd_and_hms(2024, 3, 1, 21, 15, 0).unwrap();
            store
                .create(entry(MoodLevel::Bad, 4.0, &["gaming", "movies"]), Some(backdated))
                .unwrap();
            let created = store
                .create(entry(MoodLevel::Great, 9.0, &[]), None)
                .unwrap();
            assert!(created.save.is_persisted());

            store
                .update(&created.id, MoodEntryPatch::note("Beach day"))
                .unwrap();
            store.snapshot()
        };

        let server = MoodJournalServer::new(config(db_path)).expect("Failed to reopen server");
        assert!(matches!(server.startup(), LoadOutcome::Loaded(3)));
        assert_eq!(server.store().entries(), written.as_slice());
        assert_eq!(server.store().entries()[0].note, "Beach day");
    }

    #[test]
    fn test_corrupt_journal_starts_empty() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let db_path = temp_file.path().to_path_buf();

        SqliteBlobStore::new(db_path.clone())
            .unwrap()
            .write_blob(storage::DEFAULT_BLOB_NAME, "[{\"id\": 12")
            .unwrap();

        let mut server = MoodJournalServer::new(config(db_path.clone())).unwrap();
        assert!(matches!(server.startup(), LoadOutcome::Recovered(_)));
        assert!(server.store().is_empty());

        // The next write replaces the unreadable blob
        server
            .store_mut()
            .create(entry(MoodLevel::Okay, 7.0, &[]), None)
            .unwrap();
        drop(server);

        let server = MoodJournalServer::new(config(db_path)).unwrap();
        assert!(matches!(server.startup(), LoadOutcome::Loaded(1)));
    }

    #[test]
    fn test_demo_seed_only_on_empty_journal() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let db_path = temp_file.path().to_path_buf();

        let mut seeded = config(db_path.clone());
        seeded.seed_demo_data = true;

        let server = MoodJournalServer::new(seeded.clone()).unwrap();
        assert!(matches!(server.startup(), LoadOutcome::Seeded(7)));
        assert_eq!(server.store().len(), 7);
        drop(server);

        let server = MoodJournalServer::new(seeded).unwrap();
        assert!(matches!(server.startup(), LoadOutcome::Loaded(7)));
        assert_eq!(server.store().len(), 7);
    }

    #[test]
    fn test_separate_blob_names_are_separate_journals() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let db_path = temp_file.path().to_path_buf();

        let mut first = MoodJournalServer::new(config(db_path.clone())).unwrap();
        first
            .store_mut()
            .create(entry(MoodLevel::Good, 8.0, &[]), None)
            .unwrap();

        let mut other = config(db_path);
        other.blob_name = "other_journal".to_string();
        let second = MoodJournalServer::new(other).unwrap();
        assert!(second.store().is_empty());
    }

    #[test]
    fn test_statistics_over_stored_journal() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let mut server = MoodJournalServer::new(config(temp_file.path().to_path_buf())).unwrap();

        for (day, mood, sleep) in [
            (10, MoodLevel::Bad, 5.0),
            (11, MoodLevel::Okay, 6.0),
            (12, MoodLevel::Great, 7.0),
        ] {
            let at = Utc.with_ymd_and_hms(2024, 6, day, 8, 0, 0).unwrap();
            server
                .store_mut()
                .create(entry(mood, sleep, &[]), Some(at))
                .unwrap();
        }

        let analytics = *server.analytics();
        let today = Utc.with_ymd_and_hms(2024, 6, 13, 9, 0, 0).unwrap().date_naive();
        let summary = analytics.summarize(server.store().entries(), today);

        assert_eq!(summary.total_entries, 3);
        assert_eq!(summary.recent_streak, 3);
        assert_eq!(summary.current_streak, 3);
        // (5 + 3 + 1) / 3 = 3, scaled to 60
        assert_eq!(summary.average_mood_score, 60);
        assert_eq!(summary.sleep_rating, SleepTier::Good);
        assert_eq!(summary.dominant_mood, MoodLevel::Great);

        let points = analytics.weekly_series(server.store().entries(), SeriesField::Mood);
        let values: Vec<f64> = points.iter().map(|p| p.value).collect();
        assert_eq!(values, vec![40.0, 80.0, 120.0]);
        assert_eq!(points[0].label, "Mon");
    }
}
