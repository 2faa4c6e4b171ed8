/// Analytics engine for mood statistics
///
/// The functions in the submodules are pure: the same entries give the same
/// answer. Calendar days are computed in a fixed UTC offset, and anything
/// that needs "today" takes it as an argument instead of reading the clock.

pub mod series;
pub mod streak;
pub mod summary;

pub use series::*;
pub use streak::*;
pub use summary::*;

use chrono::{DateTime, FixedOffset, NaiveDate, Offset, Utc};

use crate::domain::MoodEntry;

/// Number of most recent entries the dashboard looks at
pub const DEFAULT_WINDOW: usize = 7;

/// Analytics engine holding the settings shared by every statistic
///
/// Cheap to copy; it never holds entries.
#[derive(Debug, Clone, Copy)]
pub struct AnalyticsEngine {
    window: usize,
    offset: FixedOffset,
}

impl AnalyticsEngine {
    /// Create an analytics engine; a zero window is treated as one entry
    pub fn new(window: usize, offset: FixedOffset) -> Self {
        Self {
            window: window.max(1),
            offset,
        }
    }

    /// Default window, days counted in UTC
    pub fn utc() -> Self {
        Self::new(DEFAULT_WINDOW, Utc.fix())
    }

    pub fn window(&self) -> usize {
        self.window
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// The calendar day `now` falls on in this engine's offset
    pub fn today(&self, now: DateTime<Utc>) -> NaiveDate {
        now.with_timezone(&self.offset).date_naive()
    }

    /// Compute every dashboard statistic for the journal
    pub fn summarize(&self, entries: &[MoodEntry], today: NaiveDate) -> DashboardSummary {
        DashboardSummary {
            total_entries: entries.len(),
            recent_streak: recent_streak(entries, &self.offset),
            current_streak: current_streak(entries, today, &self.offset),
            longest_streak: longest_streak(entries, &self.offset),
            average_mood_score: average_mood_score(entries),
            dominant_mood: dominant_mood(entries),
            average_sleep: average_sleep(entries, self.window),
            sleep_rating: sleep_rating(entries, self.window),
        }
    }

    /// Chart series over this engine's window
    pub fn weekly_series(&self, entries: &[MoodEntry], field: SeriesField) -> Vec<ChartPoint> {
        weekly_series(entries, field, self.window, &self.offset)
    }
}

impl Default for AnalyticsEngine {
    fn default() -> Self {
        Self::utc()
    }
}
