/// Chart-ready series over the recent window
///
/// Note the scales: the mood chart uses `weight * 20 + 20` on the fixed
/// weights, so Bad (weight 1) plots at 40 and Great (weight 5) at 120. The
/// bottom of the chart axis is 20, but no mood maps there. This is not the
/// 0-100 average mood score.

use std::str::FromStr;

use chrono::FixedOffset;
use serde::Serialize;

use crate::analytics::summary::recent_window;
use crate::domain::{DomainError, MoodEntry, MoodLevel};

/// Which value to plot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesField {
    #[default]
    Mood,
    Sleep,
}

impl FromStr for SeriesField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mood" => Ok(SeriesField::Mood),
            "sleep" => Ok(SeriesField::Sleep),
            _ => Err(DomainError::InvalidValue {
                message: format!("Invalid series '{}'. Valid options: mood, sleep", s),
            }),
        }
    }
}

/// One point on a chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    /// Short weekday of the entry, e.g. "Mon"
    pub label: String,
    pub value: f64,
}

/// Chart value for a mood
pub fn mood_chart_value(mood: MoodLevel) -> u32 {
    mood.weight() * 20 + 20
}

/// Series for the most recent `window` entries, oldest first
///
/// Fewer entries than the window just means a shorter series. Entries are
/// put in chronological order by timestamp, so a backdated entry lands
/// where it belongs rather than at the end.
pub fn weekly_series(
    entries: &[MoodEntry],
    field: SeriesField,
    window: usize,
    offset: &FixedOffset,
) -> Vec<ChartPoint> {
    let mut recent: Vec<&MoodEntry> = recent_window(entries, window).iter().collect();
    recent.sort_by_key(|e| e.timestamp);

    recent
        .into_iter()
        .map(|e| ChartPoint {
            label: e.occurred_at.with_timezone(offset).format("%a").to_string(),
            value: match field {
                SeriesField::Mood => f64::from(mood_chart_value(e.mood)),
                SeriesField::Sleep => e.sleep_hours,
            },
        })
        .collect()
}
