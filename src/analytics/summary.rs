/// Summary statistics shown on the dashboard
///
/// Everything here is a pure function of the entry slice it is given. The
/// slice is expected newest first, the way the store hands it out.

use std::fmt;

use serde::Serialize;

use crate::domain::{MoodEntry, MoodLevel};

/// Average mood as a 0-100 stability score: `round(mean weight * 20)`
///
/// Not windowed; every entry counts. An empty journal scores 0.
pub fn average_mood_score(entries: &[MoodEntry]) -> u32 {
    if entries.is_empty() {
        return 0;
    }

    let total: u32 = entries.iter().map(|e| e.mood.weight()).sum();
    let mean = total as f64 / entries.len() as f64;
    (mean * 20.0).round() as u32
}

/// The most recently logged entries, at most `window` of them
pub fn recent_window(entries: &[MoodEntry], window: usize) -> &[MoodEntry] {
    &entries[..entries.len().min(window)]
}

/// Mean hours slept over the recent window, `None` if the window is empty
pub fn average_sleep(entries: &[MoodEntry], window: usize) -> Option<f64> {
    let recent = recent_window(entries, window);
    if recent.is_empty() {
        return None;
    }

    let total: f64 = recent.iter().map(|e| e.sleep_hours).sum();
    Some(total / recent.len() as f64)
}

/// Sleep quality bucket for the recent window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SleepTier {
    /// Under 6 hours
    Bad,
    /// 6 hours up to (not including) 7.5
    Good,
    /// 7.5 hours or more
    Great,
    /// No entries to judge
    #[serde(rename = "undefined")]
    Undefined,
}

impl SleepTier {
    pub fn from_hours(hours: f64) -> Self {
        if hours < 6.0 {
            SleepTier::Bad
        } else if hours < 7.5 {
            SleepTier::Good
        } else {
            SleepTier::Great
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SleepTier::Bad => "Bad",
            SleepTier::Good => "Good",
            SleepTier::Great => "Great",
            SleepTier::Undefined => "undefined",
        }
    }
}

impl fmt::Display for SleepTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Rate the average sleep over the recent window
pub fn sleep_rating(entries: &[MoodEntry], window: usize) -> SleepTier {
    average_sleep(entries, window)
        .map(SleepTier::from_hours)
        .unwrap_or(SleepTier::Undefined)
}

/// The mood shown as "you felt mostly ..." on the dashboard
///
/// This is the mood of the most recent entry, not a majority vote over the
/// window. Okay when the journal is empty.
pub fn dominant_mood(entries: &[MoodEntry]) -> MoodLevel {
    entries.first().map(|e| e.mood).unwrap_or(MoodLevel::Okay)
}

/// Coarse label for an energy reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EnergyLevel {
    High,
    Moderate,
    Low,
}

impl EnergyLevel {
    pub fn from_energy(energy: u8) -> Self {
        if energy > 80 {
            EnergyLevel::High
        } else if energy > 40 {
            EnergyLevel::Moderate
        } else {
            EnergyLevel::Low
        }
    }
}

impl fmt::Display for EnergyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EnergyLevel::High => "High",
            EnergyLevel::Moderate => "Moderate",
            EnergyLevel::Low => "Low",
        };
        f.write_str(label)
    }
}

/// Everything the dashboard header needs, computed in one pass over the journal
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub total_entries: usize,
    pub recent_streak: u32,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub average_mood_score: u32,
    pub dominant_mood: MoodLevel,
    pub average_sleep: Option<f64>,
    pub sleep_rating: SleepTier,
}
