/// Tool for logging a mood check-in
///
/// This module implements the mood_log MCP tool.

use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domain::{mood_definition, DomainError, MoodLevel, NewMoodEntry};
use crate::storage::{MoodStore, StorageError};

/// Energy the logger form starts at
const DEFAULT_ENERGY: u8 = 75;
/// Sleep the logger form starts at
const DEFAULT_SLEEP_HOURS: f64 = 7.0;

/// Parameters for logging a mood
#[derive(Debug, Deserialize, JsonSchema)]
pub struct LogMoodParams {
    /// One of Great, Good, Okay, Low, Bad
    pub mood: String,
    /// Energy level 0-100 (defaults to 75)
    pub energy: Option<u8>,
    /// Hours slept (defaults to 7)
    pub sleep: Option<f64>,
    /// Activity tag ids, e.g. work, exercise, social
    pub activities: Option<Vec<String>>,
    /// Journal note
    pub note: Option<String>,
    /// Day to log for (YYYY-MM-DD) or an RFC 3339 timestamp; defaults to now
    pub date: Option<String>,
}

/// Response from logging a mood
#[derive(Debug, Serialize)]
pub struct LogMoodResponse {
    pub success: bool,
    pub message: String,
    pub entry_id: Option<String>,
    /// Set when the entry is kept for this session but could not be saved
    pub warning: Option<String>,
}

/// Resolve the `date` argument to an instant
///
/// A bare date means the start of that day in the journal's offset.
fn parse_occurred_at(
    raw: &str,
    offset: &FixedOffset,
) -> Result<DateTime<Utc>, DomainError> {
    let raw = raw.trim();

    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return Ok(at.with_timezone(&Utc));
    }

    let day = NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
        DomainError::InvalidDate(format!("'{}' is not YYYY-MM-DD or RFC 3339", raw))
    })?;

    offset
        .from_local_datetime(&day.and_time(chrono::NaiveTime::MIN))
        .single()
        .map(|at| at.with_timezone(&Utc))
        .ok_or_else(|| DomainError::InvalidDate(format!("'{}' has no midnight", raw)))
}

/// Log a mood using the provided store
pub fn log_mood<S: MoodStore>(
    store: &mut S,
    params: LogMoodParams,
    offset: &FixedOffset,
) -> Result<LogMoodResponse, StorageError> {
    let mood: MoodLevel = params.mood.parse()?;

    let occurred_at = params
        .date
        .as_deref()
        .map(|raw| parse_occurred_at(raw, offset))
        .transpose()?;

    let fields = NewMoodEntry {
        mood,
        energy: params.energy.unwrap_or(DEFAULT_ENERGY),
        sleep_hours: params.sleep.unwrap_or(DEFAULT_SLEEP_HOURS),
        activities: params.activities.unwrap_or_default().into_iter().collect(),
        note: params.note.unwrap_or_default(),
        weather: None,
    };

    let created = store.create(fields, occurred_at)?;
    let definition = mood_definition(mood);

    Ok(LogMoodResponse {
        success: true,
        message: format!("{} Logged {} mood. Entry ID: {}", definition.emoji, mood, created.id),
        entry_id: Some(created.id.to_string()),
        warning: created.save.warning(),
    })
}
