/// MoodEntry entity for daily check-ins
///
/// This module defines the MoodEntry struct that represents a single mood
/// check-in, along with the create input and the partial update used to
/// edit an entry after the fact.

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::{ActivitySet, DomainError, EntryId, MoodLevel};

/// Weather at the time of the check-in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weather {
    pub temp: f64,
    pub condition: String,
}

/// A single mood check-in
///
/// Field names on the wire match the persisted journal format: `date` is an
/// RFC 3339 string and `timestamp` is the same instant in epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodEntry {
    /// Unique identifier, assigned once at creation
    pub id: EntryId,
    /// When the check-in is for (may be backdated)
    #[serde(rename = "date")]
    pub occurred_at: DateTime<Utc>,
    /// `occurred_at` in epoch milliseconds
    pub timestamp: i64,
    pub mood: MoodLevel,
    /// Energy level from 0 to 100
    #[serde(deserialize_with = "deserialize_energy")]
    pub energy: u8,
    /// Hours slept the night before
    #[serde(rename = "sleep")]
    pub sleep_hours: f64,
    pub activities: ActivitySet,
    /// Free-form journal note, editable after creation
    pub note: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather: Option<Weather>,
}

/// Everything the user fills in when logging a mood
///
/// The id and both timestamps are assigned by the store.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewMoodEntry {
    pub mood: MoodLevel,
    pub energy: u8,
    pub sleep_hours: f64,
    pub activities: ActivitySet,
    pub note: String,
    pub weather: Option<Weather>,
}

/// Partial update for an existing entry
///
/// Unset fields are left untouched. In practice only `note` is edited, but
/// any field except the id can be changed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MoodEntryPatch {
    pub occurred_at: Option<DateTime<Utc>>,
    pub mood: Option<MoodLevel>,
    pub energy: Option<u8>,
    pub sleep_hours: Option<f64>,
    pub activities: Option<ActivitySet>,
    pub note: Option<String>,
    pub weather: Option<Weather>,
}

impl MoodEntryPatch {
    /// A patch that only replaces the note
    pub fn note(note: impl Into<String>) -> Self {
        Self {
            note: Some(note.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl MoodEntry {
    /// Create a new entry with validation
    ///
    /// The timestamp is derived from `occurred_at` and a fresh id is assigned.
    pub fn new(fields: NewMoodEntry, occurred_at: DateTime<Utc>) -> Result<Self, DomainError> {
        Self::validate_energy(fields.energy)?;
        Self::validate_sleep(fields.sleep_hours)?;
        fields.activities.validate()?;

        Ok(Self {
            id: EntryId::new(),
            occurred_at,
            timestamp: occurred_at.timestamp_millis(),
            mood: fields.mood,
            energy: fields.energy,
            sleep_hours: fields.sleep_hours,
            activities: fields.activities,
            note: fields.note,
            weather: fields.weather,
        })
    }

    /// Apply a partial update
    ///
    /// The whole patch is validated before anything is written, so a
    /// rejected patch leaves the entry exactly as it was.
    pub fn apply(&mut self, patch: MoodEntryPatch) -> Result<(), DomainError> {
        if let Some(energy) = patch.energy {
            Self::validate_energy(energy)?;
        }
        if let Some(sleep) = patch.sleep_hours {
            Self::validate_sleep(sleep)?;
        }
        if let Some(activities) = &patch.activities {
            activities.validate()?;
        }

        if let Some(occurred_at) = patch.occurred_at {
            self.occurred_at = occurred_at;
            self.timestamp = occurred_at.timestamp_millis();
        }
        if let Some(mood) = patch.mood {
            self.mood = mood;
        }
        if let Some(energy) = patch.energy {
            self.energy = energy;
        }
        if let Some(sleep) = patch.sleep_hours {
            self.sleep_hours = sleep;
        }
        if let Some(activities) = patch.activities {
            self.activities = activities;
        }
        if let Some(note) = patch.note {
            self.note = note;
        }
        if let Some(weather) = patch.weather {
            self.weather = Some(weather);
        }
        Ok(())
    }

    /// The calendar day of this entry as seen from the given UTC offset
    pub fn calendar_day(&self, offset: &FixedOffset) -> NaiveDate {
        self.occurred_at.with_timezone(offset).date_naive()
    }

    /// Check if this entry has a note worth showing
    pub fn has_note(&self) -> bool {
        !self.note.trim().is_empty()
    }

    fn validate_energy(energy: u8) -> Result<(), DomainError> {
        if energy > 100 {
            return Err(DomainError::InvalidValue {
                message: format!("Energy must be between 0 and 100, got {}", energy),
            });
        }
        Ok(())
    }

    fn validate_sleep(hours: f64) -> Result<(), DomainError> {
        if !hours.is_finite() || hours < 0.0 {
            return Err(DomainError::InvalidValue {
                message: format!("Sleep hours must be a non-negative number, got {}", hours),
            });
        }
        Ok(())
    }
}

/// Older journals stored energy as a fractional slider value; round it.
fn deserialize_energy<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = f64::deserialize(deserializer)?;
    if !raw.is_finite() || !(0.0..=100.0).contains(&raw) {
        return Err(serde::de::Error::custom(format!(
            "energy must be between 0 and 100, got {}",
            raw
        )));
    }
    Ok(raw.round() as u8)
}
