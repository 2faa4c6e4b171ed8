/// Core types and enums used throughout the domain layer
///
/// This module defines the fundamental types like MoodLevel and EntryId
/// that are used by MoodEntry, the store and the statistics engine.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::DomainError;

/// Unique identifier for a mood entry
///
/// Ids are opaque strings. New ids are random UUIDs, but journals written by
/// older builds use ids such as `seed-3`, and those must load and stay
/// editable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    /// Generate a new random entry ID
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Create an entry ID from a string (useful for tool arguments)
    pub fn from_string(s: &str) -> Result<Self, DomainError> {
        let id = s.trim();
        if id.is_empty() {
            return Err(DomainError::InvalidValue {
                message: "Entry ID cannot be empty".to_string(),
            });
        }
        Ok(Self(id.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// At most the first eight characters, used when listing entries
    pub fn short(&self) -> String {
        self.0.chars().take(8).collect()
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How the user felt
///
/// Every variant carries a fixed weight used for scoring. The weight table
/// lives here and nowhere else: the display catalog can be reordered freely
/// without changing any statistic.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum MoodLevel {
    Great,
    Good,
    #[default]
    Okay,
    Low,
    Bad,
}

impl MoodLevel {
    /// All variants, best first
    pub const ALL: [MoodLevel; 5] = [
        MoodLevel::Great,
        MoodLevel::Good,
        MoodLevel::Okay,
        MoodLevel::Low,
        MoodLevel::Bad,
    ];

    /// Scoring weight: Great=5, Good=4, Okay=3, Low=2, Bad=1
    pub fn weight(self) -> u32 {
        match self {
            MoodLevel::Great => 5,
            MoodLevel::Good => 4,
            MoodLevel::Okay => 3,
            MoodLevel::Low => 2,
            MoodLevel::Bad => 1,
        }
    }

    /// The literal name used in the persisted blob
    pub fn as_str(self) -> &'static str {
        match self {
            MoodLevel::Great => "Great",
            MoodLevel::Good => "Good",
            MoodLevel::Okay => "Okay",
            MoodLevel::Low => "Low",
            MoodLevel::Bad => "Bad",
        }
    }
}

impl fmt::Display for MoodLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MoodLevel {
    type Err = DomainError;

    /// Parse a mood name, ignoring case and surrounding whitespace
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        MoodLevel::ALL
            .iter()
            .copied()
            .find(|m| m.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DomainError::InvalidMood(s.to_string()))
    }
}

/// The activity tags attached to an entry
///
/// Backed by an ordered set, so toggling the same tag twice can never leave
/// a duplicate behind. Serializes as a sorted JSON array of ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivitySet(BTreeSet<String>);

impl ActivitySet {
    pub fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Add a tag; returns false if it was already present
    pub fn insert(&mut self, id: impl Into<String>) -> bool {
        self.0.insert(id.into())
    }

    /// Flip a tag on or off, the way the logger form selects activities
    pub fn toggle(&mut self, id: &str) {
        if !self.0.remove(id) {
            self.0.insert(id.to_string());
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.contains(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Reject blank tag ids
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.0.iter().any(|id| id.trim().is_empty()) {
            return Err(DomainError::InvalidActivity(
                "Activity ids cannot be empty".to_string()
            ));
        }
        Ok(())
    }
}

impl<S: Into<String>> FromIterator<S> for ActivitySet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_are_fixed() {
        let weights: Vec<u32> = MoodLevel::ALL.iter().map(|m| m.weight()).collect();
        assert_eq!(weights, vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_parse_mood_ignores_case() {
        assert_eq!("great".parse::<MoodLevel>().unwrap(), MoodLevel::Great);
        assert_eq!(" LOW ".parse::<MoodLevel>().unwrap(), MoodLevel::Low);
        assert!("meh".parse::<MoodLevel>().is_err());
    }

    #[test]
    fn test_mood_serializes_as_literal() {
        assert_eq!(serde_json::to_string(&MoodLevel::Okay).unwrap(), "\"Okay\"");
        let parsed: Result<MoodLevel, _> = serde_json::from_str("\"Meh\"");
        assert!(parsed.is_err());
    }

    #[test]
    fn test_activity_set_has_no_duplicates() {
        let mut set: ActivitySet = ["work", "exercise", "work"].into_iter().collect();
        assert_eq!(set.len(), 2);

        assert!(!set.insert("work"));
        set.toggle("exercise");
        assert!(!set.contains("exercise"));
        set.toggle("reading");
        assert!(set.contains("reading"));
    }

    #[test]
    fn test_activity_set_dedupes_legacy_arrays() {
        let set: ActivitySet = serde_json::from_str(r#"["work","social","work"]"#).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(serde_json::to_string(&set).unwrap(), r#"["social","work"]"#);
    }

    #[test]
    fn test_entry_id_round_trip() {
        let id = EntryId::new();
        let parsed = EntryId::from_string(&id.to_string()).unwrap();
        assert_eq!(id, parsed);
        assert_eq!(id.short().len(), 8);
        assert!(EntryId::from_string("   ").is_err());
    }

    #[test]
    fn test_entry_id_accepts_non_uuid_ids() {
        let id = EntryId::from_string(" seed-0 ").unwrap();
        assert_eq!(id.as_str(), "seed-0");
        assert_eq!(id.short(), "seed-0");

        let parsed: EntryId = serde_json::from_str(r#""a1b2c3""#).unwrap();
        assert_eq!(parsed.to_string(), "a1b2c3");
        assert_eq!(serde_json::to_string(&parsed).unwrap(), r#""a1b2c3""#);
    }

    #[test]
    fn test_default_mood_is_okay() {
        assert_eq!(MoodLevel::default(), MoodLevel::Okay);
    }
}
