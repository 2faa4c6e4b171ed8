/// Static display catalogs for moods and activity tags
///
/// Entries only ever store the mood literal and the activity id. Labels,
/// emoji and icons are looked up here when something is rendered. The order
/// of `MOODS` is display order only; scoring uses `MoodLevel::weight`.

use crate::domain::MoodLevel;

/// How a mood is presented to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoodDefinition {
    pub mood: MoodLevel,
    pub label: &'static str,
    pub emoji: &'static str,
}

/// A selectable activity tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityTag {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

pub const MOODS: [MoodDefinition; 5] = [
    MoodDefinition { mood: MoodLevel::Great, label: "Happy :)", emoji: "🤩" },
    MoodDefinition { mood: MoodLevel::Good, label: "Good", emoji: "🙂" },
    MoodDefinition { mood: MoodLevel::Okay, label: "Okay", emoji: "😐" },
    MoodDefinition { mood: MoodLevel::Low, label: "Low", emoji: "😔" },
    MoodDefinition { mood: MoodLevel::Bad, label: "Bad", emoji: "😫" },
];

pub const ACTIVITIES: [ActivityTag; 7] = [
    ActivityTag { id: "work", label: "Work", icon: "briefcase" },
    ActivityTag { id: "exercise", label: "Exercise", icon: "dumbbell" },
    ActivityTag { id: "social", label: "Social", icon: "users" },
    ActivityTag { id: "gaming", label: "Gaming", icon: "gamepad" },
    ActivityTag { id: "reading", label: "Reading", icon: "book" },
    ActivityTag { id: "movies", label: "Movies", icon: "film" },
    ActivityTag { id: "date", label: "Date", icon: "heart" },
];

/// Display metadata for a mood
pub fn mood_definition(mood: MoodLevel) -> &'static MoodDefinition {
    // Every variant is in MOODS; Okay is the neutral fallback.
    MOODS
        .iter()
        .find(|d| d.mood == mood)
        .unwrap_or(&MOODS[2])
}

/// Look up an activity tag by id; unknown ids are skipped when rendering
pub fn activity(id: &str) -> Option<&'static ActivityTag> {
    ACTIVITIES.iter().find(|a| a.id == id)
}
