/// Streak calculation over calendar days
///
/// A streak counts calendar days that have at least one entry, not entries:
/// three check-ins on the same day still make a one-day streak.

use std::collections::BTreeSet;

use chrono::{FixedOffset, NaiveDate};

use crate::domain::MoodEntry;

/// The distinct calendar days with at least one entry, oldest first
fn logged_days(entries: &[MoodEntry], offset: &FixedOffset) -> BTreeSet<NaiveDate> {
    entries.iter().map(|e| e.calendar_day(offset)).collect()
}

/// Count consecutive days backwards from `start` that appear in `days`
fn run_ending_at(days: &BTreeSet<NaiveDate>, start: NaiveDate) -> u32 {
    let mut streak = 0;
    let mut checking_date = Some(start);

    while let Some(day) = checking_date {
        if !days.contains(&day) {
            break;
        }
        streak += 1;
        checking_date = day.pred_opt();
    }

    streak
}

/// Consecutive days with entries, counted back from the latest entry's day
///
/// Stops at the first calendar day with no entries. Empty input gives 0.
pub fn recent_streak(entries: &[MoodEntry], offset: &FixedOffset) -> u32 {
    let days = logged_days(entries, offset);
    match days.iter().next_back() {
        Some(&latest) => run_ending_at(&days, latest),
        None => 0,
    }
}

/// The recent streak, but only while it is still alive
///
/// A streak survives until the end of the day after its last entry: with
/// `today` as the reference, the latest entry must be from today or
/// yesterday, otherwise the result is 0.
pub fn current_streak(entries: &[MoodEntry], today: NaiveDate, offset: &FixedOffset) -> u32 {
    let days = logged_days(entries, offset);
    let Some(&latest) = days.iter().next_back() else {
        return 0;
    };

    let days_since = (today - latest).num_days();
    if days_since > 1 {
        return 0;
    }
    run_ending_at(&days, latest)
}

/// The longest run of consecutive logged days anywhere in the journal
pub fn longest_streak(entries: &[MoodEntry], offset: &FixedOffset) -> u32 {
    let days = logged_days(entries, offset);

    let mut longest = 0;
    let mut current = 0;
    let mut last_date: Option<NaiveDate> = None;

    for day in days {
        current = match last_date {
            Some(prev) if (day - prev).num_days() == 1 => current + 1,
            _ => 1,
        };
        longest = longest.max(current);
        last_date = Some(day);
    }

    longest
}
