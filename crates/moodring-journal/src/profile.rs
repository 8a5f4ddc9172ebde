#![forbid(unsafe_code)]

//! Per-user mood profile: how often each mood appears across entries.
//!
//! Each entry counts a label at most once, however many times its mood field
//! repeats it. Unrecognized tokens are not counted.

use moodring_style::{MoodLabel, MoodSource, ResolvedMoodColor, mood_colors, parse_moods};
use serde::Serialize;

use crate::entry::JournalEntry;

/// Moods listed in [`MoodProfile::combined_mood`].
const COMBINED_LEN: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct MoodCount {
    pub mood: MoodLabel,
    pub count: usize,
}

/// Summary of a user's moods.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MoodProfile {
    pub entry_count: usize,
    /// Labels seen at least once, most frequent first. Ties follow the
    /// dominant-mood priority order.
    pub tally: Vec<MoodCount>,
    pub dominant_mood: MoodLabel,
    pub secondary_mood: Option<MoodLabel>,
    /// The top moods as a mood field, e.g. `"happy, calm, sad"`.
    pub combined_mood: String,
    pub colors: ResolvedMoodColor,
    pub gradient: String,
}

impl MoodProfile {
    /// Build a profile from a user's entries, in any order.
    #[must_use]
    pub fn from_entries(entries: &[JournalEntry]) -> Self {
        let mut counts = [0_usize; MoodLabel::ALL.len()];
        for entry in entries {
            let mut seen = [false; MoodLabel::ALL.len()];
            for label in parse_moods(entry.mood_field()).labels() {
                let slot = label as usize;
                if !seen[slot] {
                    seen[slot] = true;
                    counts[slot] += 1;
                }
            }
        }

        let mut tally: Vec<MoodCount> = MoodLabel::ALL
            .into_iter()
            .filter(|&mood| counts[mood as usize] > 0)
            .map(|mood| MoodCount {
                mood,
                count: counts[mood as usize],
            })
            .collect();
        tally.sort_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then(a.mood.priority_rank().cmp(&b.mood.priority_rank()))
        });

        let dominant_mood = tally.first().map_or(MoodLabel::Neutral, |c| c.mood);
        let secondary_mood = tally.get(1).map(|c| c.mood);
        let combined_mood = if tally.is_empty() {
            MoodLabel::Neutral.name().to_owned()
        } else {
            tally
                .iter()
                .take(COMBINED_LEN)
                .map(|c| c.mood.name())
                .collect::<Vec<_>>()
                .join(", ")
        };
        let colors = mood_colors(Some(&combined_mood));
        tracing::debug!(
            entries = entries.len(),
            dominant = %dominant_mood,
            combined = %combined_mood,
            "built mood profile"
        );

        Self {
            entry_count: entries.len(),
            tally,
            dominant_mood,
            secondary_mood,
            gradient: colors.gradient().to_string(),
            colors,
            combined_mood,
        }
    }

    #[must_use]
    pub fn count_of(&self, mood: MoodLabel) -> usize {
        self.tally
            .iter()
            .find(|c| c.mood == mood)
            .map_or(0, |c| c.count)
    }
}
