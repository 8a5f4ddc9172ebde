#![forbid(unsafe_code)]

//! The mood palette: a compiled-in table from [`MoodLabel`] to its colors and glyph.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::color::Rgb;
use crate::gradient::LinearGradient;

/// One recognized emotion from the closed mood vocabulary.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum MoodLabel {
    Happy,
    Excited,
    Grateful,
    Hopeful,
    InLove,
    Calm,
    Neutral,
    Sad,
    Angry,
    Anxious,
    Confused,
}

/// Returned by [`MoodLabel::from_str`] for text outside the vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown mood {0:?}")]
pub struct UnknownMood(pub String);

impl MoodLabel {
    /// Every label, in legend order.
    pub const ALL: [MoodLabel; 11] = [
        MoodLabel::Happy,
        MoodLabel::Excited,
        MoodLabel::Grateful,
        MoodLabel::Hopeful,
        MoodLabel::InLove,
        MoodLabel::Calm,
        MoodLabel::Neutral,
        MoodLabel::Sad,
        MoodLabel::Angry,
        MoodLabel::Anxious,
        MoodLabel::Confused,
    ];

    /// Order used to pick the representative mood of a multi-mood entry.
    /// Positive and energetic moods surface first.
    pub const PRIORITY: [MoodLabel; 11] = [
        MoodLabel::Excited,
        MoodLabel::Happy,
        MoodLabel::Grateful,
        MoodLabel::Hopeful,
        MoodLabel::InLove,
        MoodLabel::Calm,
        MoodLabel::Neutral,
        MoodLabel::Sad,
        MoodLabel::Anxious,
        MoodLabel::Angry,
        MoodLabel::Confused,
    ];

    /// Canonical lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            MoodLabel::Happy => "happy",
            MoodLabel::Excited => "excited",
            MoodLabel::Grateful => "grateful",
            MoodLabel::Hopeful => "hopeful",
            MoodLabel::InLove => "in love",
            MoodLabel::Calm => "calm",
            MoodLabel::Neutral => "neutral",
            MoodLabel::Sad => "sad",
            MoodLabel::Angry => "angry",
            MoodLabel::Anxious => "anxious",
            MoodLabel::Confused => "confused",
        }
    }

    /// Position in [`MoodLabel::PRIORITY`]; lower wins.
    #[must_use]
    pub fn priority_rank(self) -> usize {
        Self::PRIORITY
            .iter()
            .position(|&label| label == self)
            .unwrap_or(Self::PRIORITY.len())
    }

    /// The palette entry for this label.
    #[must_use]
    pub fn colors(self) -> &'static MoodColorPair {
        &PALETTE[self as usize]
    }

    #[must_use]
    pub fn glyph(self) -> &'static str {
        self.colors().glyph
    }

    /// Match an already-normalized (trimmed, lowercase) name.
    fn from_normalized(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|label| label.name() == name)
    }
}

impl fmt::Display for MoodLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MoodLabel {
    type Err = UnknownMood;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize(s);
        Self::from_normalized(&normalized).ok_or(UnknownMood(normalized))
    }
}

impl Serialize for MoodLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Trim and lowercase a raw mood token.
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// The colors and glyph assigned to one mood.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoodColorPair {
    pub primary: Rgb,
    pub secondary: Rgb,
    pub glyph: &'static str,
}

impl MoodColorPair {
    const fn new(primary: u32, secondary: u32, glyph: &'static str) -> Self {
        Self {
            primary: Rgb::from_u32(primary),
            secondary: Rgb::from_u32(secondary),
            glyph,
        }
    }

    /// Diagonal primary → secondary swatch.
    #[must_use]
    pub fn gradient(&self) -> LinearGradient {
        LinearGradient::diagonal(self.primary, self.secondary)
    }
}

// Indexed by `MoodLabel as usize`; keep in declaration order.
static PALETTE: [MoodColorPair; 11] = [
    // warm, energetic
    MoodColorPair::new(0xFFD700, 0xFF8C00, "😊"),
    MoodColorPair::new(0xFF4500, 0xDC143C, "🤩"),
    MoodColorPair::new(0xFFA500, 0xFF6347, "🙏"),
    MoodColorPair::new(0x00CED1, 0x20B2AA, "✨"),
    MoodColorPair::new(0xFF69B4, 0xFF1493, "💕"),
    // cool
    MoodColorPair::new(0x4682B4, 0x5F9EA0, "😌"),
    MoodColorPair::new(0x808080, 0xA9A9A9, "😐"),
    // deep
    MoodColorPair::new(0x2F4F4F, 0x483D8B, "😢"),
    MoodColorPair::new(0x8B0000, 0xB22222, "😠"),
    MoodColorPair::new(0x4B0082, 0x800080, "😰"),
    MoodColorPair::new(0x708090, 0x778899, "😕"),
];

/// Palette entry for a raw label; unrecognized labels get the neutral entry.
#[must_use]
pub fn lookup(label: &str) -> &'static MoodColorPair {
    match label.parse::<MoodLabel>() {
        Ok(mood) => mood.colors(),
        Err(UnknownMood(name)) => {
            tracing::debug!(mood = %name, "unknown mood, using neutral palette entry");
            MoodLabel::Neutral.colors()
        }
    }
}

/// One row of the mood legend.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LegendEntry {
    pub mood: MoodLabel,
    pub glyph: &'static str,
    pub primary: Rgb,
    pub secondary: Rgb,
    pub gradient: String,
}

/// Every mood with its swatch, in legend order.
#[must_use]
pub fn legend() -> Vec<LegendEntry> {
    MoodLabel::ALL
        .into_iter()
        .map(|mood| {
            let colors = mood.colors();
            LegendEntry {
                mood,
                glyph: colors.glyph,
                primary: colors.primary,
                secondary: colors.secondary,
                gradient: colors.gradient().to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_order_matches_enum() {
        for label in MoodLabel::ALL {
            assert_eq!(PALETTE[label as usize], *label.colors());
        }
        assert_eq!(MoodLabel::Happy.colors().primary, Rgb::from_u32(0xFFD700));
        assert_eq!(MoodLabel::Confused.colors().secondary, Rgb::from_u32(0x778899));
        assert_eq!(MoodLabel::InLove.glyph(), "💕");
    }

    #[test]
    fn names_round_trip_through_from_str() {
        for label in MoodLabel::ALL {
            assert_eq!(label.name().parse::<MoodLabel>(), Ok(label));
        }
    }

    #[test]
    fn from_str_normalizes() {
        assert_eq!("  In Love ".parse::<MoodLabel>(), Ok(MoodLabel::InLove));
        assert_eq!("SAD".parse::<MoodLabel>(), Ok(MoodLabel::Sad));
        assert_eq!(
            "Melancholy".parse::<MoodLabel>(),
            Err(UnknownMood("melancholy".into()))
        );
    }

    #[test]
    fn lookup_falls_back_to_neutral() {
        assert_eq!(lookup("ANGRY "), MoodLabel::Angry.colors());
        assert_eq!(lookup("bewildered"), MoodLabel::Neutral.colors());
        assert_eq!(lookup(""), MoodLabel::Neutral.colors());
    }

    #[test]
    fn priority_covers_every_label_once() {
        let mut ranks: Vec<usize> = MoodLabel::ALL.iter().map(|l| l.priority_rank()).collect();
        ranks.sort_unstable();
        assert_eq!(ranks, (0..11).collect::<Vec<_>>());
        assert_eq!(MoodLabel::Excited.priority_rank(), 0);
        assert!(MoodLabel::Anxious.priority_rank() < MoodLabel::Angry.priority_rank());
    }

    #[test]
    fn legend_lists_all_moods_with_swatches() {
        let rows = legend();
        assert_eq!(rows.len(), 11);
        assert_eq!(rows[0].mood, MoodLabel::Happy);
        assert_eq!(
            rows[0].gradient,
            "linear-gradient(135deg, #ffd700 0%, #ff8c00 100%)"
        );
    }
}
