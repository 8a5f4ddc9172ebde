#![forbid(unsafe_code)]

//! Mood field parsing and color resolution.
//!
//! A raw mood field (`"happy, sad"`) is parsed once into a [`MoodList`] of
//! [`MoodToken`]s. Unrecognized tokens are kept for display but always resolve
//! through the neutral palette entry.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::color::{Rgb, blend_uniform};
use crate::gradient::LinearGradient;
use crate::palette::{MoodColorPair, MoodLabel, normalize};

/// Text color used on every mood background.
pub const TEXT_COLOR: Rgb = Rgb::from_u32(0x2C3E50);

/// Light shadow that keeps [`TEXT_COLOR`] readable over saturated gradients.
pub const TEXT_SHADOW: &str = "0 2px 4px rgba(255,255,255,0.4), 0 1px 2px rgba(255,255,255,0.3)";

/// One parsed element of a mood field.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum MoodToken {
    Known(MoodLabel),
    /// Normalized text that is not in the vocabulary (possibly empty).
    Unknown(String),
}

impl MoodToken {
    /// Classify a raw token.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let normalized = normalize(raw);
        match normalized.parse::<MoodLabel>() {
            Ok(label) => Self::Known(label),
            Err(_) => {
                tracing::debug!(mood = %normalized, "unrecognized mood token");
                Self::Unknown(normalized)
            }
        }
    }

    /// The label whose colors this token renders with.
    #[must_use]
    pub fn label_or_neutral(&self) -> MoodLabel {
        match self {
            Self::Known(label) => *label,
            Self::Unknown(_) => MoodLabel::Neutral,
        }
    }

    #[must_use]
    pub fn colors(&self) -> &'static MoodColorPair {
        self.label_or_neutral().colors()
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Known(label) => label.name(),
            Self::Unknown(text) => text,
        }
    }
}

impl fmt::Display for MoodToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for MoodToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Ordered, non-deduplicated moods of one entry. Never empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MoodList(Vec<MoodToken>);

impl MoodList {
    /// The list an absent or empty field stands for.
    #[must_use]
    pub fn neutral() -> Self {
        Self(vec![MoodToken::Known(MoodLabel::Neutral)])
    }

    #[must_use]
    pub fn tokens(&self) -> &[MoodToken] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true for a list built by [`parse_moods`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MoodToken> {
        self.0.iter()
    }

    /// Recognized labels in order of appearance.
    pub fn labels(&self) -> impl Iterator<Item = MoodLabel> + '_ {
        self.0.iter().filter_map(|token| match token {
            MoodToken::Known(label) => Some(*label),
            MoodToken::Unknown(_) => None,
        })
    }

    #[must_use]
    pub fn contains(&self, label: MoodLabel) -> bool {
        self.labels().any(|l| l == label)
    }

    /// Highest-priority recognized mood; neutral when none is recognized.
    #[must_use]
    pub fn dominant(&self) -> MoodLabel {
        MoodLabel::PRIORITY
            .into_iter()
            .find(|&label| self.contains(label))
            .unwrap_or(MoodLabel::Neutral)
    }

    #[must_use]
    pub fn dominant_glyph(&self) -> &'static str {
        self.dominant().glyph()
    }

    /// Resolve to one color pair: the mood's own pair for a single token,
    /// otherwise the uniform blend of every token's primaries and secondaries.
    #[must_use]
    pub fn resolve(&self) -> ResolvedMoodColor {
        if let [only] = self.0.as_slice() {
            return ResolvedMoodColor::from_pair(only.colors());
        }
        let pairs: Vec<&MoodColorPair> = self.0.iter().map(MoodToken::colors).collect();
        let primaries: Vec<Rgb> = pairs.iter().map(|p| p.primary).collect();
        let secondaries: Vec<Rgb> = pairs.iter().map(|p| p.secondary).collect();
        ResolvedMoodColor {
            primary: blend_uniform(&primaries),
            secondary: blend_uniform(&secondaries),
            glyph: self.dominant_glyph(),
        }
    }
}

impl<'a> IntoIterator for &'a MoodList {
    type Item = &'a MoodToken;
    type IntoIter = std::slice::Iter<'a, MoodToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for MoodList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{token}")?;
        }
        Ok(())
    }
}

/// The colors an entry renders with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ResolvedMoodColor {
    pub primary: Rgb,
    pub secondary: Rgb,
    pub glyph: &'static str,
}

impl ResolvedMoodColor {
    #[must_use]
    pub fn from_pair(pair: &MoodColorPair) -> Self {
        Self {
            primary: pair.primary,
            secondary: pair.secondary,
            glyph: pair.glyph,
        }
    }

    /// `linear-gradient(135deg, primary 0%, secondary 100%)`.
    #[must_use]
    pub fn gradient(&self) -> LinearGradient {
        LinearGradient::diagonal(self.primary, self.secondary)
    }
}

/// Split a mood field into tokens. Absent or empty fields mean neutral.
#[must_use]
pub fn parse_moods(field: Option<&str>) -> MoodList {
    match field {
        None | Some("") => MoodList::neutral(),
        Some(field) => MoodList(field.split(',').map(MoodToken::parse).collect()),
    }
}

/// Resolve a parsed list to its colors.
#[must_use]
pub fn resolve_color(moods: &MoodList) -> ResolvedMoodColor {
    moods.resolve()
}

/// Highest-priority recognized mood in the list.
#[must_use]
pub fn dominant_mood(moods: &MoodList) -> MoodLabel {
    moods.dominant()
}

/// Glyph of the highest-priority mood in the list.
#[must_use]
pub fn dominant_glyph(moods: &MoodList) -> &'static str {
    moods.dominant_glyph()
}

/// Parse and resolve a raw mood field.
#[must_use]
pub fn mood_colors(field: Option<&str>) -> ResolvedMoodColor {
    parse_moods(field).resolve()
}

/// Representative glyph of a raw mood field.
#[must_use]
pub fn mood_glyph(field: Option<&str>) -> &'static str {
    parse_moods(field).dominant_glyph()
}

/// Single representative color of a raw mood field.
#[must_use]
pub fn simple_mood_color(field: Option<&str>) -> Rgb {
    mood_colors(field).primary
}
