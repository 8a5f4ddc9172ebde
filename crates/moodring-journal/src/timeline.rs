#![forbid(unsafe_code)]

//! Timeline rows: each entry paired with the gradient it renders with.

use moodring_style::{
    GradientError, LinearGradient, MoodList, MoodSource, compose_entry_gradient, compose_timeline,
    parse_moods,
};
use serde::Serialize;
use time::PrimitiveDateTime;

use crate::entry::{JournalEntry, timestamp};

/// One rendered row of the journal list.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TimelineRow {
    pub id: i64,
    pub title: String,
    #[serde(serialize_with = "timestamp::serialize")]
    pub created_at: PrimitiveDateTime,
    pub glyph: &'static str,
    pub moods: MoodList,
    pub gradient: LinearGradient,
    /// `gradient` as a CSS `background` value.
    pub css: String,
}

impl TimelineRow {
    fn new(entry: &JournalEntry, gradient: LinearGradient) -> Self {
        let moods = parse_moods(entry.mood_field());
        Self {
            id: entry.id,
            title: entry.title.clone(),
            created_at: entry.created_at,
            glyph: moods.dominant_glyph(),
            moods,
            css: gradient.to_string(),
            gradient,
        }
    }
}

/// Render every entry, in the order given.
#[must_use]
pub fn render_timeline(entries: &[JournalEntry]) -> Vec<TimelineRow> {
    let _span = tracing::debug_span!("render_timeline", rows = entries.len()).entered();
    entries
        .iter()
        .zip(compose_timeline(entries))
        .map(|(entry, gradient)| TimelineRow::new(entry, gradient))
        .collect()
}

/// Render the single row at `index`, blending with its neighbors in `entries`.
pub fn render_row(entries: &[JournalEntry], index: usize) -> Result<TimelineRow, GradientError> {
    let total = entries.len();
    let entry = entries
        .get(index)
        .ok_or(GradientError::IndexOutOfRange { index, total })?;
    let gradient = compose_entry_gradient(entry, index, total, entries)?;
    Ok(TimelineRow::new(entry, gradient))
}
