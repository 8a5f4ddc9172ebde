#![forbid(unsafe_code)]

//! Per-entry vertical gradients that blend into neighboring entries.
//!
//! Stacked in order, the rows of a timeline read as one continuous ribbon:
//! each row starts from a blend with the row above and ends in a blend with
//! the row below.
//!
//! # Stop schedule
//!
//! Neighbor weight in parentheses; the entry's own color takes the rest.
//!
//! ```text
//! only    135deg  own primary 0%, own secondary 100%
//! first   0% own primary | 25% own secondary | 50% next (0.3) | 100% next (0.7)
//! middle  0% prev (0.7) | 25% prev (0.3) | 50% own secondary | 75% next (0.3) | 100% next (0.7)
//! last    0% prev (0.7) | 50% prev (0.3) | 75% own primary | 100% own secondary
//! ```
//!
//! "prev" blends the previous entry's secondary into this entry's primary;
//! "next" blends this entry's secondary into the next entry's primary.

use std::fmt;

use serde::Serialize;

use crate::color::{Rgb, mix};
use crate::gradient::{GradientDirection, GradientStop, Influence, LinearGradient};
use crate::resolver::{ResolvedMoodColor, mood_colors};

/// Neighbor weight at the stop touching the neighbor.
const NEAR: f64 = 0.7;
/// Neighbor weight at the stop one step further in.
const FAR: f64 = 0.3;

/// Anything that carries a raw mood field.
pub trait MoodSource {
    fn mood_field(&self) -> Option<&str>;

    /// Resolved colors of this item's mood field.
    fn mood_colors(&self) -> ResolvedMoodColor {
        mood_colors(self.mood_field())
    }
}

impl MoodSource for str {
    fn mood_field(&self) -> Option<&str> {
        Some(self)
    }
}

impl MoodSource for String {
    fn mood_field(&self) -> Option<&str> {
        Some(self)
    }
}

impl<T: MoodSource> MoodSource for Option<T> {
    fn mood_field(&self) -> Option<&str> {
        self.as_ref().and_then(MoodSource::mood_field)
    }
}

impl<T: MoodSource + ?Sized> MoodSource for &T {
    fn mood_field(&self) -> Option<&str> {
        (**self).mood_field()
    }
}

/// Which neighbor of an entry was requested.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Side {
    Previous,
    Next,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Previous => write!(f, "previous"),
            Self::Next => write!(f, "next"),
        }
    }
}

/// Caller passed an index or sequence that cannot be composed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GradientError {
    #[error("entry index {index} is outside a sequence of {total}")]
    IndexOutOfRange { index: usize, total: usize },
    #[error("entry {index} of {total} needs its {side} neighbor, but only {len} entries were supplied")]
    MissingNeighbor {
        index: usize,
        total: usize,
        side: Side,
        len: usize,
    },
}

/// Compose the vertical gradient for `entry` at `index` of `total` entries.
///
/// `all` must hold the neighbors the position implies; a missing neighbor is
/// reported rather than substituted.
pub fn compose_entry_gradient<E: MoodSource>(
    entry: &E,
    index: usize,
    total: usize,
    all: &[E],
) -> Result<LinearGradient, GradientError> {
    let _span = tracing::debug_span!("compose_entry_gradient", index, total).entered();

    if index >= total {
        return Err(GradientError::IndexOutOfRange { index, total });
    }
    let own = entry.mood_colors();
    if total == 1 {
        return Ok(own.gradient());
    }

    let neighbor = |side: Side| -> Result<ResolvedMoodColor, GradientError> {
        let slot = match side {
            Side::Previous => index.checked_sub(1),
            Side::Next => index.checked_add(1),
        };
        slot.and_then(|i| all.get(i))
            .map(MoodSource::mood_colors)
            .ok_or(GradientError::MissingNeighbor {
                index,
                total,
                side,
                len: all.len(),
            })
    };

    let prev = if index > 0 {
        Some(neighbor(Side::Previous)?)
    } else {
        None
    };
    let next = if index + 1 < total {
        Some(neighbor(Side::Next)?)
    } else {
        None
    };

    let gradient = compose(&own, prev.as_ref(), next.as_ref());
    tracing::debug!(%gradient, "composed entry gradient");
    Ok(gradient)
}

/// Compose every row of an ordered sequence.
#[must_use]
pub fn compose_timeline<E: MoodSource>(all: &[E]) -> Vec<LinearGradient> {
    let colors: Vec<ResolvedMoodColor> = all.iter().map(MoodSource::mood_colors).collect();
    (0..colors.len())
        .map(|i| {
            let prev = i.checked_sub(1).and_then(|j| colors.get(j));
            compose(&colors[i], prev, colors.get(i + 1))
        })
        .collect()
}

fn compose(
    own: &ResolvedMoodColor,
    prev: Option<&ResolvedMoodColor>,
    next: Option<&ResolvedMoodColor>,
) -> LinearGradient {
    let stops = match (prev, next) {
        (None, None) => return own.gradient(),
        (None, Some(next)) => vec![
            GradientStop::own(0, own.primary),
            GradientStop::own(25, own.secondary),
            toward_next(50, own, next, FAR),
            toward_next(100, own, next, NEAR),
        ],
        (Some(prev), None) => vec![
            toward_previous(0, prev, own, NEAR),
            toward_previous(50, prev, own, FAR),
            GradientStop::own(75, own.primary),
            GradientStop::own(100, own.secondary),
        ],
        (Some(prev), Some(next)) => vec![
            toward_previous(0, prev, own, NEAR),
            toward_previous(25, prev, own, FAR),
            GradientStop::own(50, own.secondary),
            toward_next(75, own, next, FAR),
            toward_next(100, own, next, NEAR),
        ],
    };
    LinearGradient::new(GradientDirection::ToBottom, stops)
}

fn toward_previous(
    offset: u8,
    prev: &ResolvedMoodColor,
    own: &ResolvedMoodColor,
    weight: f64,
) -> GradientStop {
    GradientStop {
        offset,
        color: mix(own.primary, prev.secondary, weight),
        influence: Influence::Previous(weight),
    }
}

fn toward_next(
    offset: u8,
    own: &ResolvedMoodColor,
    next: &ResolvedMoodColor,
    weight: f64,
) -> GradientStop {
    GradientStop {
        offset,
        color: mix(own.secondary, next.primary, weight),
        influence: Influence::Next(weight),
    }
}

/// Short bridge from `current`'s secondary into `next`'s primary.
#[must_use]
pub fn seamless_gradient<E: MoodSource + ?Sized>(current: &E, next: &E) -> LinearGradient {
    let current = current.mood_colors();
    let next = next.mood_colors();
    LinearGradient::new(
        GradientDirection::ToBottom,
        vec![
            GradientStop::own(0, current.secondary),
            toward_next(50, &current, &next, FAR),
            GradientStop {
                offset: 100,
                color: next.primary,
                influence: Influence::Next(1.0),
            },
        ],
    )
}

/// Colors on either side of a row boundary and the color where they meet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TransitionColors {
    pub current: ResolvedMoodColor,
    pub next: ResolvedMoodColor,
    pub junction: Rgb,
}

#[must_use]
pub fn transition_colors<E: MoodSource + ?Sized>(current: &E, next: &E) -> TransitionColors {
    let current = current.mood_colors();
    let next = next.mood_colors();
    TransitionColors {
        current,
        next,
        junction: mix(current.secondary, next.primary, 0.5),
    }
}
