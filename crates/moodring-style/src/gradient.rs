#![forbid(unsafe_code)]

//! Linear gradient values and their CSS rendering.

use std::fmt;

use serde::Serialize;

use crate::color::{Rgb, mix};

/// Axis a gradient runs along.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GradientDirection {
    /// Top-left to bottom-right (`135deg`), used for single-mood swatches.
    Diagonal,
    /// Top to bottom, used for stacked timeline rows.
    ToBottom,
}

impl fmt::Display for GradientDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Diagonal => write!(f, "135deg"),
            Self::ToBottom => write!(f, "to bottom"),
        }
    }
}

/// Where a stop's color comes from.
///
/// Neighbor variants carry the weight given to the neighboring entry's color;
/// the entry's own color receives the remainder.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "toward", content = "weight", rename_all = "snake_case")]
pub enum Influence {
    Own,
    Previous(f64),
    Next(f64),
}

impl Influence {
    /// Weight toward the previous entry (0 unless this is a previous blend).
    #[must_use]
    pub fn previous_weight(self) -> f64 {
        match self {
            Self::Previous(w) => w,
            _ => 0.0,
        }
    }

    /// Weight toward the next entry (0 unless this is a next blend).
    #[must_use]
    pub fn next_weight(self) -> f64 {
        match self {
            Self::Next(w) => w,
            _ => 0.0,
        }
    }
}

/// One `(offset%, color)` point of a gradient.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct GradientStop {
    /// Position in percent, `0..=100`.
    pub offset: u8,
    pub color: Rgb,
    pub influence: Influence,
}

impl GradientStop {
    #[must_use]
    pub const fn own(offset: u8, color: Rgb) -> Self {
        Self {
            offset,
            color,
            influence: Influence::Own,
        }
    }
}

/// A multi-stop linear gradient.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LinearGradient {
    direction: GradientDirection,
    stops: Vec<GradientStop>,
}

impl LinearGradient {
    /// Create a gradient; stops are sorted by offset (stable for equal offsets).
    #[must_use]
    pub fn new(direction: GradientDirection, mut stops: Vec<GradientStop>) -> Self {
        stops.sort_by_key(|stop| stop.offset);
        Self { direction, stops }
    }

    /// `135deg, primary 0%, secondary 100%`.
    #[must_use]
    pub fn diagonal(primary: Rgb, secondary: Rgb) -> Self {
        Self::new(
            GradientDirection::Diagonal,
            vec![GradientStop::own(0, primary), GradientStop::own(100, secondary)],
        )
    }

    #[must_use]
    pub fn direction(&self) -> GradientDirection {
        self.direction
    }

    /// Stops, sorted by offset.
    #[must_use]
    pub fn stops(&self) -> &[GradientStop] {
        &self.stops
    }

    /// Color at the first stop (black for an empty gradient).
    #[must_use]
    pub fn start_color(&self) -> Rgb {
        self.stops.first().map_or(Rgb::BLACK, |stop| stop.color)
    }

    /// Color at the last stop (black for an empty gradient).
    #[must_use]
    pub fn end_color(&self) -> Rgb {
        self.stops.last().map_or(Rgb::BLACK, |stop| stop.color)
    }

    /// Color of the first stop placed exactly at `offset`, if any.
    #[must_use]
    pub fn color_at_stop(&self, offset: u8) -> Option<Rgb> {
        self.stops
            .iter()
            .find(|stop| stop.offset == offset)
            .map(|stop| stop.color)
    }

    /// Sample the gradient at a normalized position in [0, 1].
    #[must_use]
    pub fn sample(&self, t: f64) -> Rgb {
        let pos = t.clamp(0.0, 1.0) * 100.0;
        let Some(first) = self.stops.first() else {
            return Rgb::BLACK;
        };
        if pos <= f64::from(first.offset) {
            return first.color;
        }
        let last = self.end_color();

        for window in self.stops.windows(2) {
            let (s0, s1) = (window[0], window[1]);
            let (p0, p1) = (f64::from(s0.offset), f64::from(s1.offset));
            if pos <= p1 {
                let span = p1 - p0;
                if span <= f64::EPSILON {
                    return s1.color;
                }
                return mix(s0.color, s1.color, (pos - p0) / span);
            }
        }

        last
    }
}

impl fmt::Display for LinearGradient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "linear-gradient({}", self.direction)?;
        for stop in &self.stops {
            write!(f, ", {} {}%", stop.color, stop.offset)?;
        }
        write!(f, ")")
    }
}
