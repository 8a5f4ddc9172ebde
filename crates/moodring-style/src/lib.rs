#![forbid(unsafe_code)]

//! Mood colors for MoodRing.
//!
//! This crate turns the mood field attached to a journal entry into colors:
//! - [`palette`] - the fixed mood → color pair + glyph table
//! - [`color`] - hex ↔ RGB conversion and weighted blending
//! - [`resolver`] - mood field parsing, blending, and dominant-mood selection
//! - [`composer`] - per-entry vertical gradients that blend into their neighbors
//!
//! Everything here is pure and allocation-light; no function performs I/O.
//!
//! # Example
//! ```
//! use moodring_style::{compose_entry_gradient, mood_colors, parse_moods};
//!
//! let moods = parse_moods(Some("Happy, SAD"));
//! assert_eq!(moods.to_string(), "happy, sad");
//! assert_eq!(mood_colors(Some("happy")).glyph, "😊");
//!
//! let entries = ["happy", "sad", "angry"];
//! let gradient = compose_entry_gradient(&entries[1], 1, entries.len(), &entries).unwrap();
//! assert!(gradient.to_string().starts_with("linear-gradient(to bottom"));
//! ```

pub mod color;
pub mod composer;
pub mod gradient;
pub mod palette;
pub mod resolver;

pub use color::{ColorError, Rgb, blend, blend_hex, blend_uniform, hex_to_rgb, mix, rgb_to_hex};
pub use composer::{
    GradientError, MoodSource, Side, TransitionColors, compose_entry_gradient, compose_timeline,
    seamless_gradient, transition_colors,
};
pub use gradient::{GradientDirection, GradientStop, Influence, LinearGradient};
pub use palette::{LegendEntry, MoodColorPair, MoodLabel, UnknownMood, legend, lookup};
pub use resolver::{
    MoodList, MoodToken, ResolvedMoodColor, TEXT_COLOR, TEXT_SHADOW, dominant_glyph, dominant_mood,
    mood_colors, mood_glyph, parse_moods, resolve_color, simple_mood_color,
};
