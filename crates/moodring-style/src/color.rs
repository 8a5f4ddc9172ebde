#![forbid(unsafe_code)]

//! RGB color values, hex conversion, and weighted blending.
//!
//! Parsing is strict (`#rrggbb` or `rrggbb`), but the rendering-facing entry
//! point [`hex_to_rgb`] never fails: malformed input resolves to black and is
//! logged. The strict path is [`Rgb::from_str`].

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

/// Errors produced by strict color parsing and blending.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    /// Input is not six hex digits with an optional leading `#`.
    #[error("malformed hex color {0:?}")]
    MalformedHex(String),
    /// `blend` was given a weight slice of a different length than its colors.
    #[error("blend weight count {weights} does not match color count {colors}")]
    WeightCountMismatch { colors: usize, weights: usize },
}

/// An opaque 24-bit RGB color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed `0xRRGGBB` value. The top byte is ignored.
    #[must_use]
    pub const fn from_u32(packed: u32) -> Self {
        Self {
            r: ((packed >> 16) & 0xff) as u8,
            g: ((packed >> 8) & 0xff) as u8,
            b: (packed & 0xff) as u8,
        }
    }

    /// Lowercase `#rrggbb` form.
    #[must_use]
    pub fn to_hex(self) -> String {
        self.to_string()
    }

    /// Channels as `f64`, the working precision for blending.
    #[inline]
    fn channels(self) -> [f64; 3] {
        [f64::from(self.r), f64::from(self.g), f64::from(self.b)]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::MalformedHex(s.to_owned()));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| ColorError::MalformedHex(s.to_owned()))
        };
        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Parse a hex color, falling back to black on malformed input.
#[must_use]
pub fn hex_to_rgb(hex: &str) -> Rgb {
    match hex.parse() {
        Ok(rgb) => rgb,
        Err(err) => {
            tracing::warn!(%err, "malformed hex color, using black");
            Rgb::BLACK
        }
    }
}

/// Round each channel to the nearest integer and pack as `#rrggbb`.
///
/// No clamping is applied: out-of-range channels saturate at the float to
/// `u8` conversion, so callers are expected to pass values in `0..=255`.
#[must_use]
pub fn rgb_to_hex(r: f64, g: f64, b: f64) -> String {
    pack(r, g, b).to_hex()
}

#[inline]
fn pack(r: f64, g: f64, b: f64) -> Rgb {
    Rgb::new(r.round() as u8, g.round() as u8, b.round() as u8)
}

/// Weighted per-channel sum of `colors`, rounded to the nearest integer.
///
/// Summation runs left to right in input order. An empty slice blends to black.
pub fn blend(colors: &[Rgb], weights: &[f64]) -> Result<Rgb, ColorError> {
    if colors.len() != weights.len() {
        return Err(ColorError::WeightCountMismatch {
            colors: colors.len(),
            weights: weights.len(),
        });
    }
    let mut acc = [0.0_f64; 3];
    for (color, &weight) in colors.iter().zip(weights) {
        for (sum, channel) in acc.iter_mut().zip(color.channels()) {
            *sum += channel * weight;
        }
    }
    Ok(pack(acc[0], acc[1], acc[2]))
}

/// Blend with equal `1/N` weights.
#[must_use]
pub fn blend_uniform(colors: &[Rgb]) -> Rgb {
    if colors.is_empty() {
        return Rgb::BLACK;
    }
    let weight = 1.0 / colors.len() as f64;
    let mut acc = [0.0_f64; 3];
    for color in colors {
        for (sum, channel) in acc.iter_mut().zip(color.channels()) {
            *sum += channel * weight;
        }
    }
    pack(acc[0], acc[1], acc[2])
}

/// Two-color blend where `toward` receives weight `t` and `from` gets `1 - t`.
#[must_use]
pub fn mix(from: Rgb, toward: Rgb, t: f64) -> Rgb {
    let t = t.clamp(0.0, 1.0);
    let [fr, fg, fb] = from.channels();
    let [tr, tg, tb] = toward.channels();
    pack(
        fr * (1.0 - t) + tr * t,
        fg * (1.0 - t) + tg * t,
        fb * (1.0 - t) + tb * t,
    )
}

/// Blend hex strings. `weights = None` means uniform weights.
///
/// Malformed colors contribute black, matching [`hex_to_rgb`].
pub fn blend_hex(colors: &[&str], weights: Option<&[f64]>) -> Result<String, ColorError> {
    let rgbs: Vec<Rgb> = colors.iter().map(|hex| hex_to_rgb(hex)).collect();
    let blended = match weights {
        Some(weights) => blend(&rgbs, weights)?,
        None => blend_uniform(&rgbs),
    };
    Ok(blended.to_hex())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    fn parses_with_and_without_hash() {
        assert_eq!("#FFD700".parse::<Rgb>(), Ok(Rgb::new(255, 215, 0)));
        assert_eq!("ff8c00".parse::<Rgb>(), Ok(Rgb::new(255, 140, 0)));
    }

    #[test]
    fn strict_parse_rejects_near_misses() {
        for bad in ["", "#", "#fff", "##ffd700", "#ffd7000", " #ffd700", "#ggd700", "+fd700"] {
            assert!(
                matches!(bad.parse::<Rgb>(), Err(ColorError::MalformedHex(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    #[traced_test]
    fn malformed_hex_falls_back_to_black_and_logs() {
        assert_eq!(hex_to_rgb("not-a-color"), Rgb::BLACK);
        assert!(logs_contain("malformed hex color"));
    }

    #[test]
    fn from_u32_unpacks_channels() {
        assert_eq!(Rgb::from_u32(0x2F4F4F), Rgb::new(0x2f, 0x4f, 0x4f));
    }

    #[test]
    fn hex_output_is_lowercase_and_padded() {
        assert_eq!(rgb_to_hex(0.0, 10.0, 255.0), "#000aff");
        assert_eq!(Rgb::new(171, 205, 239).to_hex(), "#abcdef");
    }

    #[test]
    fn rgb_to_hex_rounds_half_away_from_zero() {
        assert_eq!(rgb_to_hex(127.5, 0.49, 254.5), "#8000ff");
    }

    #[test]
    fn rgb_to_hex_out_of_range_saturates() {
        assert_eq!(rgb_to_hex(300.0, -5.0, 256.0), "#ff00ff");
    }

    #[test]
    fn weighted_blend_of_gold_and_gray() {
        let gold = Rgb::from_u32(0xFFD700);
        let gray = Rgb::from_u32(0x808080);
        // 255*.7 + 128*.3 = 216.9, 215*.7 + 128*.3 = 188.9, 0*.7 + 128*.3 = 38.4
        assert_eq!(blend(&[gold, gray], &[0.7, 0.3]), Ok(Rgb::new(217, 189, 38)));
    }

    #[test]
    fn blend_rejects_mismatched_weights() {
        let err = blend(&[Rgb::BLACK, Rgb::BLACK], &[1.0]).unwrap_err();
        assert_eq!(err, ColorError::WeightCountMismatch { colors: 2, weights: 1 });
    }

    #[test]
    fn empty_blend_is_black() {
        assert_eq!(blend(&[], &[]), Ok(Rgb::BLACK));
        assert_eq!(blend_uniform(&[]), Rgb::BLACK);
    }

    #[test]
    fn blend_hex_defaults_to_uniform_weights() {
        let blended = blend_hex(&["#000000", "#ffffff"], None).unwrap();
        // 127.5 rounds up
        assert_eq!(blended, "#808080");
        let explicit = blend_hex(&["#000000", "#ffffff"], Some(&[0.5, 0.5][..])).unwrap();
        assert_eq!(blended, explicit);
    }

    #[test]
    fn mix_endpoints_are_inputs() {
        let a = Rgb::from_u32(0x483D8B);
        let b = Rgb::from_u32(0x8B0000);
        assert_eq!(mix(a, b, 0.0), a);
        assert_eq!(mix(a, b, 1.0), b);
    }
}
