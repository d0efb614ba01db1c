// SPDX-License-Identifier: MIT
//
// wp-color color system — hex, 8-bit RGB and HSL.
//
// Single-character variable names (r, g, b, h, s, l, p, q, t) are the
// standard mathematical convention in color science.
#![allow(clippy::many_single_char_names)]
//
// Every palette computation in wcag-palette starts and ends here:
//
//   "#1a365d" ──parse──▶ Color { Rgb } ──▶ Hsl ──(harmony math)──▶ Hsl ──▶ Color ──▶ "#1A365D"
//
// A `Color` only exists once its hex string has been validated, so every
// conversion below is total. HSL uses degrees for hue and percentages for
// saturation and lightness, matching the way palette rules are written.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ─── Errors ──────────────────────────────────────────────────────────────────

/// Failure to turn a string into a [`Color`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    /// The input is not exactly six hex digits (with or without a leading `#`).
    #[error("invalid hex color {0:?}: expected six hex digits, optionally prefixed with '#'")]
    InvalidFormat(String),
}

// ─── Rgb ─────────────────────────────────────────────────────────────────────

/// An 8-bit sRGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert to HSL (hue in degrees, saturation/lightness in percent).
    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        rgb_to_hsl(self)
    }
}

// ─── Hsl ─────────────────────────────────────────────────────────────────────

/// A color in HSL space.
///
/// - `h`: hue in degrees, `[0, 360)`
/// - `s`: saturation in percent, `[0, 100]`
/// - `l`: lightness in percent, `[0, 100]`
///
/// Construction never clamps. Code that offsets saturation or lightness is
/// responsible for clamping before converting back to a [`Color`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    #[inline]
    #[must_use]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Same hue and saturation at a different lightness.
    #[inline]
    #[must_use]
    pub const fn with_lightness(self, l: f64) -> Self {
        Self { l, ..self }
    }

    /// Same hue and lightness at a different saturation.
    #[inline]
    #[must_use]
    pub const fn with_saturation(self, s: f64) -> Self {
        Self { s, ..self }
    }

    /// Convert to 8-bit RGB, rounding each channel to the nearest integer.
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        hsl_to_rgb(self)
    }
}

// ─── Color ───────────────────────────────────────────────────────────────────

/// A validated opaque sRGB color.
///
/// The canonical textual form is uppercase `#RRGGBB`, regardless of how the
/// color was written on input. Serializes as that string.
///
/// # Examples
///
/// ```
/// use wp_color::Color;
///
/// let navy: Color = "#1a365d".parse().unwrap();
/// assert_eq!(navy.to_hex(), "#1A365D");
///
/// let hsl = navy.hsl();
/// assert!(hsl.l < 50.0);
/// assert_eq!(Color::from_hsl(hsl.with_lightness(100.0)), Color::WHITE);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    rgb: Rgb,
}

impl Color {
    /// Pure black, `#000000`.
    pub const BLACK: Self = Self::from_rgb(0, 0, 0);

    /// Pure white, `#FFFFFF`.
    pub const WHITE: Self = Self::from_rgb(255, 255, 255);

    // ─── Constructors ────────────────────────────────────────────────────

    /// Parse `#RRGGBB` or `RRGGBB` (either case).
    ///
    /// # Errors
    ///
    /// Returns [`ColorParseError::InvalidFormat`] for anything that is not
    /// exactly six hex digits after an optional `#`.
    pub fn parse_hex(s: &str) -> Result<Self, ColorParseError> {
        parse_hex(s).ok_or_else(|| ColorParseError::InvalidFormat(s.to_owned()))
    }

    #[inline]
    #[must_use]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { rgb: Rgb::new(r, g, b) }
    }

    /// Build a color from HSL. Inputs are expected in range; see [`Hsl`].
    #[must_use]
    pub fn from_hsl(hsl: Hsl) -> Self {
        Self { rgb: hsl.to_rgb() }
    }

    // ─── Accessors ───────────────────────────────────────────────────────

    #[inline]
    #[must_use]
    pub const fn rgb(self) -> Rgb {
        self.rgb
    }

    #[must_use]
    pub fn hsl(self) -> Hsl {
        self.rgb.to_hsl()
    }

    /// Canonical uppercase `#RRGGBB`.
    #[must_use]
    pub fn to_hex(self) -> String {
        let Rgb { r, g, b } = self.rgb;
        format!("#{r:02X}{g:02X}{b:02X}")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color({})", self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse_hex(&s)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Self { rgb }
    }
}

// ─── Conversion Functions ────────────────────────────────────────────────────

/// Convert 8-bit RGB to HSL.
///
/// Achromatic colors report hue 0 and saturation 0. When two channels tie for
/// the maximum, red wins over green and green over blue.
fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let max_u8 = rgb.r.max(rgb.g).max(rgb.b);
    let min_u8 = rgb.r.min(rgb.g).min(rgb.b);

    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;
    let max = f64::from(max_u8) / 255.0;
    let min = f64::from(min_u8) / 255.0;
    let l = (max + min) / 2.0;

    if max_u8 == min_u8 {
        return Hsl::new(0.0, 0.0, l * 100.0);
    }

    let d = max - min;
    let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };

    let h = if max_u8 == rgb.r {
        (g - b) / d + if rgb.g < rgb.b { 6.0 } else { 0.0 }
    } else if max_u8 == rgb.g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl::new(h / 6.0 * 360.0, s * 100.0, l * 100.0)
}

/// Convert HSL to 8-bit RGB.
fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let h = hsl.h / 360.0;
    let s = hsl.s / 100.0;
    let l = hsl.l / 100.0;

    if s <= 0.0 {
        let v = to_channel(l);
        return Rgb::new(v, v, v);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { s.mul_add(-l, l + s) };
    let p = 2.0f64.mul_add(l, -q);

    Rgb::new(
        to_channel(hue_to_channel(p, q, h + 1.0 / 3.0)),
        to_channel(hue_to_channel(p, q, h)),
        to_channel(hue_to_channel(p, q, h - 1.0 / 3.0)),
    )
}

/// One channel of the HSL → RGB piecewise function.
#[inline]
fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

    if t < 1.0 / 6.0 {
        ((q - p) * 6.0).mul_add(t, p)
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        ((q - p) * (2.0 / 3.0 - t)).mul_add(6.0, p)
    } else {
        p
    }
}

/// Scale a `[0, 1]` channel to `[0, 255]`, rounding half away from zero.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_channel(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

// ─── Hex Parsing ─────────────────────────────────────────────────────────────

fn parse_hex(s: &str) -> Option<Color> {
    let digits = s.strip_prefix('#').unwrap_or(s).as_bytes();
    if digits.len() != 6 {
        return None;
    }
    let r = parse_hex_byte(&digits[0..2])?;
    let g = parse_hex_byte(&digits[2..4])?;
    let b = parse_hex_byte(&digits[4..6])?;
    Some(Color::from_rgb(r, g, b))
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(pair: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(pair[0])?;
    let lo = parse_hex_digit(pair[1])?;
    Some(hi << 4 | lo)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    fn assert_rgb_close(actual: Rgb, expected: Rgb) {
        let close = |a: u8, b: u8| (i16::from(a) - i16::from(b)).unsigned_abs() <= 1;
        assert!(
            close(actual.r, expected.r) && close(actual.g, expected.g) && close(actual.b, expected.b),
            "RGB mismatch: got {actual:?}, expected {expected:?}"
        );
    }

    // ── Parsing ─────────────────────────────────────────────────────────

    #[test]
    fn parses_with_and_without_hash() {
        let a = Color::parse_hex("#1A365D").unwrap();
        let b = Color::parse_hex("1A365D").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.rgb(), Rgb::new(0x1A, 0x36, 0x5D));
    }

    #[test]
    fn lowercase_input_normalizes_to_uppercase() {
        let c = Color::parse_hex("#0fae96").unwrap();
        assert_eq!(c.to_hex(), "#0FAE96");
        assert_eq!(c.to_string(), "#0FAE96");
    }

    #[test]
    fn rejects_malformed_input() {
        for bad in ["", "#", "#FFF", "FFFF", "#FFFFFFF", "#FFFFFFFF", "#GG0000", "##123456", " #123456", "#12345é"] {
            assert_eq!(
                Color::parse_hex(bad),
                Err(ColorParseError::InvalidFormat(bad.to_owned())),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn from_str_matches_parse_hex() {
        let c: Color = "ff8000".parse().unwrap();
        assert_eq!(c, Color::from_rgb(255, 128, 0));
        assert!("nope".parse::<Color>().is_err());
    }

    #[test]
    fn error_message_names_the_input() {
        let err = Color::parse_hex("#12").unwrap_err();
        assert!(err.to_string().contains("\"#12\""), "{err}");
    }

    // ── RGB → HSL ───────────────────────────────────────────────────────

    #[test]
    fn primaries_to_hsl() {
        let red = Color::from_rgb(255, 0, 0).hsl();
        assert!(approx_eq(red.h, 0.0, 1e-9) && approx_eq(red.s, 100.0, 1e-9) && approx_eq(red.l, 50.0, 1e-9));

        let green = Color::from_rgb(0, 255, 0).hsl();
        assert!(approx_eq(green.h, 120.0, 1e-9), "green hue: {}", green.h);

        let blue = Color::from_rgb(0, 0, 255).hsl();
        assert!(approx_eq(blue.h, 240.0, 1e-9), "blue hue: {}", blue.h);
    }

    #[test]
    fn achromatic_has_zero_hue_and_saturation() {
        let gray = Color::from_rgb(128, 128, 128).hsl();
        assert!(approx_eq(gray.h, 0.0, 1e-9));
        assert!(approx_eq(gray.s, 0.0, 1e-9));
        assert!(approx_eq(gray.l, 50.196, 0.01), "gray lightness: {}", gray.l);
    }

    #[test]
    fn navy_to_hsl() {
        let hsl = Color::parse_hex("#1A365D").unwrap().hsl();
        assert!(approx_eq(hsl.h, 214.9, 0.1), "hue: {}", hsl.h);
        assert!(approx_eq(hsl.s, 56.3, 0.1), "saturation: {}", hsl.s);
        assert!(approx_eq(hsl.l, 23.3, 0.1), "lightness: {}", hsl.l);
    }

    #[test]
    fn magenta_side_hue_stays_below_360() {
        let hsl = Color::from_rgb(255, 0, 1).hsl();
        assert!((0.0..360.0).contains(&hsl.h), "hue: {}", hsl.h);
        assert!(hsl.h > 359.0);
    }

    // ── HSL → RGB ───────────────────────────────────────────────────────

    #[test]
    fn hsl_to_known_colors() {
        assert_eq!(Color::from_hsl(Hsl::new(0.0, 100.0, 50.0)), Color::from_rgb(255, 0, 0));
        assert_eq!(Color::from_hsl(Hsl::new(120.0, 100.0, 25.0)), Color::from_rgb(0, 128, 0));
        assert_eq!(Color::from_hsl(Hsl::new(240.0, 100.0, 50.0)), Color::from_rgb(0, 0, 255));
        assert_eq!(Color::from_hsl(Hsl::new(39.0, 100.0, 50.0)).to_hex(), "#FFA600");
    }

    #[test]
    fn zero_saturation_is_gray() {
        let c = Color::from_hsl(Hsl::new(200.0, 0.0, 50.0));
        let Rgb { r, g, b } = c.rgb();
        assert_eq!((r, g), (g, b));
        assert_eq!(r, 128);
    }

    #[test]
    fn extremes_of_lightness() {
        assert_eq!(Color::from_hsl(Hsl::new(90.0, 70.0, 0.0)), Color::BLACK);
        assert_eq!(Color::from_hsl(Hsl::new(90.0, 70.0, 100.0)), Color::WHITE);
    }

    #[test]
    fn rgb_hsl_rgb_roundtrip_samples() {
        let samples = [
            Rgb::new(0x1A, 0x36, 0x5D),
            Rgb::new(0x0F, 0xAE, 0x96),
            Rgb::new(0xF8, 0x71, 0x71),
            Rgb::new(0x34, 0xD3, 0x99),
            Rgb::new(1, 2, 3),
            Rgb::new(254, 255, 253),
        ];
        for rgb in samples {
            assert_rgb_close(rgb.to_hsl().to_rgb(), rgb);
        }
    }

    // ── Serde ───────────────────────────────────────────────────────────

    #[test]
    fn serializes_as_canonical_hex() {
        let c = Color::parse_hex("#abcdef").unwrap();
        assert_eq!(serde_json::to_string(&c).unwrap(), "\"#ABCDEF\"");
    }

    #[test]
    fn deserialize_validates() {
        let c: Color = serde_json::from_str("\"1a365d\"").unwrap();
        assert_eq!(c.to_hex(), "#1A365D");
        assert!(serde_json::from_str::<Color>("\"#12345\"").is_err());
    }

    // ── Properties ──────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn hsl_hex_roundtrip_within_one(h in 0.0f64..360.0, s in 0.0f64..=100.0, l in 0.0f64..=100.0) {
            let color = Color::from_hsl(Hsl::new(h, s, l));
            let reparsed = Color::parse_hex(&color.to_hex()).unwrap();
            let (a, b) = (reparsed.rgb(), color.rgb());
            prop_assert!((i16::from(a.r) - i16::from(b.r)).abs() <= 1);
            prop_assert!((i16::from(a.g) - i16::from(b.g)).abs() <= 1);
            prop_assert!((i16::from(a.b) - i16::from(b.b)).abs() <= 1);
        }

        #[test]
        fn rgb_through_hsl_within_one(r: u8, g: u8, b: u8) {
            let rgb = Rgb::new(r, g, b);
            let back = rgb.to_hsl().to_rgb();
            prop_assert!((i16::from(back.r) - i16::from(r)).abs() <= 1, "{rgb:?} -> {back:?}");
            prop_assert!((i16::from(back.g) - i16::from(g)).abs() <= 1, "{rgb:?} -> {back:?}");
            prop_assert!((i16::from(back.b) - i16::from(b)).abs() <= 1, "{rgb:?} -> {back:?}");
        }

        #[test]
        fn hue_always_in_range(r: u8, g: u8, b: u8) {
            let hsl = Rgb::new(r, g, b).to_hsl();
            prop_assert!((0.0..360.0).contains(&hsl.h));
            prop_assert!((0.0..=100.0).contains(&hsl.s));
            prop_assert!((0.0..=100.0).contains(&hsl.l));
        }
    }
}
